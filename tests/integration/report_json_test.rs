use binocular_eval::utils::test::blank_record;
use binocular_eval::{EvaluationOptions, MeasurementRecord, evaluate};
use serde_json::json;

/// The report serializes with the keys and sign convention the chart expects
#[test]
fn test_report_json_shape() -> binocular_eval::Result<()> {
    let record: MeasurementRecord = serde_json::from_value(json!({
        "npc": "15",
        "phoria_near": "-4",
        "bof_break_near": "18",
        "bif_break_near": "6",
        "bif_recovery_near": "4",
        "bof_recovery_near": "",
    }))?;

    let report = evaluate(&record, &EvaluationOptions::new());
    let value = serde_json::to_value(&report)?;

    assert_eq!(
        value["findings"],
        json!([{
            "code": "npc",
            "message": "NPC receded (15 cm)",
            "diagnosis": "Convergence Insufficiency",
        }])
    );
    assert_eq!(value["diagnoses"], json!(["Convergence Insufficiency"]));
    assert_eq!(value["sheard"], json!({ "valid": true, "error": null }));
    assert_eq!(value["percival"], json!({ "valid": true, "error": null }));
    assert_eq!(
        value["vergenceSeries"],
        json!([
            {
                "label": "Distance",
                "biBreak": 0.0,
                "biRecovery": 0.0,
                "boBreak": 0.0,
                "boRecovery": 0.0,
            },
            {
                "label": "Near",
                "biBreak": -6.0,
                "biRecovery": -4.0,
                "boBreak": 18.0,
                "boRecovery": 0.0,
            },
        ])
    );
    Ok(())
}

#[test]
fn test_blank_report_json() -> binocular_eval::Result<()> {
    let report = evaluate(&blank_record(), &EvaluationOptions::new());
    let value = serde_json::to_value(&report)?;

    assert_eq!(value["findings"], json!([]));
    assert_eq!(value["diagnoses"], json!([]));
    assert_eq!(
        value["sheard"]["error"],
        json!("Missing required values for Sheard Criterion")
    );
    assert_eq!(
        value["percival"]["error"],
        json!("Missing required values for Percival's Criterion")
    );
    Ok(())
}

#[test]
fn test_unknown_code_in_json_is_rejected() {
    let result = serde_json::from_value::<MeasurementRecord>(json!({ "npc": "8", "npd": "3" }));
    assert!(result.is_err());
}
