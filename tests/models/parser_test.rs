use binocular_eval::{MeasurementCode, MeasurementRecord, parse_measurement, parse_or_zero};

#[test]
fn test_parse_returns_none_only_for_blank_or_non_numeric() {
    let numeric = [
        ("0", 0.0),
        ("15", 15.0),
        ("-4", -4.0),
        ("+3", 3.0),
        ("2.75", 2.75),
        ("-0.5", -0.5),
        (".5", 0.5),
        ("1e1", 10.0),
        ("\t6\n", 6.0),
    ];
    for (raw, expected) in numeric {
        assert_eq!(parse_measurement(raw), Some(expected), "input {raw:?}");
    }

    let absent = ["", " ", "\t", "x", "--4", "4 pd", "1,5", "NaN", "nan", "inf", "Infinity"];
    for raw in absent {
        assert_eq!(parse_measurement(raw), None, "input {raw:?}");
        assert_eq!(parse_or_zero(raw), 0.0, "input {raw:?}");
    }
}

#[test]
fn test_blank_and_zero_stay_distinct() {
    let record = MeasurementRecord::new()
        .with(MeasurementCode::AfOu, "")
        .with(MeasurementCode::AfOd, "0");

    assert_eq!(record.value(MeasurementCode::AfOu), None);
    assert_eq!(record.value(MeasurementCode::AfOd), Some(0.0));
    assert_eq!(record.value_or_zero(MeasurementCode::AfOu), 0.0);
}
