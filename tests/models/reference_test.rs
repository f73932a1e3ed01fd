use binocular_eval::{EvaluationError, MeasurementCode, RangeStatus, range_for, range_for_name};

#[test]
fn test_amplitude_bounds_are_linear_in_age() {
    for age in [0.0, 10.0, 30.0, 44.0, 60.0] {
        let range = range_for(MeasurementCode::AmplitudeOs, Some(age));
        assert_eq!(range.min, 15.0 - 0.25 * age);
        assert_eq!(range.max, 25.0 - 0.25 * age);
    }
}

#[test]
fn test_every_vocabulary_name_resolves() {
    for code in MeasurementCode::ALL {
        let range = range_for_name(code.as_str(), Some(30.0)).unwrap();
        assert_eq!(range, range_for(code, Some(30.0)));
    }
}

#[test]
fn test_unknown_name_fails_fast() {
    match range_for_name("bof_break_far", None) {
        Err(EvaluationError::UnknownCode(name)) => assert_eq!(name, "bof_break_far"),
        other => panic!("expected UnknownCode, got {other:?}"),
    }
}

#[test]
fn test_phoria_classification() {
    let range = range_for(MeasurementCode::PhoriaNear, None);
    assert_eq!(range.classify(-8.0), RangeStatus::Below);
    assert_eq!(range.classify(-3.0), RangeStatus::Within);
    assert_eq!(range.classify(2.0), RangeStatus::Above);
}
