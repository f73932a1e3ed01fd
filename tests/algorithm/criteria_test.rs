use binocular_eval::CriterionResult;
use binocular_eval::algorithm::binocular::criteria::{
    PERCIVAL_MISSING, PERCIVAL_NOT_MET, SHEARD_MISSING, percival, sheard,
};

#[test]
fn test_sheard_uses_phoria_magnitude() {
    // 7 pd eso or exo against a 14 pd BO break: compensating vergence 7
    assert_eq!(sheard(Some(7.0), Some(14.0)), CriterionResult::satisfied());
    assert_eq!(sheard(Some(-7.0), Some(14.0)), CriterionResult::satisfied());
    assert_eq!(sheard(Some(-7.5), Some(14.0)), CriterionResult::unmet());
}

#[test]
fn test_sheard_never_reports_error_when_values_present() {
    for phoria in [-20.0, -6.0, 0.0, 3.0, 12.0] {
        for bo_break in [0.0, 4.0, 18.0, 40.0] {
            assert_eq!(sheard(Some(phoria), Some(bo_break)).error, None);
        }
    }
}

#[test]
fn test_sheard_missing_values() {
    assert_eq!(sheard(None, None), CriterionResult::failed(SHEARD_MISSING));
}

#[test]
fn test_percival_boundary() {
    // ideal = (18 - 6) / 3 = 4
    assert_eq!(
        percival(Some(4.0), Some(18.0), Some(6.0)),
        CriterionResult::satisfied()
    );
    assert_eq!(
        percival(Some(-4.5), Some(18.0), Some(6.0)),
        CriterionResult::failed(PERCIVAL_NOT_MET)
    );
}

#[test]
fn test_percival_phoria_is_optional() {
    assert_eq!(percival(None, Some(18.0), Some(6.0)), CriterionResult::satisfied());
    assert_eq!(
        percival(Some(-3.0), None, None),
        CriterionResult::failed(PERCIVAL_MISSING)
    );
}
