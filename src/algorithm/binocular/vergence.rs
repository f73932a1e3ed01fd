//! Fusional vergence chart series

use crate::models::measurement::{MeasurementCode, MeasurementRecord};
use crate::models::report::{SeriesLabel, VergenceSeriesPoint};

/// Build the distance and near points, in that order
///
/// Missing values read as `0` because the series feeds a numeric axis.
#[must_use]
pub fn build(record: &MeasurementRecord) -> [VergenceSeriesPoint; 2] {
    use crate::models::measurement::MeasurementCode as C;

    [
        point(
            record,
            SeriesLabel::Distance,
            [
                C::BifBreakDistance,
                C::BifRecoveryDistance,
                C::BofBreakDistance,
                C::BofRecoveryDistance,
            ],
        ),
        point(
            record,
            SeriesLabel::Near,
            [
                C::BifBreakNear,
                C::BifRecoveryNear,
                C::BofBreakNear,
                C::BofRecoveryNear,
            ],
        ),
    ]
}

fn point(
    record: &MeasurementRecord,
    label: SeriesLabel,
    [bi_break, bi_recovery, bo_break, bo_recovery]: [MeasurementCode; 4],
) -> VergenceSeriesPoint {
    VergenceSeriesPoint {
        label,
        bi_break: negate(record.value_or_zero(bi_break)),
        bi_recovery: negate(record.value_or_zero(bi_recovery)),
        bo_break: record.value_or_zero(bo_break),
        bo_recovery: record.value_or_zero(bo_recovery),
    }
}

// Subtracting from zero keeps a blank field at +0.0 rather than -0.0.
fn negate(value: f64) -> f64 {
    0.0 - value
}
