use sb_core::DayBoundary;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// Where one check-in day ends and the next begins
    pub day_boundary: DayBoundary,
}
