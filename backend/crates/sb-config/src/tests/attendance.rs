use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use chrono::FixedOffset;
use googletest::assert_that;
use googletest::prelude::eq;
use sb_core::DayBoundary;
use serial_test::serial;

// =========================================================================
// Attendance Config
// =========================================================================

#[test]
#[serial]
fn given_no_config_when_load_then_day_boundary_is_utc() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.attendance.day_boundary, eq(DayBoundary::Utc));
}

#[test]
#[serial]
fn given_fixed_offset_in_toml_when_load_then_parsed() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [attendance]
              day_boundary = "+07:00"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    let offset = FixedOffset::east_opt(7 * 3600).unwrap();
    assert_that!(
        config.attendance.day_boundary,
        eq(DayBoundary::Fixed(offset))
    );
}

#[test]
#[serial]
fn given_env_override_when_load_then_boundary_replaced() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[attendance]\nday_boundary = \"local\"",
    )
    .unwrap();
    let _boundary = EnvGuard::set("SB_ATTENDANCE_DAY_BOUNDARY", "utc");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.attendance.day_boundary, eq(DayBoundary::Utc));
}

#[test]
#[serial]
fn given_garbage_env_boundary_when_load_then_default_kept() {
    // Given - apply_env_parse ignores unparseable values
    let (_temp, _guard) = setup_config_dir();
    let _boundary = EnvGuard::set("SB_ATTENDANCE_DAY_BOUNDARY", "tomorrow");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.attendance.day_boundary, eq(DayBoundary::Utc));
}
