use crate::tests::{memory_store, test_user};
use crate::{AttendanceLedger, DomainError};

use std::str::FromStr;

use chrono::{TimeZone, Utc};
use sb_core::DayBoundary;

#[tokio::test]
async fn given_second_check_in_same_day_when_recorded_then_conflict() {
    let ledger = AttendanceLedger::new(memory_store(), DayBoundary::Utc);
    let user = test_user("a");
    let morning = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 1, 5, 18, 0, 0).unwrap();

    ledger.record_check_in(&user, morning).await.unwrap();
    let second = ledger.record_check_in(&user, evening).await;

    assert!(matches!(
        second,
        Err(DomainError::AlreadyCheckedIn { .. })
    ));
    assert_eq!(ledger.list_check_ins("a").await.unwrap().len(), 1);
}

#[tokio::test]
async fn given_check_ins_on_distinct_days_when_recorded_then_both_persist() {
    let ledger = AttendanceLedger::new(memory_store(), DayBoundary::Utc);
    let user = test_user("a");
    let friday = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
    let saturday = Utc.with_ymd_and_hms(2024, 1, 6, 9, 0, 0).unwrap();

    ledger.record_check_in(&user, friday).await.unwrap();
    ledger.record_check_in(&user, saturday).await.unwrap();

    let listed = ledger.list_check_ins("a").await.unwrap();
    assert_eq!(listed.len(), 2);
    // Newest first
    assert_eq!(listed[0].timestamp, saturday);
    assert_eq!(listed[1].timestamp, friday);
}

#[tokio::test]
async fn given_full_week_when_listed_then_sorted_newest_first() {
    let ledger = AttendanceLedger::new(memory_store(), DayBoundary::Utc);
    let user = test_user("a");

    for day in 1..=5 {
        let at = Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
        ledger.record_check_in(&user, at).await.unwrap();
    }

    let listed = ledger.list_check_ins("a").await.unwrap();
    assert!(listed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[tokio::test]
async fn given_users_check_in_independently_then_no_cross_conflict() {
    let ledger = AttendanceLedger::new(memory_store(), DayBoundary::Utc);
    let ada = test_user("ada");
    let brian = test_user("brian");
    let morning = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();

    ledger.record_check_in(&ada, morning).await.unwrap();
    ledger.record_check_in(&brian, morning).await.unwrap();

    let for_ada = ledger.list_check_ins("ada").await.unwrap();
    assert_eq!(for_ada.len(), 1);
    assert_eq!(for_ada[0].display_name, "User ada");
}

#[tokio::test]
async fn given_offset_boundary_when_utc_day_splits_then_both_check_ins_allowed() {
    let boundary = DayBoundary::from_str("+07:00").unwrap();
    let ledger = AttendanceLedger::new(memory_store(), boundary);
    let user = test_user("a");

    // Same UTC date, but 16:00Z is 23:00 local and 18:00Z is already 01:00
    // the next local day.
    let late = Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap();
    let next_local_day = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();

    ledger.record_check_in(&user, late).await.unwrap();
    ledger.record_check_in(&user, next_local_day).await.unwrap();

    assert_eq!(ledger.list_check_ins("a").await.unwrap().len(), 2);
}

#[tokio::test]
async fn given_offset_boundary_when_utc_dates_differ_then_same_local_day_conflicts() {
    let boundary = DayBoundary::from_str("+07:00").unwrap();
    let ledger = AttendanceLedger::new(memory_store(), boundary);
    let user = test_user("a");

    // Different UTC dates, same +07:00 calendar day.
    let first = Utc.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2024, 3, 2, 16, 59, 0).unwrap();

    ledger.record_check_in(&user, first).await.unwrap();
    let result = ledger.record_check_in(&user, second).await;

    assert!(matches!(result, Err(DomainError::AlreadyCheckedIn { .. })));
}

#[tokio::test]
async fn given_simultaneous_check_ins_when_recorded_then_exactly_one_wins() {
    let ledger = AttendanceLedger::new(memory_store(), DayBoundary::Utc);
    let user = test_user("racer");
    let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();

    let (a, b) = tokio::join!(
        ledger.record_check_in(&user, now),
        ledger.record_check_in(&user, now)
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
    assert_eq!(ledger.list_check_ins("racer").await.unwrap().len(), 1);
}

#[tokio::test]
async fn given_no_check_ins_when_listed_then_empty() {
    let ledger = AttendanceLedger::new(memory_store(), DayBoundary::Utc);

    assert!(ledger.list_check_ins("nobody").await.unwrap().is_empty());
}
