//! Tests for `HH:MM` time parsing and `YYYY-MM-DD` date validation.

use chrono::NaiveDate;
use worktime_engine::{parse_date, ScheduleError, TimeOfDay, TimeRange};

// ── Dates ───────────────────────────────────────────────────────────────────

#[test]
fn valid_iso_date_is_accepted() {
    assert_eq!(
        parse_date("2023-01-01").unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    );
    assert_eq!(
        parse_date(" 2024-10-11 ").unwrap(),
        NaiveDate::from_ymd_opt(2024, 10, 11).unwrap()
    );
}

#[test]
fn out_of_range_month_or_day_is_rejected() {
    for text in ["2020-13-01", "2020-00-10", "2020-01-32", "2020-01-00", "2023-02-30"] {
        assert!(
            matches!(parse_date(text), Err(ScheduleError::InvalidDate(_))),
            "{} should be rejected",
            text
        );
    }
}

#[test]
fn malformed_structure_is_rejected() {
    for text in ["", "2024-1-05", "2024/10/10", "10-10-2024", "2024-10-10T09:00", "abcd-ef-gh"] {
        let err = parse_date(text).unwrap_err();
        assert!(err.is_invalid_input(), "{:?} should be invalid input", text);
    }
}

// ── Times ───────────────────────────────────────────────────────────────────

#[test]
fn time_parses_and_formats_zero_padded() {
    let t = TimeOfDay::parse("07:05").unwrap();
    assert_eq!(t.hour(), 7);
    assert_eq!(t.minute(), 5);
    assert_eq!(t.minutes(), 425);
    assert_eq!(t.to_string(), "07:05");
    assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
}

#[test]
fn malformed_time_is_rejected() {
    for text in ["24:00", "12:60", "7:05", "0705", "12-30", "noon"] {
        assert!(
            matches!(TimeOfDay::parse(text), Err(ScheduleError::InvalidTime(_))),
            "{} should be rejected",
            text
        );
    }
}

#[test]
fn from_hm_bounds() {
    assert_eq!(TimeOfDay::from_hm(23, 59).map(|t| t.to_string()), Some("23:59".to_string()));
    assert!(TimeOfDay::from_hm(24, 0).is_none());
    assert!(TimeOfDay::from_hm(10, 60).is_none());
}

#[test]
fn times_order_chronologically() {
    let early: TimeOfDay = "08:59".parse().unwrap();
    let late: TimeOfDay = "09:00".parse().unwrap();
    assert!(early < late);
}

// ── Ranges ──────────────────────────────────────────────────────────────────

#[test]
fn range_parses_and_formats() {
    let range: TimeRange = "09:00-10:30".parse().unwrap();
    assert_eq!(range.duration_minutes(), 90);
    assert_eq!(range.to_string(), "09:00-10:30");
}

#[test]
fn empty_or_reversed_range_is_rejected() {
    assert!(matches!(
        TimeRange::parse("10:00-10:00"),
        Err(ScheduleError::InvalidInterval(_))
    ));
    assert!(matches!(
        TimeRange::parse("11:00-10:00"),
        Err(ScheduleError::InvalidInterval(_))
    ));
    assert!(matches!(TimeRange::parse("10:00"), Err(ScheduleError::InvalidTime(_))));
}

#[test]
fn overlap_excludes_touching_ranges() {
    let a: TimeRange = "09:00-10:00".parse().unwrap();
    let b: TimeRange = "10:00-11:00".parse().unwrap();
    let c: TimeRange = "09:30-10:30".parse().unwrap();

    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&b));
}

#[test]
fn serde_uses_string_form() {
    let range: TimeRange = "12:00-13:00".parse().unwrap();
    assert_eq!(serde_json::to_string(&range).unwrap(), r#""12:00-13:00""#);

    let time: TimeOfDay = serde_json::from_str(r#""16:30""#).unwrap();
    assert_eq!(time.to_string(), "16:30");
}
