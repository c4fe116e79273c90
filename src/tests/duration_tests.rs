//! Duration codec tests for the `<int>h<int>m` wire format.

use crate::domain::TaskDuration;
use rstest::rstest;

#[rstest]
#[case("2h30m", 9_000_000)]
#[case("0h0m", 0)]
#[case("1h05m", 3_900_000)]
#[case("0h90m", 5_400_000)]
#[case("100h0m", 360_000_000)]
fn parse_accepts_well_formed_durations(#[case] input: &str, #[case] expected_millis: i64) {
    let duration = TaskDuration::parse(input).expect("duration should parse");
    assert_eq!(duration.as_millis(), expected_millis);
}

#[rstest]
#[case("abc")]
#[case("12h")]
#[case("30m")]
#[case("h30m")]
#[case("2hm")]
#[case("2h30")]
#[case("2h30mX")]
#[case(" 2h30m")]
#[case("2h 30m")]
#[case("-1h0m")]
#[case("")]
fn parse_rejects_malformed_durations(#[case] input: &str) {
    assert!(TaskDuration::parse(input).is_err());
}

#[rstest]
fn parse_rejects_overflowing_hours() {
    let input = format!("{}h0m", i64::MAX);
    assert!(TaskDuration::parse(&input).is_err());
}

#[rstest]
#[case(9_000_000, "2 hours 30 minutes")]
#[case(0, "0 hours 0 minutes")]
#[case(3_661_000, "1 hours 1 minutes")]
#[case(59_999, "0 hours 0 minutes")]
#[case(13_500_000, "3 hours 45 minutes")]
fn format_truncates_to_whole_minutes(#[case] millis: i64, #[case] expected: &str) {
    assert_eq!(
        TaskDuration::from_millis(millis).format_hours_minutes(),
        expected
    );
}

#[rstest]
#[case(-1)]
#[case(-60_000)]
#[case(i64::MIN)]
fn from_millis_clamps_negative_counts_to_zero(#[case] millis: i64) {
    let duration = TaskDuration::from_millis(millis);
    assert_eq!(duration.as_millis(), 0);
    assert_eq!(duration.format_hours_minutes(), "0 hours 0 minutes");
}

#[rstest]
fn saturating_add_caps_at_numeric_bound() {
    let total = TaskDuration::from_millis(i64::MAX)
        .saturating_add(TaskDuration::from_millis(1));
    assert_eq!(total.as_millis(), i64::MAX);
}
