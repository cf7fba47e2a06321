//! Percentage math: elapsed deadline window and reported completion.

use chrono::{DateTime, Utc};

use super::task::ProgressEvent;

/// How much of the creation-to-deadline window has passed, in `[0, 100]`.
///
/// Once `now` reaches the deadline the answer is pinned at 100. Inside the
/// window the ratio is truncated toward zero and clamped below at 0, so a
/// clock reading before `created_at` still yields 0. A degenerate window
/// (deadline at or before creation) also reports 100; task creation rejects
/// such deadlines, this branch only keeps the function total.
pub fn elapsed_percentage(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    deadline: DateTime<Utc>,
) -> u8 {
    if now >= deadline {
        return 100;
    }

    let total = (deadline - created_at).num_milliseconds();
    if total <= 0 {
        return 100;
    }

    let spent = (now - created_at).num_milliseconds();
    let ratio = 100.0 * spent as f64 / total as f64;
    ratio.trunc().max(0.0) as u8
}

/// Percentage from the most recently appended event, 0 when there is none.
pub fn completion_percentage(events: &[ProgressEvent]) -> u8 {
    events.last().map_or(0, |e| e.result_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn zero_at_creation_instant() {
        assert_eq!(elapsed_percentage(at(8), at(8), at(18)), 0);
    }

    #[rstest]
    #[case::at_deadline(18, 100)]
    #[case::past_deadline(20, 100)]
    fn pinned_to_100_from_the_deadline_on(#[case] now_hour: u32, #[case] expected: u8) {
        assert_eq!(elapsed_percentage(at(8), at(now_hour), at(18)), expected);
    }

    #[rstest]
    #[case::one_tenth(9, 10)]
    #[case::half(13, 50)]
    #[case::nine_tenths(17, 90)]
    fn proportional_inside_the_window(#[case] now_hour: u32, #[case] expected: u8) {
        // 10h window starting at 08:00.
        assert_eq!(elapsed_percentage(at(8), at(now_hour), at(18)), expected);
    }

    #[test]
    fn truncates_toward_zero() {
        let created = at(8);
        let deadline = created + Duration::hours(3);
        // 1h of 3h = 33.33..% -> 33
        assert_eq!(
            elapsed_percentage(created, created + Duration::hours(1), deadline),
            33
        );
    }

    #[test]
    fn clock_before_creation_clamps_to_zero() {
        assert_eq!(elapsed_percentage(at(8), at(6), at(18)), 0);
    }

    #[test]
    fn degenerate_window_reports_100() {
        // Rejected at creation time; the function still answers.
        assert_eq!(elapsed_percentage(at(8), at(7), at(8)), 100);
        assert_eq!(elapsed_percentage(at(8), at(7), at(6)), 100);
    }

    #[test]
    fn completion_is_zero_without_events() {
        assert_eq!(completion_percentage(&[]), 0);
    }

    #[test]
    fn completion_follows_the_latest_event() {
        let events = vec![
            ProgressEvent::new(80, at(9)),
            ProgressEvent::new(30, at(10)),
        ];
        assert_eq!(completion_percentage(&events), 30);
    }
}
