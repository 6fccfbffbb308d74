use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Remaining time until the exam, split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

pub fn parse_exam_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// First-run default: a week from today.
pub fn default_exam_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(7)).unwrap_or(today)
}

/// The countdown targets midnight at the start of the exam day.
pub fn exam_target(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// `None` means the target has passed (expired); once expired, every later
/// `now` stays expired. Values never go negative.
pub fn time_left(target: NaiveDateTime, now: NaiveDateTime) -> Option<TimeLeft> {
    let delta = (target - now).num_seconds();
    if delta <= 0 {
        return None;
    }
    Some(TimeLeft {
        days: delta / 86_400,
        hours: delta / 3_600 % 24,
        minutes: delta / 60 % 60,
        seconds: delta % 60,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn base_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    #[test]
    fn ninety_seconds_out_counts_down() {
        let now = base_now();
        let target = now + Duration::seconds(90);

        let tl = time_left(target, now).unwrap();
        assert_eq!((tl.days, tl.hours, tl.minutes, tl.seconds), (0, 0, 1, 30));

        // one tick later
        let tl = time_left(target, now + Duration::seconds(1)).unwrap();
        assert_eq!((tl.days, tl.hours, tl.minutes, tl.seconds), (0, 0, 1, 29));
    }

    #[test]
    fn expired_stays_expired() {
        let now = base_now();
        let target = now - Duration::seconds(1);
        assert_eq!(time_left(target, now), None);
        assert_eq!(time_left(target, now + Duration::days(3)), None);
        // exactly zero is already expired
        assert_eq!(time_left(now, now), None);
    }

    #[test]
    fn unit_split_is_stable_across_a_long_range() {
        let now = base_now();
        let target = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
        let tl = time_left(target, now).unwrap();
        assert_eq!((tl.days, tl.hours, tl.minutes, tl.seconds), (2, 3, 4, 5));
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_exam_date("2026-08-14"),
            NaiveDate::from_ymd_opt(2026, 8, 14)
        );
        assert_eq!(parse_exam_date(" 2026-08-14 "), NaiveDate::from_ymd_opt(2026, 8, 14));
        assert_eq!(parse_exam_date("14/08/2026"), None);
        assert_eq!(parse_exam_date("soon"), None);
    }

    #[test]
    fn default_date_is_a_week_out() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(
            default_exam_date(today),
            NaiveDate::from_ymd_opt(2026, 8, 14).unwrap()
        );
    }
}
