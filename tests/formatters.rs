#[cfg(test)]
mod tests {
    use chrono::Duration;
    use workhours::libs::formatter::{format_duration, TimeWorked};

    #[test]
    fn test_from_seconds_breakdown() {
        assert_eq!(TimeWorked::from_seconds(0), TimeWorked::ZERO);
        assert_eq!(
            TimeWorked::from_seconds(59),
            TimeWorked {
                hours: 0,
                minutes: 0,
                seconds: 59
            }
        );
        assert_eq!(
            TimeWorked::from_seconds(60),
            TimeWorked {
                hours: 0,
                minutes: 1,
                seconds: 0
            }
        );
        assert_eq!(
            TimeWorked::from_seconds(3661),
            TimeWorked {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(
            TimeWorked::from_seconds(8 * 3600 + 45 * 60),
            TimeWorked {
                hours: 8,
                minutes: 45,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_from_seconds_clamps_negative_input() {
        assert_eq!(TimeWorked::from_seconds(-1), TimeWorked::ZERO);
        assert_eq!(TimeWorked::from_seconds(-3600), TimeWorked::ZERO);
    }

    #[test]
    fn test_minutes_and_seconds_stay_in_range() {
        for seconds in [1, 61, 3599, 3600, 86399, 86400, 90061] {
            let time = TimeWorked::from_seconds(seconds);
            assert!(time.minutes < 60);
            assert!(time.seconds < 60);
            assert_eq!(time.total_seconds(), seconds);
        }
    }

    #[test]
    fn test_display_format() {
        assert_eq!(TimeWorked::from_seconds(3661).to_string(), "01:01:01");
        assert_eq!(TimeWorked::from_seconds(12 * 3600 + 35 * 60 + 25).to_string(), "12:35:25");
        assert_eq!(TimeWorked::ZERO.to_string(), "00:00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
    }
}
