#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use workhours::libs::event::{EventType, WorkdayEvent};
    use workhours::libs::formatter::TimeWorked;
    use workhours::libs::grouping::{group_workday_events, GroupKind};

    fn dt(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn test_groups_a_full_workday() {
        let events = vec![
            WorkdayEvent::new(EventType::StartWorkday, dt(9, 0, 0)),
            WorkdayEvent::new(EventType::StartBreak, dt(11, 0, 0)),
            WorkdayEvent::new(EventType::EndBreak, dt(11, 30, 0)),
            WorkdayEvent::new(EventType::EndWorkday, dt(17, 0, 0)),
        ];

        let grouped = group_workday_events(&events, dt(18, 0, 0));
        assert_eq!(grouped.len(), 3);

        assert_eq!(grouped[0].kind, GroupKind::StartWorkday);
        assert_eq!(grouped[0].start, dt(9, 0, 0));
        assert_eq!(grouped[0].end, None);
        assert_eq!(grouped[0].duration, None);

        assert_eq!(grouped[1].kind, GroupKind::Break);
        assert_eq!(grouped[1].start, dt(11, 0, 0));
        assert_eq!(grouped[1].end, Some(dt(11, 30, 0)));
        assert_eq!(grouped[1].duration, Some(TimeWorked::from_seconds(30 * 60)));

        // The closing row carries the gross workday span.
        assert_eq!(grouped[2].kind, GroupKind::EndWorkday);
        assert_eq!(grouped[2].start, dt(17, 0, 0));
        assert_eq!(grouped[2].duration, Some(TimeWorked::from_seconds(8 * 3600)));
    }

    #[test]
    fn test_ongoing_break_measured_up_to_now() {
        let events = vec![
            WorkdayEvent::new(EventType::StartWorkday, dt(9, 0, 0)),
            WorkdayEvent::new(EventType::StartBreak, dt(12, 0, 0)),
        ];

        let now = dt(12, 10, 30);
        let grouped = group_workday_events(&events, now);
        assert_eq!(grouped.len(), 2);

        assert_eq!(grouped[1].kind, GroupKind::BreakOngoing);
        assert_eq!(grouped[1].start, dt(12, 0, 0));
        assert_eq!(grouped[1].end, Some(now));
        assert_eq!(grouped[1].duration, Some(TimeWorked::from_seconds(10 * 60 + 30)));
    }

    #[test]
    fn test_matched_start_break_is_folded_into_break_row() {
        let events = vec![
            WorkdayEvent::new(EventType::StartWorkday, dt(9, 0, 0)),
            WorkdayEvent::new(EventType::StartBreak, dt(10, 0, 0)),
            WorkdayEvent::new(EventType::EndBreak, dt(10, 15, 0)),
            WorkdayEvent::new(EventType::StartBreak, dt(13, 0, 0)),
            WorkdayEvent::new(EventType::EndBreak, dt(13, 45, 0)),
        ];

        let grouped = group_workday_events(&events, dt(14, 0, 0));
        let kinds: Vec<GroupKind> = grouped.iter().map(|group| group.kind).collect();
        assert_eq!(kinds, vec![GroupKind::StartWorkday, GroupKind::Break, GroupKind::Break]);
    }

    #[test]
    fn test_empty_log_groups_to_nothing() {
        let grouped = group_workday_events(&[], dt(9, 0, 0));
        assert!(grouped.is_empty());
    }
}
