#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use workhours::db::users::Users;
    use workhours::libs::clock::MockClock;
    use workhours::libs::tracker::Tracker;
    use workhours::libs::user::Settings;

    struct UsersTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for UsersTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            UsersTestContext { _temp_dir: temp_dir }
        }
    }

    fn test_settings(username: &str) -> Settings {
        Settings {
            username: username.to_string(),
            paid_break_duration: 45,
        }
    }

    fn dt(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_insert_and_fetch_user(_ctx: &mut UsersTestContext) {
        let mut users = Users::new().unwrap();

        let id = users.insert(&test_settings("Mark S.")).unwrap();
        let user = users.fetch(id).unwrap().unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.settings.username, "Mark S.");
        assert_eq!(user.settings.paid_break_duration, 45);
        assert!(user.tracking_data.workdays.is_empty());
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_duplicate_username_rejected(_ctx: &mut UsersTestContext) {
        let mut users = Users::new().unwrap();

        users.insert(&test_settings("Mark S.")).unwrap();
        let error = users.insert(&test_settings("Mark S.")).unwrap_err();

        assert!(error.to_string().contains("already taken"));
        assert_eq!(users.count().unwrap(), 1);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_fetch_nonexistent_user(_ctx: &mut UsersTestContext) {
        let mut users = Users::new().unwrap();
        assert!(users.fetch(42).unwrap().is_none());
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_update_persists_tracking_data(_ctx: &mut UsersTestContext) {
        let mut users = Users::new().unwrap();
        let id = users.insert(&test_settings("Helly R.")).unwrap();
        let mut user = users.fetch(id).unwrap().unwrap();

        let clock = Arc::new(MockClock::new(dt(9, 0, 0)));
        let mut tracker = Tracker::with_clock(&mut user, clock.clone());
        tracker.start_workday().unwrap();
        clock.set(dt(11, 0, 0));
        tracker.start_break().unwrap();
        drop(tracker);

        users.update(&user).unwrap();
        let reloaded = users.fetch(id).unwrap().unwrap();

        assert_eq!(reloaded, user);
        assert_eq!(reloaded.tracking_data.workdays.len(), 1);
        assert_eq!(reloaded.tracking_data.workdays[0].events.len(), 2);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_fetch_all_and_count(_ctx: &mut UsersTestContext) {
        let mut users = Users::new().unwrap();
        assert_eq!(users.count().unwrap(), 0);

        users.insert(&test_settings("Mark S.")).unwrap();
        users.insert(&test_settings("Helly R.")).unwrap();
        users.insert(&test_settings("Irving B.")).unwrap();

        let all = users.fetch_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(users.count().unwrap(), 3);

        let usernames: Vec<&str> = all.iter().map(|user| user.settings.username.as_str()).collect();
        assert_eq!(usernames, vec!["Mark S.", "Helly R.", "Irving B."]);
    }
}
