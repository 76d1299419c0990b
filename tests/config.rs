#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use workhours::libs::config::Config;

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_defaults_without_file(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.current_user_id.is_none());
        assert!(config.current_user_id().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let mut config = Config::read().unwrap();
        config.current_user_id = Some(3);
        config.save().unwrap();

        let reloaded = Config::read().unwrap();
        assert_eq!(reloaded.current_user_id, Some(3));
        assert_eq!(reloaded.current_user_id().unwrap(), 3);
    }
}
