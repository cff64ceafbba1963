#[cfg(test)]
mod tests {
    use dolist::api::remote::{RemoteConfig, DEFAULT_TABLE};
    use dolist::libs::config::{BackendKind, Config, LocalConfig, CONFIG_FILE_NAME};
    use dolist::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives every test its own data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        data: DataStorage,
        api_url: String,
        api_key: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let data = DataStorage::with_base_path(temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                data,
                api_url: "https://project.example.co".to_string(),
                api_key: "public-anon-key".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.backend, BackendKind::Local);
        assert!(config.local.is_none());
        assert!(config.remote.is_none());
        assert_eq!(config.quota_bytes(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.data).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            backend: BackendKind::Remote,
            local: Some(LocalConfig { quota_bytes: Some(5_000_000) }),
            remote: Some(RemoteConfig {
                api_url: ctx.api_url.clone(),
                api_key: ctx.api_key.clone(),
                table: DEFAULT_TABLE.to_string(),
            }),
        };
        config.save_to(&ctx.data).unwrap();

        let read = Config::read_from(&ctx.data).unwrap();
        assert_eq!(read, config);
        assert_eq!(read.quota_bytes(), Some(5_000_000));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.data.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(
            path,
            format!(r#"{{"remote": {{"api_url": "{}", "api_key": "{}"}}}}"#, ctx.api_url, ctx.api_key),
        )
        .unwrap();

        let config = Config::read_from(&ctx.data).unwrap();
        assert_eq!(config.backend, BackendKind::Local);
        assert_eq!(config.remote.unwrap().table, DEFAULT_TABLE);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.data.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, r#"{"backend": "cloud"}"#).unwrap();

        assert!(Config::read_from(&ctx.data).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_backend_names(_ctx: &mut ConfigTestContext) {
        assert_eq!(BackendKind::Local.to_string(), "local");
        assert_eq!(serde_json::to_string(&BackendKind::Remote).unwrap(), "\"remote\"");
    }
}
