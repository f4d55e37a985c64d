#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todolist::commands::serve::ServerArgs;
    use todolist::libs::config::{parse_port, Config, ServerConfig, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT};
    use todolist::libs::data_storage::DataStorage;

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("todolist"));
            let config_path = storage.get_path(CONFIG_FILE_NAME).unwrap();
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
                storage,
            }
        }
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.database, None);
        assert_eq!(config.socket_addr(), "127.0.0.1:8000");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_storage_creates_directory(ctx: &mut ConfigTestContext) {
        assert!(ctx.config_path.parent().unwrap().is_dir());
        assert_eq!(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), ctx.config_path);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9090,
            },
            database: Some(PathBuf::from("/var/lib/todolist/tasks.db")),
        };

        config.save_to(&ctx.config_path).unwrap();
        let read = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(read, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, r#"{ "server": { "port": 5000 } }"#).unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .apply_env_from(env(&[
                ("TODOLIST_HOST", "0.0.0.0"),
                ("TODOLIST_PORT", "8080"),
                ("TODOLIST_DB", "/tmp/tasks.db"),
            ]))
            .unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/tasks.db"));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = Config::default().apply_env_from(env(&[("TODOLIST_PORT", "  ")])).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_env_port() {
        assert!(Config::default().apply_env_from(env(&[("TODOLIST_PORT", "eighty")])).is_err());
        assert!(parse_port("70000").is_err());
        assert_eq!(parse_port(" 8001 ").unwrap(), 8001);
    }

    #[test]
    fn test_cli_flags_win_over_env() {
        let from_env = Config::default()
            .apply_env_from(env(&[("TODOLIST_HOST", "0.0.0.0"), ("TODOLIST_PORT", "8080")]))
            .unwrap();

        let args = ServerArgs {
            host: None,
            port: Some(3000),
            db: Some(PathBuf::from("cli.db")),
        };
        let config = args.apply(from_env);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database, Some(PathBuf::from("cli.db")));
    }
}
