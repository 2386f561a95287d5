/// Browser storage key holding the chosen locale code
pub const LANGUAGE_STORAGE_KEY: &str = "lang";

/// Log level used when nothing else is configured (`RUST_LOG` wins on native targets)
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level_works_as_env_filter() {
        let parsed: log::LevelFilter = DEFAULT_LOG_LEVEL.as_str().parse().unwrap();
        assert_eq!(parsed, log::LevelFilter::Info);
        assert_eq!(DEFAULT_LOG_LEVEL.to_level_filter(), log::LevelFilter::Info);
    }
}
