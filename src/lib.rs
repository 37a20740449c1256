use config::{Config, ConfigError};
use serde::Deserialize;

pub mod domain;
pub mod global;
pub mod progression;

#[derive(Clone, Debug, Deserialize)]
pub struct SandboxConfig {
    pub logger: Logger,
}

impl SandboxConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("logger.level", "INFO")?
            .add_source(config::File::with_name("sandbox.toml").required(false))
            .add_source(config::Environment::with_prefix("SANDBOX").separator("_"))
            .build()?
            .try_deserialize::<SandboxConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_into_tracing() {
        assert_eq!(tracing::Level::from(&Level::WARN), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(&Level::TRACE), tracing::Level::TRACE);
    }

    #[test]
    fn test_config_defaults_to_info() {
        let config = Config::builder()
            .set_default("logger.level", "INFO")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<SandboxConfig>()
            .unwrap();
        assert_eq!(config.logger.level, Level::INFO);
    }

    #[test]
    fn test_config_override() {
        let config = Config::builder()
            .set_default("logger.level", "INFO")
            .unwrap()
            .set_override("logger.level", "DEBUG")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<SandboxConfig>()
            .unwrap();
        assert_eq!(config.logger.level, Level::DEBUG);
    }
}
