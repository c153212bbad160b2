//! Configuration for the translation pipeline and its hosts
//!
//! - `environment` - Deployment environment detection
//! - `logging` - Log filter and output format

pub mod environment;
pub mod logging;

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::errors::{ConfigError, ConfigResult};
use crate::types::RenderStyle;

pub use environment::Environment;
pub use logging::{LogFormat, LoggingConfig};

/// Environment variable naming a catalog override file
pub const CATALOG_PATH_VAR: &str = "SUFRA_CATALOG_PATH";
/// Environment variable selecting the default render style
pub const RENDER_STYLE_VAR: &str = "SUFRA_RENDER_STYLE";
/// Environment variable overriding the log filter
pub const LOG_LEVEL_VAR: &str = "SUFRA_LOG";
/// Environment variable overriding the log format
pub const LOG_FORMAT_VAR: &str = "SUFRA_LOG_FORMAT";

/// Complete translator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslatorConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Optional TOML file whose entries override the embedded catalog
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Render style used when the caller does not pick one
    #[serde(default)]
    pub default_style: RenderStyle,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl TranslatorConfig {
    /// Defaults for `environment`, without overrides
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            catalog_path: None,
            default_style: RenderStyle::MarkedUp,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }

    /// Environment defaults with the `SUFRA_*` overrides applied
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::for_environment(Environment::from_env());

        if let Some(path) = non_empty_var(CATALOG_PATH_VAR) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(style) = non_empty_var(RENDER_STYLE_VAR) {
            config.default_style = style
                .parse()
                .map_err(|message| invalid(RENDER_STYLE_VAR, message))?;
        }
        if let Some(level) = non_empty_var(LOG_LEVEL_VAR) {
            config.logging.level = level;
        }
        if let Some(format) = non_empty_var(LOG_FORMAT_VAR) {
            config.logging.format = format
                .parse()
                .map_err(|message| invalid(LOG_FORMAT_VAR, message))?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
}
