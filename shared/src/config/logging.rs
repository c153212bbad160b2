//! Log filter and output format

use serde::{Deserialize, Serialize};

use super::Environment;

/// Crates whose events the configured level applies to
pub const PIPELINE_TARGETS: [&str; 3] = ["sufra_core", "sufra_shared", "sufra_cli"];

/// Level for every other crate when `level` is a bare level name
const DEPENDENCY_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Bare level (`debug`) or a full filter directive (`sufra_core=trace,warn`)
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// ANSI colors; only honored for terminal formats
    #[serde(default)]
    pub colored: bool,

    /// Include file and line of each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                format: LogFormat::Pretty,
                colored: true,
                source_location: true,
            },
            Environment::Staging => Self {
                level: String::from("info"),
                format: LogFormat::Compact,
                colored: false,
                source_location: false,
            },
            Environment::Production => Self {
                level: String::from("warn"),
                format: LogFormat::Json,
                colored: false,
                source_location: false,
            },
        }
    }

    /// Filter directive for the subscriber
    ///
    /// A bare level is scoped to the pipeline crates; anything containing
    /// `=` or `,` is passed through unchanged.
    pub fn filter_directive(&self) -> String {
        let level = self.level.trim();
        if level.contains('=') || level.contains(',') {
            return level.to_string();
        }

        let mut directive = String::from(DEPENDENCY_LEVEL);
        for target in PIPELINE_TARGETS {
            directive.push_str(&format!(",{}={}", target, level));
        }
        directive
    }

    pub fn use_ansi(&self) -> bool {
        self.colored && self.format != LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" | "text" => Ok(LogFormat::Compact),
            _ => Err(format!("Unsupported log format: {}", s)),
        }
    }
}
