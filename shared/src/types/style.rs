//! Render style selection

use serde::{Deserialize, Serialize};

/// How several localized messages are combined into one display string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStyle {
    /// Plain text entries separated by a visible separator
    Plain,
    /// RTL block markup, one block per message, for rich-text surfaces
    #[default]
    MarkedUp,
}

impl RenderStyle {
    pub fn code(&self) -> &'static str {
        match self {
            RenderStyle::Plain => "plain",
            RenderStyle::MarkedUp => "marked-up",
        }
    }
}

impl std::fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(RenderStyle::Plain),
            "marked-up" | "markedup" | "marked_up" | "html" => Ok(RenderStyle::MarkedUp),
            _ => Err(format!("Unsupported render style: {}", s)),
        }
    }
}
