//! Translation domains

use serde::{Deserialize, Serialize};

/// Frontend area whose backend errors share one translation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    /// Login and self-registration forms
    Auth,
    /// Admin user management
    AdminUser,
    /// Admin branch management
    AdminBranch,
    /// Delivery areas and their fees
    DeliveryArea,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Auth,
        Domain::AdminUser,
        Domain::AdminBranch,
        Domain::DeliveryArea,
    ];

    /// Stable identifier used in configuration and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Domain::Auth => "auth",
            Domain::AdminUser => "admin-user",
            Domain::AdminBranch => "admin-branch",
            Domain::DeliveryArea => "delivery-area",
        }
    }

    /// Catalog section holding this domain's localized texts
    pub fn catalog_section(&self) -> &'static str {
        match self {
            Domain::Auth => "auth",
            Domain::AdminUser => "admin_user",
            Domain::AdminBranch => "admin_branch",
            Domain::DeliveryArea => "delivery_area",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "auth" | "login" | "register" => Ok(Domain::Auth),
            "admin-user" | "users" => Ok(Domain::AdminUser),
            "admin-branch" | "branches" => Ok(Domain::AdminBranch),
            "delivery-area" | "delivery-areas" => Ok(Domain::DeliveryArea),
            _ => Err(format!("Unsupported domain: {}", s)),
        }
    }
}
