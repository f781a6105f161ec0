//! Report presentation settings.

use serde::{Deserialize, Serialize};

/// Settings printed on rendered report documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Symbol printed before monetary amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Institution named in the header and signature.
    #[serde(default = "default_institution")]
    pub institution: String,
    /// Version printed in the footer.
    #[serde(default = "default_system_version")]
    pub system_version: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            institution: default_institution(),
            system_version: default_system_version(),
        }
    }
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_institution() -> String {
    "Suitability Desk".to_string()
}

fn default_system_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
