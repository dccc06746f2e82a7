//! Number formatting locales.

use serde::{Deserialize, Serialize};

/// Locale used when rendering amounts for display.
///
/// Only the separators and the placement of the currency symbol differ
/// between locales; rounding is identical everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// `€1,234.56`, `-€40.00`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `€ 1.234,56`, `€ -40,00`
    #[serde(rename = "nl-NL")]
    NlNl,
}

impl Locale {
    /// Returns the BCP 47 tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::NlNl => "nl-NL",
        }
    }

    /// Character placed between the integer and fraction digits.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::NlNl => ',',
        }
    }

    /// Character placed between groups of three integer digits.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::NlNl => '.',
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(Self::EnUs),
            "nl-nl" | "nl" => Ok(Self::NlNl),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}
