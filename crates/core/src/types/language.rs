//! UI language preference.

use serde::{Deserialize, Serialize};

/// Error returned when a language code is not one of the supported locales.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language: {0} (expected en, ja or th)")]
pub struct ParseLanguageError(pub String);

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
    Th,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ja, Self::Th];

    /// The two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
            Self::Th => "th",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            "th" => Ok(Self::Th),
            _ => Err(ParseLanguageError(s.to_owned())),
        }
    }
}
