//! Supported languages
//!
//! The set is closed: adding a language means adding a variant here and
//! letting the compiler point at every dispatch site that needs a new arm.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Language tag attached to a whole word batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// English
    English,
    /// Russian
    Russian,
}

impl Language {
    /// Every supported language, in display order
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
        }
    }

    /// Parse a language code or name (`en`, `english`, `ru`, `russian`)
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            _ => Err(CoreError::unsupported(code)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
