use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Natural language used for every user-facing string.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, ValueEnum)]
pub enum UiLanguage {
    #[serde(rename = "nl")]
    Nl,
    #[serde(rename = "en")]
    En,
}

impl Default for UiLanguage {
    fn default() -> Self {
        UiLanguage::Nl
    }
}

impl UiLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            UiLanguage::Nl => "nl",
            UiLanguage::En => "en",
        }
    }

    pub fn is_english(&self) -> bool {
        matches!(self, UiLanguage::En)
    }

    /// English name of the language, as used inside the review prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            UiLanguage::Nl => "Dutch",
            UiLanguage::En => "English",
        }
    }

    /// Lenient parse used for query strings and form fields; anything unknown is Dutch.
    pub fn from_param(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for UiLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nl" => Ok(UiLanguage::Nl),
            "en" => Ok(UiLanguage::En),
            other => Err(format!("unsupported ui language: {}", other)),
        }
    }
}

impl fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_missing_param_falls_back_to_dutch() {
        assert_eq!(UiLanguage::from_param(None), UiLanguage::Nl);
        assert_eq!(UiLanguage::from_param(Some("fr")), UiLanguage::Nl);
        assert_eq!(UiLanguage::from_param(Some(" EN ")), UiLanguage::En);
    }

    #[test]
    fn serializes_as_language_code() {
        assert_eq!(serde_json::to_string(&UiLanguage::En).unwrap(), "\"en\"");
        let parsed: UiLanguage = serde_json::from_str("\"nl\"").unwrap();
        assert_eq!(parsed, UiLanguage::Nl);
    }
}
