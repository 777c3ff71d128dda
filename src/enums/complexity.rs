use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::enums::ui_language::UiLanguage;

/// Complexity rating reported by the model.
///
/// Models answer in English or Dutch and with varying separators, so every
/// known spelling maps onto one of the five levels. Anything else is kept
/// verbatim in `Other` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Complexity {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Other(String),
}

impl Complexity {
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();

        match normalized.as_str() {
            "very_low" | "zeer_laag" => Complexity::VeryLow,
            "low" | "laag" => Complexity::Low,
            "medium" | "gemiddeld" => Complexity::Medium,
            "high" | "hoog" => Complexity::High,
            "very_high" | "zeer_hoog" => Complexity::VeryHigh,
            _ => Complexity::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Complexity::VeryLow => "very_low",
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
            Complexity::VeryHigh => "very_high",
            Complexity::Other(raw) => raw,
        }
    }

    pub fn label(&self, language: UiLanguage) -> &str {
        let english = language.is_english();
        match self {
            Complexity::VeryLow => if english { "Very low" } else { "Zeer laag" },
            Complexity::Low => if english { "Low" } else { "Laag" },
            Complexity::Medium => if english { "Medium" } else { "Gemiddeld" },
            Complexity::High => if english { "High" } else { "Hoog" },
            Complexity::VeryHigh => if english { "Very high" } else { "Zeer hoog" },
            Complexity::Other(raw) => raw,
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Complexity::Medium
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Complexity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Complexity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Complexity::parse(&raw))
    }
}
