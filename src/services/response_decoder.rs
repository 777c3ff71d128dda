//! Recovery of the JSON object from free-form model output.
//!
//! Decoding runs in stages that can each be exercised on their own:
//! [`strip_code_fences`], then a direct parse, then a parse of the greedy
//! first-`{`-to-last-`}` span returned by [`extract_json_span`].

use serde::de::DeserializeOwned;
use thiserror::Error;
use crate::structs::analysis_result::ModelAnalysis;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("response contains no JSON object")]
    NoJsonObject,

    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Removes Markdown code fences.
///
/// A "```json" opener is dropped together with the whitespace after it; any
/// other "```" is dropped together with the whitespace before it. The result
/// is trimmed.
pub fn strip_code_fences(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(position) = rest.find(FENCE) {
        let before = &rest[..position];
        let after = &rest[position + FENCE.len()..];

        match after.strip_prefix(JSON_TAG) {
            Some(tail) => {
                cleaned.push_str(before);
                rest = tail.trim_start();
            }
            None => {
                cleaned.push_str(before.trim_end());
                rest = after;
            }
        }
    }

    cleaned.push_str(rest);
    cleaned.trim().to_string()
}

/// Greedy span from the first `{` to the last `}`.
///
/// This is deliberately not a balanced-bracket scanner: prose after the
/// object that contains a closing brace ends up inside the span.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Strips fences, tries a direct parse and falls back to the bracketed span.
pub fn decode_with_recovery<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let cleaned = strip_code_fences(raw);

    let direct_error = match serde_json::from_str::<T>(&cleaned) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    match extract_json_span(&cleaned) {
        Some(span) if span.len() < cleaned.len() => Ok(serde_json::from_str(span)?),
        Some(_) => Err(DecodeError::InvalidJson(direct_error)),
        None => Err(DecodeError::NoJsonObject),
    }
}

pub fn decode_analysis(raw: &str) -> Result<ModelAnalysis, DecodeError> {
    decode_with_recovery(raw)
}
