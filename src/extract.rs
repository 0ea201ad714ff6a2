//! Best-effort recovery of the JSON object embedded in a model reply.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("model response did not contain JSON: {0}")]
    NoJson(String),
    #[error("model response contained malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("bullets field is not a list: {0}")]
    BadBullets(Value),
}

/// Locates the substring from the first `{` to the last `}` (inclusive) and
/// parses it as JSON.
///
/// Heuristic, not a parser: stray braces after the real object make the
/// substring unparsable, and no balanced-brace fallback is attempted. Both
/// failure modes are terminal for the lens.
pub fn extract_json_block(text: &str) -> Result<Value, ExtractError> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(serde_json::from_str(&text[start..=end])?),
        _ => Err(ExtractError::NoJson(text.to_string())),
    }
}

/// Fields recovered from one lens reply.
#[derive(Debug, Clone, PartialEq)]
pub struct LensFields {
    pub summary: String,
    pub key_points: Vec<String>,
}

impl LensFields {
    /// Total decode of the loosely-typed payload.
    ///
    /// `summary` is stringified and trimmed; absent or null becomes the empty
    /// string, passed through as-is. `bullets` elements are stringified,
    /// trimmed, dropped when empty and capped at three. A bare string is
    /// wrapped as a one-element list; any other non-list value is rejected.
    pub fn from_value(payload: &Value) -> Result<Self, ExtractError> {
        let summary = match payload.get("summary") {
            None | Some(Value::Null) => String::new(),
            Some(value) => stringify(value).trim().to_string(),
        };

        let bullets = match payload.get("bullets") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(stringify).collect(),
            Some(Value::String(s)) => vec![s.clone()],
            Some(other) => return Err(ExtractError::BadBullets(other.clone())),
        };

        let key_points = bullets
            .iter()
            .map(|bullet| bullet.trim())
            .filter(|bullet| !bullet.is_empty())
            .take(3)
            .map(str::to_string)
            .collect();

        Ok(Self {
            summary,
            key_points,
        })
    }
}

/// Strings verbatim, everything else rendered as JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
