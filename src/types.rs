use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body returned by `GET /auth/whoami`.
///
/// Identity providers return many more fields (`id`, `given_name`,
/// `locale`, ...); only the ones the welcome banner needs are kept.
/// Fields are read loosely: a `null` name still renders, and any truthy
/// `error` (string, object, number) rejects the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmI {
    #[serde(
        default,
        deserialize_with = "truthy_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub picture: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: String,
}

/// `null` → `""`, strings as-is, anything else as its JSON text.
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Falsy values (`null`, `false`, `0`, `""`) mean no error; other values
/// are kept as text.
fn truthy_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl WhoAmI {
    /// Application-level error carried in the body, if any.
    ///
    /// An empty `error` string is treated as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// What a single renderer run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No `tokens` parameter; nothing was requested or rendered.
    NoTokens,
    /// The endpoint answered with an `error`; the page was left alone.
    Rejected { error: String },
    /// The welcome banner replaced the root container's contents.
    Rendered,
}
