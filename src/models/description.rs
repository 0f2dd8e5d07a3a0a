use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const NO_DESCRIPTION: &str = "No description available";

/// A work description as the API hands it out.
///
/// Open Library returns either a bare string, an object of the form
/// `{ "type": "/type/text", "value": "..." }`, or nothing at all.
/// Every other shape is treated as missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Description {
    Text(String),
    Tagged(String),
    #[default]
    Absent,
}

impl Description {
    pub fn normalize(&self) -> String {
        match self {
            Description::Text(text) | Description::Tagged(text) if !text.is_empty() => {
                text.clone()
            }
            _ => NO_DESCRIPTION.to_string(),
        }
    }
}

impl From<Value> for Description {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Description::Text(text),
            Value::Object(mut map) => match map.remove("value") {
                Some(Value::String(text)) => Description::Tagged(text),
                _ => Description::Absent,
            },
            _ => Description::Absent,
        }
    }
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        Ok(Description::from(value))
    }
}

/// Keeps the first `max_lines` lines and marks the cut with `...`.
pub fn truncate_lines(text: &str, max_lines: usize) -> String {
    let lines = text.split('\n').collect::<Vec<_>>();

    if lines.len() > max_lines {
        let mut truncated = lines[..max_lines].join("\n");
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}
