use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One matched professional as returned by the matching backend.
///
/// Fields are trusted and rendered verbatim. A missing or `null` field
/// decodes to an empty value instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentCandidate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub rating: Option<Amount>,
    #[serde(default)]
    pub hourly_rate: Option<Amount>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Backends send skills either as free text or as a list of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    Text(String),
    List(Vec<String>),
}

impl Default for Skills {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Skills {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skills::Text(text) => f.write_str(text),
            // Same shape the page has always shown for tag lists.
            Skills::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for Skills {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A rating or rate, shown exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Amount::Number(value) => Some(*value),
            Amount::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Shortest round-trip form: 45.0 prints as "45", 4.75 as "4.75".
            Amount::Number(value) => write!(f, "{value}"),
            Amount::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
