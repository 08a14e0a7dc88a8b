use serde::{Deserialize, Deserializer, Serialize};

/// A single book record as stored in the backing file and exchanged over HTTP.
///
/// Every field falls back to its zero value when absent or `null`, so a
/// partial payload decodes into a complete record. Nothing here is validated:
/// `book_id` is meant to be unique but duplicates are accepted and resolved
/// first-match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    pub book_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publication_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
