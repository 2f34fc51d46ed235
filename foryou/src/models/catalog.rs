//! Catalog item model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{UNKNOWN_GENRE, UNKNOWN_LANGUAGE};

/// A recommendable catalog item
///
/// Fields the pipeline does not read (title, price, artwork, ...) are kept in
/// `extra` so an item is echoed back exactly as the caller supplied it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Item identifier
    pub id: String,

    /// Artist name
    pub artist_name: String,

    /// Genre, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Language, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Every other field of the supplied item
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    /// Create an item with only the required fields
    pub fn new(id: impl Into<String>, artist_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            artist_name: artist_name.into(),
            genre: None,
            language: None,
            extra: Map::new(),
        }
    }

    /// Set the genre
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Attach an arbitrary pass-through field
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Genre, or the placeholder token when missing
    pub fn genre_or_placeholder(&self) -> &str {
        self.genre.as_deref().unwrap_or(UNKNOWN_GENRE)
    }

    /// Language, or the placeholder token when missing
    pub fn language_or_placeholder(&self) -> &str {
        self.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE)
    }
}
