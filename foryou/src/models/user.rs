//! User snapshot models.

use serde::{Deserialize, Serialize};

use super::{UNKNOWN_GENRE, UNKNOWN_LANGUAGE};

/// A user as supplied in the request roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub user_id: String,

    /// Stated preferences
    #[serde(default)]
    pub preferences: Preferences,

    /// Tracks the user has liked
    #[serde(default)]
    pub songs_liked: Vec<TrackRef>,

    /// Tracks the user has streamed
    #[serde(default)]
    pub songs_streamed: Vec<TrackRef>,
}

impl User {
    /// Create a user with no preferences and no history
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            preferences: Preferences::default(),
            songs_liked: Vec::new(),
            songs_streamed: Vec::new(),
        }
    }

    /// Set the preferences
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Add a liked track
    pub fn liked(mut self, track: TrackRef) -> Self {
        self.songs_liked.push(track);
        self
    }

    /// Add a streamed track
    pub fn streamed(mut self, track: TrackRef) -> Self {
        self.songs_streamed.push(track);
        self
    }
}

/// Stated user preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Favorite genres, in the order the user listed them
    pub favorite_genres: Vec<String>,

    /// Preferred languages
    pub languages: Vec<String>,

    /// Free-text favorite artists, comma separated
    pub favorite_artist: String,
}

/// A liked or streamed track entry in a user's history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackRef {
    /// Catalog item identifier
    pub id: String,

    /// Artist name
    pub artist_name: String,

    /// Genre, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Language, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TrackRef {
    /// Create a track reference with only the required fields
    pub fn new(id: impl Into<String>, artist_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            artist_name: artist_name.into(),
            genre: None,
            language: None,
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

    /// Genre, or the placeholder token when missing
    pub fn genre_or_placeholder(&self) -> &str {
        self.genre.as_deref().unwrap_or(UNKNOWN_GENRE)
    }

    /// Language, or the placeholder token when missing
    pub fn language_or_placeholder(&self) -> &str {
        self.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE)
    }
}
