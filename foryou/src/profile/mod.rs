//! Text builders that turn users and catalog items into comparable strings.
//!
//! Profile and item texts share one token pattern,
//! `"{genre} {artist} {language}"`, with fixed placeholder tokens for missing
//! fields.

use tracing::debug;

use crate::models::{CatalogItem, TrackRef, User};

/// Build the composite text profile for a user.
///
/// Tokens appear in this order: favorite genres, languages, the
/// favorite-artist field split on commas, then one
/// `"{genre} {artist} {language}"` triple per liked track followed by one per
/// streamed track. The three sections are always joined by a single space,
/// so the output is deterministic for a given snapshot even when sections
/// are empty.
pub fn build_user_profile(user: &User) -> String {
    let prefs = &user.preferences;

    let preference_tokens: Vec<&str> = prefs
        .favorite_genres
        .iter()
        .map(String::as_str)
        .chain(prefs.languages.iter().map(String::as_str))
        .chain(prefs.favorite_artist.split(','))
        .collect();

    let profile = [
        preference_tokens.join(" "),
        history_text(&user.songs_liked),
        history_text(&user.songs_streamed),
    ]
    .join(" ");

    debug!(user_id = %user.user_id, profile = %profile, "Built user profile");
    profile
}

/// Build the comparable text for one catalog item
pub fn catalog_item_text(item: &CatalogItem) -> String {
    track_text(
        item.genre_or_placeholder(),
        &item.artist_name,
        item.language_or_placeholder(),
    )
}

/// Build texts for a whole catalog, index-aligned with it
pub fn catalog_texts(catalog: &[CatalogItem]) -> Vec<String> {
    catalog.iter().map(catalog_item_text).collect()
}

fn history_text(tracks: &[TrackRef]) -> String {
    tracks
        .iter()
        .map(|track| {
            track_text(
                track.genre_or_placeholder(),
                &track.artist_name,
                track.language_or_placeholder(),
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn track_text(genre: &str, artist: &str, language: &str) -> String {
    format!("{} {} {}", genre, artist, language)
}
