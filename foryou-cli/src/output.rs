use colored::*;
use foryou::ForYouError;
use foryou::evaluation::AccuracyMetrics;
use foryou::models::{CatalogItem, RecommendationResponse};
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn artist() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }
}

/// Print an error to stderr, as JSON or as a colored line
pub fn output_error(error: &anyhow::Error, json_output: bool) {
    if json_output {
        let code = error
            .downcast_ref::<ForYouError>()
            .map(ForYouError::code)
            .unwrap_or("CLI_ERROR");
        let body = json!({
            "error": true,
            "code": code,
            "message": format!("{:#}", error),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&format!("{:#}", error)));
    }
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

pub fn print_recommendations(response: &RecommendationResponse) {
    let songs = &response.recommended_songs;
    if songs.is_empty() {
        println!("{}", format_info("No recommendations."));
    } else {
        println!(
            "{}",
            format_success(&format!("{} recommendations:", songs.len()))
        );
        println!();
        println!(
            "{:<5} {:<16} {:<24} {:<18} {}",
            "Rank".color(CliColors::muted()).bold(),
            "ID".color(CliColors::muted()).bold(),
            "Artist".color(CliColors::muted()).bold(),
            "Genre".color(CliColors::muted()).bold(),
            "Language".color(CliColors::muted()).bold()
        );
        println!("{}", "─".repeat(80).color(CliColors::muted()));

        for (rank, song) in songs.iter().enumerate() {
            print_song_row(rank + 1, song);
        }
    }

    println!();
    print_metrics(&response.accuracy_metrics);
}

fn print_song_row(rank: usize, song: &CatalogItem) {
    println!(
        "{:<5} {:<16} {:<24} {:<18} {}",
        rank,
        truncate(&song.id, 16),
        truncate(&song.artist_name, 24).color(CliColors::artist()),
        truncate(song.genre_or_placeholder(), 18),
        song.language_or_placeholder()
    );
}

pub fn print_metrics(metrics: &AccuracyMetrics) {
    println!("{}", "━━━ Accuracy ━━━".color(CliColors::info()).bold());

    if !metrics.is_evaluated() {
        let message = metrics.message.as_deref().unwrap_or("Metrics unavailable");
        println!("{}", format_warning(message));
        return;
    }

    let rows = [
        ("Precision", metrics.precision),
        ("Recall", metrics.recall),
        ("F1", metrics.f1),
        ("Accuracy", metrics.accuracy),
    ];
    for (label, value) in rows {
        let value = value.map_or_else(|| "n/a".to_string(), |v| format!("{:.3}", v));
        println!("{:<10} {}", label.color(CliColors::muted()), value);
    }
}

pub fn print_profile(user_id: &str, profile: &str, catalog: &[CatalogItem], texts: &[String]) {
    println!(
        "{}: {}",
        "User".color(CliColors::muted()),
        user_id.color(CliColors::info()).bold()
    );
    println!("{}: {:?}", "Profile".color(CliColors::muted()), profile);
    println!();

    if catalog.is_empty() {
        println!("{}", format_info("Catalog is empty."));
        return;
    }

    println!("{:<16} {}", "ID".color(CliColors::muted()).bold(), "Text".color(CliColors::muted()).bold());
    println!("{}", "─".repeat(80).color(CliColors::muted()));
    for (item, text) in catalog.iter().zip(texts) {
        println!("{:<16} {}", truncate(&item.id, 16), text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer artist name", 10), "a much ...");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Rosalía", 7), "Rosalía");
    }
}
