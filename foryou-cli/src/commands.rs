//! Command definitions and handlers

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use foryou::core::resolve_user;
use foryou::models::RecommendationRequest;
use foryou::profile::{build_user_profile, catalog_texts};
use serde_json::json;
use tracing::{debug, info};

use crate::args::{OutputFormat, ProfileArgs, RecommendArgs};
use crate::context::CliContext;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank a catalog for one user and report accuracy metrics
    Recommend(RecommendArgs),

    /// Show the text profile and catalog texts used for scoring
    Profile(ProfileArgs),

    /// Print the effective configuration (secrets redacted)
    Config,

    /// Display version information
    Version,
}

/// Read a request file, applying an optional user id override
pub fn read_request(path: &Path, user_id: Option<&str>) -> anyhow::Result<RecommendationRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let mut request: RecommendationRequest = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse request file {}", path.display()))?;

    if let Some(id) = user_id {
        request.user_id = Some(id.to_string());
    }
    debug!(
        users = request.user_data.users.len(),
        catalog = request.songs_data.len(),
        "Loaded request"
    );
    Ok(request)
}

pub async fn handle_recommend(
    args: &RecommendArgs,
    config_file: Option<&Path>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let request = read_request(&args.request, args.user_id.as_deref())?;
    let ctx = CliContext::new(config_file, args.offline)?;

    info!(provider = ctx.recommender.provider(), "Running recommendation");
    let response = ctx.recommender.recommend(&request).await?;

    if output_format.is_json() {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        output::print_recommendations(&response);
    }
    Ok(())
}

pub fn handle_profile(args: &ProfileArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let request = read_request(&args.request, args.user_id.as_deref())?;
    let user = resolve_user(&request)?;
    let profile = build_user_profile(user);
    let texts = catalog_texts(&request.songs_data);

    if output_format.is_json() {
        let body = json!({
            "userId": user.user_id,
            "profile": profile,
            "catalogTexts": texts,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        output::print_profile(&user.user_id, &profile, &request.songs_data, &texts);
    }
    Ok(())
}

pub fn handle_config(config_file: Option<&Path>, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = CliContext::load_config(config_file, false)?.redacted();
    let rendered = serde_json::to_string_pretty(&config)?;

    if output_format.is_json() {
        println!("{}", rendered);
    } else {
        println!("{}", output::format_info("Effective configuration:"));
        println!("{}", rendered);
    }
    Ok(())
}

pub fn handle_version(output_format: OutputFormat) {
    if output_format.is_json() {
        println!("{}", json!({ "name": "foryou", "version": foryou::VERSION }));
    } else {
        println!("ForYou CLI v{}", foryou::VERSION);
    }
}
