use std::path::Path;

use foryou::config::{ConfigBuilder, ConfigLoader, ForYouConfig};
use foryou::core::Recommender;

/// Shared state for commands that run the pipeline
pub struct CliContext {
    pub recommender: Recommender,
}

impl CliContext {
    pub fn new(config_file: Option<&Path>, offline: bool) -> foryou::Result<Self> {
        let config = Self::load_config(config_file, offline)?;
        let recommender = Recommender::from_config(&config)?;
        Ok(Self { recommender })
    }

    /// Defaults, then the given file (or the default locations), then
    /// `FORYOU_*` environment variables. `offline` switches to the hashing
    /// embedder regardless of the configured provider.
    pub fn load_config(config_file: Option<&Path>, offline: bool) -> foryou::Result<ForYouConfig> {
        let mut loader = ConfigLoader::new();
        match config_file {
            Some(path) => {
                loader.load_file(path)?;
            }
            None => {
                loader.load_default_files();
            }
        }
        let config = loader.load_env().extract()?;

        if offline {
            let dimensions = config.embedding.dimensions;
            return Ok(ConfigBuilder::from_config(config)
                .with_offline_embeddings(dimensions)
                .build()?);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_offline_context_uses_hashing_embedder() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("cohere.toml");
        std::fs::write(&config_path, "[embedding]\nprovider = \"cohere\"\n").unwrap();

        let ctx = CliContext::new(Some(&config_path), true).unwrap();
        assert_eq!(ctx.recommender.provider(), "hashing");
    }
}
