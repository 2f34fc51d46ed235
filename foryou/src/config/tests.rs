use crate::config::{
    ConfigBuilder, ConfigError, ConfigLoader, EmbeddingProvider, ForYouConfig, LogFormat,
    LogLevel, RankingConfig, validation,
};
use figment::providers::Serialized;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = ForYouConfig::default();
    assert_eq!(config.embedding.provider, EmbeddingProvider::Cohere);
    assert_eq!(config.embedding.model_name, "large");
    assert_eq!(config.embedding.service_url, "https://api.cohere.ai/v1");
    assert_eq!(config.ranking, RankingConfig::default());
    assert_eq!(config.ranking.top_k, 14);
    assert_eq!(config.ranking.target_size, 14);
    assert_eq!(config.ranking.max_per_artist, 2);
    assert_eq!(config.ranking.max_per_genre, 2);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn test_builder_sets_ranking_parameters() {
    let config = ConfigBuilder::new()
        .with_top_k(20)
        .with_target_size(10)
        .with_max_per_artist(3)
        .with_max_per_genre(4)
        .build()
        .unwrap();

    assert_eq!(config.ranking.top_k, 20);
    assert_eq!(config.ranking.target_size, 10);
    assert_eq!(config.ranking.max_per_artist, 3);
    assert_eq!(config.ranking.max_per_genre, 4);
}

#[test]
fn test_builder_presets() {
    let config = ConfigBuilder::testing().build().unwrap();
    assert_eq!(config.embedding.provider, EmbeddingProvider::Hashing);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, LogFormat::Compact);

    let config = ConfigBuilder::production().build().unwrap();
    assert_eq!(config.embedding.provider, EmbeddingProvider::Cohere);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_validation_rejects_zero_caps() {
    let result = ConfigBuilder::new().with_max_per_artist(0).build();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));

    let result = ConfigBuilder::new().with_top_k(0).build();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_validation_rejects_bad_service_url() {
    let result = ConfigBuilder::new().with_service_url("ftp://example").build();
    assert!(result.is_err());

    let result = ConfigBuilder::new().with_embedding_model("  ").build();
    assert!(result.is_err());
}

#[test]
fn test_validation_rejects_zero_hashing_dimensions() {
    let result = ConfigBuilder::new().with_offline_embeddings(0).build();
    assert!(result.is_err());
}

#[test]
fn test_default_config_is_valid() {
    assert!(validation::validate_config(&ForYouConfig::default()).is_ok());
}

#[test]
fn test_redacted_masks_api_key() {
    let config = ConfigBuilder::new().with_cohere("secret").build().unwrap();
    let redacted = config.redacted();
    assert_eq!(redacted.embedding.api_key.as_deref(), Some("***"));
    assert_eq!(config.embedding.api_key.as_deref(), Some("secret"));
}

#[test]
fn test_loader_reads_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foryou.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "[ranking]\nmax_per_artist = 3\n\n[embedding]\nprovider = \"hashing\"\ndimensions = 64"
    )
    .unwrap();

    let mut loader = ConfigLoader::new();
    loader.load_file(&path).unwrap();
    let config = loader.extract().unwrap();

    assert_eq!(config.ranking.max_per_artist, 3);
    assert_eq!(config.ranking.max_per_genre, 2);
    assert_eq!(config.embedding.provider, EmbeddingProvider::Hashing);
    assert_eq!(config.embedding.dimensions, 64);
}

#[test]
fn test_loader_reads_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"ranking": {"top_k": 5}}"#).unwrap();

    let mut loader = ConfigLoader::new();
    loader.load_file(&path).unwrap();
    assert_eq!(loader.extract().unwrap().ranking.top_k, 5);
}

#[test]
fn test_loader_rejects_missing_and_unknown_files() {
    let dir = TempDir::new().unwrap();

    let mut loader = ConfigLoader::new();
    assert!(matches!(
        loader.load_file(dir.path().join("missing.toml")),
        Err(ConfigError::FileLoadError(_))
    ));

    let path = dir.path().join("config.ini");
    std::fs::write(&path, "top_k=5").unwrap();
    assert!(matches!(
        loader.load_file(&path),
        Err(ConfigError::FileLoadError(_))
    ));
}

#[test]
fn test_loader_validates_merged_values() {
    let mut loader = ConfigLoader::new();
    loader.merge(Serialized::default("ranking.max_per_genre", 0));
    assert!(matches!(
        loader.extract(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_loader_reads_environment() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("FORYOU_RANKING__TOP_K", "7");
        jail.set_env("FORYOU_EMBEDDING__PROVIDER", "hashing");

        let mut loader = ConfigLoader::new();
        loader.load_env();
        let config = loader.extract().expect("valid config");

        assert_eq!(config.ranking.top_k, 7);
        assert_eq!(config.embedding.provider, EmbeddingProvider::Hashing);
        Ok(())
    });
}
