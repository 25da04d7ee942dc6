use anyhow::Context;
use sg_config::SgConfig;
use sg_style::StylxStore;

/// Load and validate configuration, reading `.env` first.
pub fn load_config() -> anyhow::Result<SgConfig> {
    let config = SgConfig::load_with_dotenv().context("failed to load configuration")?;
    config.validate()?;
    Ok(config)
}

/// Open the configured style database.
pub async fn open_style_store(config: &SgConfig) -> anyhow::Result<StylxStore> {
    let path = config.style.resolve_path();
    tracing::debug!(
        path = %path.display(),
        version = %config.style.version,
        "opening style database"
    );
    StylxStore::open(&path)
        .await
        .with_context(|| format!("failed to open style database {}", path.display()))
}
