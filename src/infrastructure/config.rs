use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

/// Parameters for every synthetic dataset the generator produces. The
/// optional seed switches the whole service to deterministic output.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    pub production: SeriesConfig,
    pub energy: SeriesConfig,
    pub trend: TrendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesConfig {
    pub count: i64,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrendConfig {
    pub days: i64,
    pub base: i64,
    pub target: i64,
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_generator_config() -> anyhow::Result<GeneratorConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/generator"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
