use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://app.datadoghq.com/api/v1/screen";

#[derive(Debug, Deserialize, Clone)]
pub struct ScreenboardConfig {
    pub datadog: DatadogSettings,
}

#[derive(Deserialize, Clone)]
pub struct DatadogSettings {
    pub api_key: String,
    pub application_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl std::fmt::Debug for DatadogSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatadogSettings")
            .field("api_key", &"<redacted>")
            .field("application_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Load `config/screenboard.*` (optional) overlaid by `SCREENBOARD__*`
/// environment variables, e.g. `SCREENBOARD__DATADOG__API_KEY`.
pub fn load_screenboard_config() -> anyhow::Result<ScreenboardConfig> {
    load_screenboard_config_from(
        config::File::with_name("config/screenboard").required(false),
    )
}

pub fn load_screenboard_config_from<S>(source: S) -> anyhow::Result<ScreenboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(source)
        .add_source(config::Environment::with_prefix("SCREENBOARD").separator("__"))
        .build()?;

    let mut config: ScreenboardConfig = settings.try_deserialize()?;
    config.datadog.api_url = config.datadog.api_url.trim_end_matches('/').to_string();
    Ok(config)
}
