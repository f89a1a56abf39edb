use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub collector: CollectorSettings,
    pub data: DataSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct CollectorSettings {
    pub webdriver_url: String,
    pub market_url: String,
    #[serde(
        default = "default_scroll_cycles",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub scroll_cycles: u32,
    #[serde(
        default = "default_settle_millis",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub settle_millis: u64,
    pub queries: Vec<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct DataSettings {
    pub csv_path: String,
}

fn default_scroll_cycles() -> u32 {
    10
}

fn default_settle_millis() -> u64 {
    1200
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
