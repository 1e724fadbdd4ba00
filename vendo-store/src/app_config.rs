use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub machine: MachineConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Where the machine snapshot lives on disk.
    pub snapshot_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MachineConfig {
    /// Run one expiry sweep right after restoring the snapshot.
    #[serde(default)]
    pub sweep_on_load: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // E.g. VENDO__STORE__SNAPSHOT_PATH=/tmp/vendo.json
            .add_source(config::Environment::with_prefix("VENDO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
