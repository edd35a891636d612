use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub banner_width: usize,
}

impl Default for UiConfig {
    fn default() -> UiConfig {
        UiConfig { banner_width: 50 }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TelemetryConfig {
    pub print_on_exit: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub telemetry: TelemetryConfig,
}

/// Reads `Calculator.toml` from the working directory, overridden by `APP_` variables
pub fn figment() -> Figment {
    Figment::new()
        .merge(Toml::file("Calculator.toml"))
        .merge(Env::prefixed("APP_").map(|s| s.as_str().replacen('_', ".", 1).into()))
}
