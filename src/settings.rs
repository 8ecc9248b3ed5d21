//! Run configuration, loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Panel coordinates for the sunrise/sunset lookup.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where input data comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct Inputs {
    pub station: PathBuf,
    pub forecast_db: PathBuf,
}

/// Output and presentation knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    pub font: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_indoor_icon")]
    pub indoor_module_icon: String,
    #[serde(default = "default_main_icon")]
    pub main_module_icon: String,
}

/// Station module names as configured in the weather station app.
#[derive(Debug, Clone, Deserialize)]
pub struct Modules {
    #[serde(default = "default_outdoor_module")]
    pub outdoor: String,
    #[serde(default = "default_indoor_module")]
    pub indoor: String,
    #[serde(default = "default_rain_module")]
    pub rain: String,
}

fn default_output() -> PathBuf {
    PathBuf::from("display.png")
}

fn default_indoor_icon() -> String {
    "I1".to_string()
}

fn default_main_icon() -> String {
    "L".to_string()
}

fn default_outdoor_module() -> String {
    "Outdoor Module".to_string()
}

fn default_indoor_module() -> String {
    "Indoor 1".to_string()
}

fn default_rain_module() -> String {
    "Rain".to_string()
}

impl Default for Modules {
    fn default() -> Self {
        Self {
            outdoor: default_outdoor_module(),
            indoor: default_indoor_module(),
            rain: default_rain_module(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub location: Location,
    pub inputs: Inputs,
    pub display: Display,
    #[serde(default)]
    pub modules: Modules,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            location: Location {
                latitude: 50.85,
                longitude: 4.35,
            },
            inputs: Inputs {
                station: PathBuf::from("station.json"),
                forecast_db: PathBuf::from("forecast.sqlite"),
            },
            display: Display {
                font: PathBuf::from("font.ttf"),
                output: default_output(),
                indoor_module_icon: default_indoor_icon(),
                main_module_icon: default_main_icon(),
            },
            modules: Modules::default(),
        }
    }
}
