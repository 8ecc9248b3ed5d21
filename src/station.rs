//! Weather-station snapshot model.
//!
//! The station export is a JSON file owned by an external fetch job. The
//! first device carries the main indoor readings plus a list of named
//! satellite modules (outdoor, extra indoor, rain gauge), each with its own
//! `dashboard_data` block and battery level in raw millivolts.
//!
//! Fields differ per module type, so everything is optional at the serde
//! layer; the typed accessors turn an absent field into a
//! [`StationError::MissingField`] that aborts the render.

use std::path::Path;

use serde::Deserialize;

use crate::color::Color;

#[derive(Debug, thiserror::Error)]
pub enum StationError {
    #[error("failed to read station snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed station snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("station snapshot has no devices")]
    NoDevices,
    #[error("module '{0}' not found in station snapshot")]
    MissingModule(String),
    #[error("module '{module}' is missing field '{field}'")]
    MissingField {
        module: String,
        field: &'static str,
    },
}

/// Direction of a short-term trend as reported by the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Other,
}

impl Trend {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("up") => Trend::Up,
            Some("down") => Trend::Down,
            _ => Trend::Other,
        }
    }
}

/// Battery state classified from raw millivolts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    Low,
    Medium,
    Good,
}

impl BatteryLevel {
    pub fn from_millivolts(mv: i64) -> Self {
        if mv <= 4000 {
            BatteryLevel::Low
        } else if mv <= 4500 {
            BatteryLevel::Medium
        } else {
            BatteryLevel::Good
        }
    }

    pub fn color(self) -> Color {
        match self {
            BatteryLevel::Low => Color::new(255, 0, 0),
            BatteryLevel::Medium => Color::new(255, 165, 0),
            BatteryLevel::Good => Color::new(0, 128, 0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DashboardData {
    #[serde(rename = "Temperature")]
    temperature: Option<f64>,
    #[serde(rename = "Humidity")]
    humidity: Option<f64>,
    #[serde(rename = "Pressure")]
    pressure: Option<f64>,
    #[serde(rename = "CO2")]
    co2: Option<f64>,
    sum_rain_1: Option<f64>,
    sum_rain_24: Option<f64>,
    max_temp: Option<f64>,
    min_temp: Option<f64>,
    temp_trend: Option<String>,
    pressure_trend: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawModule {
    module_name: String,
    dashboard_data: DashboardData,
    battery_vp: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawDevice {
    dashboard_data: DashboardData,
    #[serde(default)]
    modules: Vec<RawModule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationSnapshot {
    devices: Vec<RawDevice>,
}

impl StationSnapshot {
    pub fn from_file(path: &Path) -> Result<Self, StationError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, StationError> {
        let snapshot: StationSnapshot = serde_json::from_str(text)?;
        if snapshot.devices.is_empty() {
            return Err(StationError::NoDevices);
        }
        Ok(snapshot)
    }

    /// Readings of the base station itself (main indoor module).
    pub fn main_module(&self) -> ModuleReadings<'_> {
        ModuleReadings {
            name: "Main",
            data: &self.devices[0].dashboard_data,
            battery_vp: None,
        }
    }

    /// Readings of a satellite module, selected by its configured name.
    pub fn module(&self, name: &str) -> Result<ModuleReadings<'_>, StationError> {
        self.devices[0]
            .modules
            .iter()
            .find(|m| m.module_name == name)
            .map(|m| ModuleReadings {
                name: &m.module_name,
                data: &m.dashboard_data,
                battery_vp: m.battery_vp,
            })
            .ok_or_else(|| StationError::MissingModule(name.to_string()))
    }
}

/// Typed view over one module's dashboard data.
#[derive(Debug, Clone, Copy)]
pub struct ModuleReadings<'a> {
    name: &'a str,
    data: &'a DashboardData,
    battery_vp: Option<i64>,
}

impl ModuleReadings<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    fn require(&self, field: &'static str, value: Option<f64>) -> Result<f64, StationError> {
        value.ok_or(StationError::MissingField {
            module: self.name.to_string(),
            field,
        })
    }

    pub fn temperature(&self) -> Result<f64, StationError> {
        self.require("Temperature", self.data.temperature)
    }

    pub fn humidity(&self) -> Result<f64, StationError> {
        self.require("Humidity", self.data.humidity)
    }

    pub fn pressure(&self) -> Result<f64, StationError> {
        self.require("Pressure", self.data.pressure)
    }

    pub fn co2(&self) -> Result<f64, StationError> {
        self.require("CO2", self.data.co2)
    }

    pub fn sum_rain_1(&self) -> Result<f64, StationError> {
        self.require("sum_rain_1", self.data.sum_rain_1)
    }

    pub fn sum_rain_24(&self) -> Result<f64, StationError> {
        self.require("sum_rain_24", self.data.sum_rain_24)
    }

    pub fn max_temp(&self) -> Result<f64, StationError> {
        self.require("max_temp", self.data.max_temp)
    }

    pub fn min_temp(&self) -> Result<f64, StationError> {
        self.require("min_temp", self.data.min_temp)
    }

    pub fn temp_trend(&self) -> Trend {
        Trend::parse(self.data.temp_trend.as_deref())
    }

    pub fn pressure_trend(&self) -> Trend {
        Trend::parse(self.data.pressure_trend.as_deref())
    }

    pub fn battery(&self) -> Result<BatteryLevel, StationError> {
        self.battery_vp
            .map(BatteryLevel::from_millivolts)
            .ok_or(StationError::MissingField {
                module: self.name.to_string(),
                field: "battery_vp",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "devices": [{
            "dashboard_data": {
                "Temperature": 21.4, "Humidity": 45, "Pressure": 1014.3,
                "CO2": 600, "pressure_trend": "up"
            },
            "modules": [
                {
                    "module_name": "Outdoor Module",
                    "battery_vp": 5200,
                    "dashboard_data": {
                        "Temperature": 12.7, "Humidity": 81,
                        "max_temp": 14.1, "min_temp": 8.9,
                        "temp_trend": "down"
                    }
                },
                {
                    "module_name": "Rain",
                    "battery_vp": 4400,
                    "dashboard_data": { "sum_rain_1": 0.3, "sum_rain_24": 2.1 }
                }
            ]
        }]
    }"#;

    #[test]
    fn parses_modules_by_name() {
        let snapshot = StationSnapshot::from_json(FIXTURE).unwrap();
        let outdoor = snapshot.module("Outdoor Module").unwrap();
        assert_eq!(outdoor.temperature().unwrap(), 12.7);
        assert_eq!(outdoor.temp_trend(), Trend::Down);
        assert_eq!(outdoor.battery().unwrap(), BatteryLevel::Good);

        let rain = snapshot.module("Rain").unwrap();
        assert_eq!(rain.sum_rain_24().unwrap(), 2.1);
        assert_eq!(rain.battery().unwrap(), BatteryLevel::Medium);

        let main = snapshot.main_module();
        assert_eq!(main.pressure().unwrap(), 1014.3);
        assert_eq!(main.pressure_trend(), Trend::Up);
        assert_eq!(main.temp_trend(), Trend::Other);
    }

    #[test]
    fn missing_module_and_field_surface_as_errors() {
        let snapshot = StationSnapshot::from_json(FIXTURE).unwrap();
        assert!(matches!(
            snapshot.module("Indoor 1"),
            Err(StationError::MissingModule(_))
        ));
        let rain = snapshot.module("Rain").unwrap();
        assert!(matches!(
            rain.temperature(),
            Err(StationError::MissingField { field: "Temperature", .. })
        ));
    }

    #[test]
    fn empty_device_list_is_rejected() {
        assert!(matches!(
            StationSnapshot::from_json(r#"{"devices": []}"#),
            Err(StationError::NoDevices)
        ));
    }

    #[test]
    fn battery_thresholds() {
        assert_eq!(BatteryLevel::from_millivolts(3900), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_millivolts(4000), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_millivolts(4500), BatteryLevel::Medium);
        assert_eq!(BatteryLevel::from_millivolts(4501), BatteryLevel::Good);
    }
}
