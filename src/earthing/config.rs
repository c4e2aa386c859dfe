//! Input parameters of the grounding model and their JSON presets.
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::earthing::error::EarthingError;
use crate::earthing::soil::{SoilCategory, WeatherCondition};

pub const DEFAULT_ROD_COUNT: u32 = 4;
pub const DEFAULT_ROD_LENGTH_M: f64 = 2.4;
pub const DEFAULT_ROD_DIAMETER_M: f64 = 0.016;
pub const DEFAULT_ROD_SPACING_M: f64 = 3.0;
pub const DEFAULT_RADIAL_COUNT: u32 = 8;
pub const DEFAULT_RADIAL_LENGTH_M: f64 = 5.0;
pub const DEFAULT_HUMIDITY: f64 = 0.5;
pub const DEFAULT_FAULT_VOLTAGE_V: f64 = 220.0;
pub const DEFAULT_TARGET_OHMS: f64 = 5.0;
pub const DEFAULT_MAST_HEIGHT_M: f64 = 10.0;
/// Largest rod and radial counts a preset may carry.
pub const MAX_ROD_COUNT: u32 = 24;
pub const MAX_RADIAL_COUNT: u32 = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundingConfiguration {
    pub rod_count: u32,
    pub rod_length: f64,
    pub rod_diameter: f64,
    pub rod_spacing: f64,
    pub radial_count: u32,
    pub radial_length: f64,
    pub soil_type: SoilCategory,
    pub weather: WeatherCondition,
    pub humidity: f64,
    pub fault_voltage: f64,
    pub target_resistance: f64,
    /// Only drawn; the resistance model ignores it.
    pub mast_height: f64,
}

impl Default for GroundingConfiguration {
    fn default() -> Self {
        Self {
            rod_count: DEFAULT_ROD_COUNT,
            rod_length: DEFAULT_ROD_LENGTH_M,
            rod_diameter: DEFAULT_ROD_DIAMETER_M,
            rod_spacing: DEFAULT_ROD_SPACING_M,
            radial_count: DEFAULT_RADIAL_COUNT,
            radial_length: DEFAULT_RADIAL_LENGTH_M,
            soil_type: SoilCategory::Clay,
            weather: WeatherCondition::Sunny,
            humidity: DEFAULT_HUMIDITY,
            fault_voltage: DEFAULT_FAULT_VOLTAGE_V,
            target_resistance: DEFAULT_TARGET_OHMS,
            mast_height: DEFAULT_MAST_HEIGHT_M,
        }
    }
}

impl GroundingConfiguration {
    pub fn set_rod_count(&mut self, count: u32) {
        self.rod_count = count;
    }
    pub fn set_rod_length(&mut self, metres: f64) {
        self.rod_length = metres;
    }
    pub fn set_rod_diameter(&mut self, metres: f64) {
        self.rod_diameter = metres;
    }
    pub fn set_rod_spacing(&mut self, metres: f64) {
        self.rod_spacing = metres;
    }
    pub fn set_radial_count(&mut self, count: u32) {
        self.radial_count = count;
    }
    pub fn set_radial_length(&mut self, metres: f64) {
        self.radial_length = metres;
    }
    pub fn set_soil_type(&mut self, soil: SoilCategory) {
        self.soil_type = soil;
    }
    pub fn set_weather(&mut self, weather: WeatherCondition) {
        self.weather = weather;
    }
    /// Humidity is kept in [0, 1]; NaN is treated as bone dry.
    pub fn set_humidity(&mut self, fraction: f64) {
        self.humidity = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    }
    pub fn set_fault_voltage(&mut self, volts: f64) {
        self.fault_voltage = volts;
    }
    pub fn set_target_resistance(&mut self, ohms: f64) {
        self.target_resistance = ohms;
    }
    pub fn set_mast_height(&mut self, metres: f64) {
        self.mast_height = metres;
    }

    /// Rejects values no preset should carry. Zero lengths stay legal: they
    /// describe "no grounding" and evaluate to infinite resistance.
    pub fn validate(&self) -> Result<(), EarthingError> {
        let counts = [
            ("rod_count", self.rod_count, MAX_ROD_COUNT),
            ("radial_count", self.radial_count, MAX_RADIAL_COUNT),
        ];
        for (name, count, max) in counts {
            if count > max {
                return Err(EarthingError::InvalidParameter { name, value: count as f64 });
            }
        }
        let non_negative = [
            ("rod_length", self.rod_length),
            ("rod_diameter", self.rod_diameter),
            ("rod_spacing", self.rod_spacing),
            ("radial_length", self.radial_length),
            ("fault_voltage", self.fault_voltage),
            ("mast_height", self.mast_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EarthingError::InvalidParameter { name, value });
            }
        }
        if !self.target_resistance.is_finite() || self.target_resistance <= 0.0 {
            return Err(EarthingError::InvalidParameter {
                name: "target_resistance",
                value: self.target_resistance,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, EarthingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Missing fields take their defaults; humidity is clamped.
    pub fn from_json(text: &str) -> Result<Self, EarthingError> {
        let mut config: GroundingConfiguration = serde_json::from_str(text)?;
        config.validate()?;
        let humidity = config.humidity;
        config.set_humidity(humidity);
        Ok(config)
    }

    pub fn save_preset(&self, path: impl AsRef<Path>) -> Result<(), EarthingError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("preset saved to {}", path.display());
        Ok(())
    }

    pub fn load_preset(path: impl AsRef<Path>) -> Result<Self, EarthingError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("preset loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_match_reference_installation() {
        let c = GroundingConfiguration::default();
        assert_eq!(c.rod_count, 4);
        assert_eq!(c.rod_length, 2.4);
        assert_eq!(c.rod_diameter, 0.016);
        assert_eq!(c.rod_spacing, 3.0);
        assert_eq!(c.radial_count, 8);
        assert_eq!(c.radial_length, 5.0);
        assert_eq!(c.soil_type, SoilCategory::Clay);
        assert_eq!(c.weather, WeatherCondition::Sunny);
        assert_eq!(c.humidity, 0.5);
        assert_eq!(c.fault_voltage, 220.0);
        assert_eq!(c.target_resistance, 5.0);
    }
    #[test]
    fn humidity_setter_clamps() {
        let mut c = GroundingConfiguration::default();
        c.set_humidity(1.7);
        assert_eq!(c.humidity, 1.0);
        c.set_humidity(-0.2);
        assert_eq!(c.humidity, 0.0);
        c.set_humidity(f64::NAN);
        assert_eq!(c.humidity, 0.0);
    }
    #[test]
    fn preset_json_uses_tags_and_clamps() {
        let json = r#"{"soil_type":"rocky","weather":"storm","humidity":3.0,"rod_count":6}"#;
        let c = GroundingConfiguration::from_json(json).unwrap();
        assert_eq!(c.soil_type, SoilCategory::Rocky);
        assert_eq!(c.weather, WeatherCondition::Storm);
        assert_eq!(c.humidity, 1.0);
        assert_eq!(c.rod_count, 6);
        assert_eq!(c.rod_length, DEFAULT_ROD_LENGTH_M);
        let text = c.to_json().unwrap();
        assert!(text.contains("\"rocky\""));
    }
    #[test]
    fn preset_rejects_negative_lengths() {
        let err = GroundingConfiguration::from_json(r#"{"rod_length":-2.0}"#).unwrap_err();
        assert!(matches!(err, EarthingError::InvalidParameter { name: "rod_length", .. }));
        assert!(GroundingConfiguration::from_json(r#"{"target_resistance":0}"#).is_err());
        assert!(matches!(
            GroundingConfiguration::from_json("not json"),
            Err(EarthingError::Json(_))
        ));
    }
    #[test]
    fn preset_rejects_oversized_counts() {
        let err = GroundingConfiguration::from_json(r#"{"radial_count":20000000}"#).unwrap_err();
        assert!(matches!(err, EarthingError::InvalidParameter { name: "radial_count", .. }));
        let err = GroundingConfiguration::from_json(r#"{"rod_count":400000000}"#).unwrap_err();
        assert!(matches!(err, EarthingError::InvalidParameter { name: "rod_count", .. }));
        let at_limit = format!(r#"{{"rod_count":{MAX_ROD_COUNT},"radial_count":{MAX_RADIAL_COUNT}}}"#);
        assert!(GroundingConfiguration::from_json(&at_limit).is_ok());
    }
    #[test]
    fn preset_file_roundtrip() {
        let path = std::env::temp_dir()
            .join(format!("earthing_lab_preset_{}.json", std::process::id()));
        let mut c = GroundingConfiguration::default();
        c.set_soil_type(SoilCategory::Sandy);
        c.set_rod_count(9);
        c.save_preset(&path).unwrap();
        let loaded = GroundingConfiguration::load_preset(&path).unwrap();
        assert_eq!(loaded, c);
        std::fs::remove_file(&path).ok();
    }
}
