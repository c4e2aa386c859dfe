// src/types.rs
use crate::earthing::{SoilCategory, WeatherCondition};

// One variant per configuration field the GUI can change
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamCommand {
    SetRodCount(u32),
    SetRodLength(f64),
    SetRodDiameter(f64),
    SetRodSpacing(f64),
    SetRadialCount(u32),
    SetRadialLength(f64),
    SetSoil(SoilCategory),
    SetWeather(WeatherCondition),
    SetHumidity(f64),
    SetFaultVoltage(f64),
    SetTargetResistance(f64),
    SetMastHeight(f64),
    ResetDefaults,
}

// Where the GUI writes its files
#[derive(Clone, Debug)]
pub struct ExportPaths {
    pub preset: String,
    pub chart: String,
    pub session_dir: String,
}

impl Default for ExportPaths {
    fn default() -> Self {
        Self {
            preset: "earthing_preset.json".to_owned(),
            chart: "earthing_sweep.png".to_owned(),
            session_dir: ".".to_owned(),
        }
    }
}
