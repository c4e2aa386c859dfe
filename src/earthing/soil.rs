//! Soil resistivity table and the weather/humidity adjustment.
//!
//! Base resistivity values are typical textbook figures in Ω·m. The weather
//! factor scales them (rain and storms wet the ground, frozen ground under
//! snow conducts worse) and humidity lowers them by up to 30%.
use serde::{Deserialize, Serialize};

/// Resistivity used when a soil tag is not recognised (Ω·m).
pub const FALLBACK_RESISTIVITY: f64 = 100.0;
/// Largest fraction by which soil humidity lowers resistivity.
pub const HUMIDITY_SENSITIVITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SoilCategory {
    Wet,
    #[default]
    Clay,
    Loam,
    Sandy,
    Gravel,
    Rocky,
    Dry,
}

impl SoilCategory {
    pub const ALL: [SoilCategory; 7] = [
        SoilCategory::Wet,
        SoilCategory::Clay,
        SoilCategory::Loam,
        SoilCategory::Sandy,
        SoilCategory::Gravel,
        SoilCategory::Rocky,
        SoilCategory::Dry,
    ];

    /// Base resistivity in Ω·m.
    pub fn resistivity(self) -> f64 {
        match self {
            SoilCategory::Wet => 10.0,
            SoilCategory::Clay => 40.0,
            SoilCategory::Loam => FALLBACK_RESISTIVITY,
            SoilCategory::Sandy => 200.0,
            SoilCategory::Gravel => 400.0,
            SoilCategory::Rocky => 1000.0,
            SoilCategory::Dry => 1500.0,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            SoilCategory::Wet => "wet",
            SoilCategory::Clay => "clay",
            SoilCategory::Loam => "loam",
            SoilCategory::Sandy => "sandy",
            SoilCategory::Gravel => "gravel",
            SoilCategory::Rocky => "rocky",
            SoilCategory::Dry => "dry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoilCategory::Wet => "Wet / marsh",
            SoilCategory::Clay => "Clay",
            SoilCategory::Loam => "Loam",
            SoilCategory::Sandy => "Sandy",
            SoilCategory::Gravel => "Gravel",
            SoilCategory::Rocky => "Rocky",
            SoilCategory::Dry => "Dry sand",
        }
    }

    /// Parse a textual tag. Unrecognised tags map to loam, whose resistivity
    /// is the fallback value.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "wet" => SoilCategory::Wet,
            "clay" => SoilCategory::Clay,
            "loam" => SoilCategory::Loam,
            "sandy" => SoilCategory::Sandy,
            "gravel" => SoilCategory::Gravel,
            "rocky" => SoilCategory::Rocky,
            "dry" => SoilCategory::Dry,
            other => {
                log::warn!("unknown soil type `{other}`, assuming {FALLBACK_RESISTIVITY} Ω·m");
                SoilCategory::Loam
            }
        }
    }
}

impl From<String> for SoilCategory {
    fn from(value: String) -> Self {
        SoilCategory::from_tag(&value)
    }
}

impl From<SoilCategory> for String {
    fn from(value: SoilCategory) -> Self {
        value.tag().to_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Rain,
    Storm,
    Snow,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::Rain,
        WeatherCondition::Storm,
        WeatherCondition::Snow,
    ];

    /// Multiplier applied to the base soil resistivity.
    pub fn factor(self) -> f64 {
        match self {
            WeatherCondition::Sunny => 1.0,
            WeatherCondition::Rain => 0.5,
            WeatherCondition::Storm => 0.3,
            WeatherCondition::Snow => 1.2,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Storm => "storm",
            WeatherCondition::Snow => "snow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Storm => "Storm",
            WeatherCondition::Snow => "Snow",
        }
    }

    /// Parse a textual tag. Unrecognised tags behave like sunny weather
    /// (factor 1.0).
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "sunny" => WeatherCondition::Sunny,
            "rain" => WeatherCondition::Rain,
            "storm" => WeatherCondition::Storm,
            "snow" => WeatherCondition::Snow,
            other => {
                log::warn!("unknown weather `{other}`, using a neutral factor");
                WeatherCondition::Sunny
            }
        }
    }
}

impl From<String> for WeatherCondition {
    fn from(value: String) -> Self {
        WeatherCondition::from_tag(&value)
    }
}

impl From<WeatherCondition> for String {
    fn from(value: WeatherCondition) -> Self {
        value.tag().to_owned()
    }
}

pub fn base_resistivity(soil: SoilCategory) -> f64 {
    soil.resistivity()
}

/// Effective resistivity after weather and humidity.
///
/// `humidity` is expected in [0, 1]; it is not clamped here.
pub fn adjusted_resistivity(base: f64, weather: WeatherCondition, humidity: f64) -> f64 {
    base * weather.factor() * (1.0 - humidity * HUMIDITY_SENSITIVITY)
}
