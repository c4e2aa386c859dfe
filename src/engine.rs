// src/engine.rs
use crate::earthing::{calculate, GroundingConfiguration, GroundingMetrics};
use crate::types::ParamCommand;

/// Owns the live configuration. Callers mutate it through [`apply`] and
/// read a fresh snapshot from [`calculate`]; nothing is cached.
///
/// [`apply`]: GroundingSystem::apply
/// [`calculate`]: GroundingSystem::calculate
#[derive(Debug, Default)]
pub struct GroundingSystem {
    config: GroundingConfiguration,
}

impl GroundingSystem {
    pub fn new(config: GroundingConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroundingConfiguration {
        &self.config
    }

    pub fn replace_config(&mut self, config: GroundingConfiguration) {
        self.config = config;
    }

    pub fn apply(&mut self, cmd: ParamCommand) {
        let c = &mut self.config;
        match cmd {
            ParamCommand::SetRodCount(v) => c.set_rod_count(v),
            ParamCommand::SetRodLength(v) => c.set_rod_length(v),
            ParamCommand::SetRodDiameter(v) => c.set_rod_diameter(v),
            ParamCommand::SetRodSpacing(v) => c.set_rod_spacing(v),
            ParamCommand::SetRadialCount(v) => c.set_radial_count(v),
            ParamCommand::SetRadialLength(v) => c.set_radial_length(v),
            ParamCommand::SetSoil(v) => c.set_soil_type(v),
            ParamCommand::SetWeather(v) => c.set_weather(v),
            ParamCommand::SetHumidity(v) => c.set_humidity(v),
            ParamCommand::SetFaultVoltage(v) => c.set_fault_voltage(v),
            ParamCommand::SetTargetResistance(v) => c.set_target_resistance(v),
            ParamCommand::SetMastHeight(v) => c.set_mast_height(v),
            ParamCommand::ResetDefaults => *c = GroundingConfiguration::default(),
        }
    }

    pub fn calculate(&self) -> GroundingMetrics {
        let metrics = calculate(&self.config);
        log::debug!(
            "R_total={:.3} Ω ({}), efficiency={:.1}%, I_fault={:.2} A",
            metrics.total_resistance,
            metrics.status.message(),
            metrics.efficiency,
            metrics.fault_current
        );
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earthing::{GroundingStatus, SoilCategory, WeatherCondition};
    #[test]
    fn commands_reach_configuration() {
        let mut system = GroundingSystem::default();
        system.apply(ParamCommand::SetRodCount(7));
        system.apply(ParamCommand::SetSoil(SoilCategory::Wet));
        system.apply(ParamCommand::SetWeather(WeatherCondition::Snow));
        system.apply(ParamCommand::SetHumidity(2.0));
        system.apply(ParamCommand::SetMastHeight(18.0));
        let c = system.config();
        assert_eq!(c.rod_count, 7);
        assert_eq!(c.soil_type, SoilCategory::Wet);
        assert_eq!(c.weather, WeatherCondition::Snow);
        assert_eq!(c.humidity, 1.0);
        assert_eq!(c.mast_height, 18.0);
    }
    #[test]
    fn every_mutation_is_reflected_immediately() {
        let mut system = GroundingSystem::default();
        let before = system.calculate();
        system.apply(ParamCommand::SetSoil(SoilCategory::Rocky));
        let after = system.calculate();
        assert!(after.total_resistance > before.total_resistance);
        assert_eq!(after.status, GroundingStatus::Danger);
        system.apply(ParamCommand::ResetDefaults);
        assert_eq!(system.calculate(), before);
    }
    #[test]
    fn mast_height_does_not_change_metrics() {
        let mut system = GroundingSystem::default();
        let before = system.calculate();
        system.apply(ParamCommand::SetMastHeight(40.0));
        assert_eq!(system.calculate(), before);
    }
    #[test]
    fn zero_rod_length_is_infinite() {
        let mut system = GroundingSystem::new(GroundingConfiguration::default());
        system.apply(ParamCommand::SetRodLength(0.0));
        let m = system.calculate();
        assert!(m.total_resistance.is_infinite());
        assert_eq!(m.fault_current, 0.0);
    }
}
