use crate::earthing::assessment::{efficiency, fault_current, GroundingStatus};
use crate::earthing::config::GroundingConfiguration;
use crate::earthing::radial::radial_reduction_factor;
use crate::earthing::rod::{coupling_factor, parallel_resistance, single_rod_resistance};
use crate::earthing::soil::{adjusted_resistivity, base_resistivity};

/// One evaluation of the grounding model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundingMetrics {
    /// Effective soil resistivity (Ω·m).
    pub resistivity: f64,
    pub single_rod_resistance: f64,
    pub coupling_factor: f64,
    /// Rod group before radials (Ω).
    pub parallel_resistance: f64,
    pub radial_factor: f64,
    pub total_resistance: f64,
    /// Percent of the design goal, 0..=100.
    pub efficiency: f64,
    /// Amperes at the configured fault voltage.
    pub fault_current: f64,
    pub status: GroundingStatus,
}

impl GroundingMetrics {
    pub fn meets_target(&self, target: f64) -> bool {
        self.total_resistance <= target
    }
}

/// Evaluates the full chain: resistivity, single rod, coupling, parallel
/// group, radials, then the derived metrics.
pub fn calculate(config: &GroundingConfiguration) -> GroundingMetrics {
    let base = base_resistivity(config.soil_type);
    let resistivity = adjusted_resistivity(base, config.weather, config.humidity);
    let single = single_rod_resistance(resistivity, config.rod_length, config.rod_diameter);
    let coupling = coupling_factor(config.rod_spacing, config.rod_length);
    let parallel = parallel_resistance(single, config.rod_count, coupling);
    let radial_factor = radial_reduction_factor(config.radial_count, config.radial_length);
    let total = parallel * radial_factor;
    GroundingMetrics {
        resistivity,
        single_rod_resistance: single,
        coupling_factor: coupling,
        parallel_resistance: parallel,
        radial_factor,
        total_resistance: total,
        efficiency: efficiency(total, config.target_resistance),
        fault_current: fault_current(config.fault_voltage, total),
        status: GroundingStatus::classify(total),
    }
}
