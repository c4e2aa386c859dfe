//! Parameter sweeps over the grounding model, used by the chart and the
//! design table.
use ndarray::Array2;
use crate::earthing::config::GroundingConfiguration;
use crate::earthing::metrics::calculate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub rod_count: u32,
    pub total_resistance: f64,
}

/// Total resistance for 1..=max_rods rods, all other inputs fixed.
pub fn rod_count_sweep(config: &GroundingConfiguration, max_rods: u32) -> Vec<SweepPoint> {
    let mut probe = config.clone();
    (1..=max_rods)
        .map(|rod_count| {
            probe.set_rod_count(rod_count);
            SweepPoint {
                rod_count,
                total_resistance: calculate(&probe).total_resistance,
            }
        })
        .collect()
}

/// Total resistance with rows indexed by `rod_counts` and columns by
/// `spacings` (metres).
pub fn design_grid(
    config: &GroundingConfiguration,
    rod_counts: &[u32],
    spacings: &[f64],
) -> Array2<f64> {
    let mut probe = config.clone();
    Array2::from_shape_fn((rod_counts.len(), spacings.len()), |(row, col)| {
        probe.set_rod_count(rod_counts[row]);
        probe.set_rod_spacing(spacings[col]);
        calculate(&probe).total_resistance
    })
}

/// Smallest rod count that reaches the configured target, if any up to
/// `max_rods` does.
pub fn minimum_rods_for_target(config: &GroundingConfiguration, max_rods: u32) -> Option<u32> {
    rod_count_sweep(config, max_rods)
        .into_iter()
        .find(|point| point.total_resistance <= config.target_resistance)
        .map(|point| point.rod_count)
}
