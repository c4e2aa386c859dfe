//! Driven-rod electrode formulas.
//!
//! Single rod (Dwight/IEEE 142 simplified form):
//! `R = ρ / (2π·L) · ln(4L / d)`
//!
//! Rods in parallel interfere when their resistance areas overlap. The
//! overlap is modelled by a coupling factor λ looked up from the ratio of
//! spacing to rod length, and the group resistance is
//! `R_t = R / n · (1 + λ·(n - 1))`.
use std::f64::consts::PI;

/// Coupling steps as `(minimum spacing/length ratio, factor)`, widest first.
const COUPLING_STEPS: [(f64, f64); 5] = [(2.0, 0.0), (1.5, 0.1), (1.0, 0.2), (0.7, 0.35), (0.5, 0.5)];
/// Coupling for rods closer than half a rod length apart.
pub const MAX_COUPLING: f64 = 0.7;

/// Resistance of one isolated vertical rod (Ω).
///
/// Non-positive length or diameter means the rod cannot ground anything and
/// yields `f64::INFINITY`. Length and diameter must share a unit.
pub fn single_rod_resistance(resistivity: f64, length: f64, diameter: f64) -> f64 {
    if length <= 0.0 || diameter <= 0.0 {
        return f64::INFINITY;
    }
    (resistivity / (2.0 * PI * length)) * (4.0 * length / diameter).ln()
}

/// Mutual-interference coefficient in [0, 0.7] for the given spacing.
pub fn coupling_factor(spacing: f64, length: f64) -> f64 {
    let ratio = spacing / length;
    COUPLING_STEPS
        .iter()
        .find(|(min_ratio, _)| ratio >= *min_ratio)
        .map(|(_, factor)| *factor)
        .unwrap_or(MAX_COUPLING)
}

/// Combined resistance of `rod_count` identical rods.
pub fn parallel_resistance(single: f64, rod_count: u32, coupling: f64) -> f64 {
    match rod_count {
        0 => f64::INFINITY,
        1 => single,
        n => {
            let n = n as f64;
            (single / n) * (1.0 + coupling * (n - 1.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn single_rod_in_clay() {
        let r = single_rod_resistance(34.0, 2.4, 0.016);
        assert!((r - 14.4232).abs() < 1e-3, "got {r}");
    }
    #[test]
    fn degenerate_geometry_is_infinite() {
        assert!(single_rod_resistance(40.0, 0.0, 0.016).is_infinite());
        assert!(single_rod_resistance(40.0, 2.4, 0.0).is_infinite());
        assert!(single_rod_resistance(40.0, -1.0, 0.016).is_infinite());
    }
    #[test]
    fn coupling_step_boundaries() {
        assert_eq!(coupling_factor(4.8, 2.4), 0.0);
        assert_eq!(coupling_factor(2.0, 1.0), 0.0);
        assert_eq!(coupling_factor(1.5, 1.0), 0.1);
        assert_eq!(coupling_factor(3.0, 2.4), 0.2);
        assert_eq!(coupling_factor(1.0, 1.0), 0.2);
        assert_eq!(coupling_factor(0.7, 1.0), 0.35);
        assert_eq!(coupling_factor(0.5, 1.0), 0.5);
        assert_eq!(coupling_factor(0.49, 1.0), 0.7);
    }
    #[test]
    fn coupling_with_zero_length_rods() {
        // spacing / 0 is +inf: treated as fully independent rods
        assert_eq!(coupling_factor(3.0, 0.0), 0.0);
        // 0 / 0 is NaN: no step matches, closest-spacing factor applies
        assert_eq!(coupling_factor(0.0, 0.0), MAX_COUPLING);
    }
    #[test]
    fn coupling_never_increases_with_spacing() {
        let mut previous = f64::MAX;
        for step in 1..=300 {
            let spacing = step as f64 * 0.01;
            let factor = coupling_factor(spacing, 1.0);
            assert!(factor <= previous);
            assert!((0.0..=MAX_COUPLING).contains(&factor));
            previous = factor;
        }
    }
    #[test]
    fn parallel_special_cases() {
        assert!(parallel_resistance(14.0, 0, 0.2).is_infinite());
        assert_eq!(parallel_resistance(14.0, 1, 0.7), 14.0);
        let rt = parallel_resistance(14.4232, 4, 0.2);
        assert!((rt - 5.76928).abs() < 1e-4);
    }
    #[test]
    fn more_rods_never_raise_resistance() {
        for &(_, coupling) in COUPLING_STEPS.iter().chain([(0.0, MAX_COUPLING)].iter()) {
            let mut previous = parallel_resistance(20.0, 1, coupling);
            for n in 2..=64 {
                let rt = parallel_resistance(20.0, n, coupling);
                assert!(rt <= previous + 1e-12, "n={n} coupling={coupling}");
                previous = rt;
            }
        }
    }
}
