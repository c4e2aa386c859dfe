/// Reduction per metre of buried radial conductor.
pub const REDUCTION_PER_METRE: f64 = 0.005;
/// Radials never take more than this fraction off the rod resistance.
pub const MAX_RADIAL_REDUCTION: f64 = 0.4;

/// Multiplicative factor in [0.6, 1] applied to the rod-group resistance.
pub fn radial_reduction_factor(radial_count: u32, radial_length: f64) -> f64 {
    if radial_count == 0 || radial_length <= 0.0 {
        return 1.0;
    }
    let reduction = (radial_count as f64 * radial_length * REDUCTION_PER_METRE).min(MAX_RADIAL_REDUCTION);
    1.0 - reduction
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn no_radials_no_reduction() {
        assert_eq!(radial_reduction_factor(0, 5.0), 1.0);
        assert_eq!(radial_reduction_factor(8, 0.0), 1.0);
    }
    #[test]
    fn eight_five_metre_radials() {
        assert!((radial_reduction_factor(8, 5.0) - 0.8).abs() < 1e-12);
    }
    #[test]
    fn reduction_saturates_at_forty_percent() {
        assert!((radial_reduction_factor(16, 5.0) - 0.6).abs() < 1e-12);
        for count in [20, 64, 120, 1000] {
            for length in [10.0, 50.0, 1e6] {
                assert!(radial_reduction_factor(count, length) >= 1.0 - MAX_RADIAL_REDUCTION - 1e-12);
            }
        }
    }
}
