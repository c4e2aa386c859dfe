//! Secondary metrics derived from the total grounding resistance.

/// Upper bounds (Ω, inclusive) of the status bands.
pub const EXCELLENT_MAX_OHMS: f64 = 5.0;
pub const GOOD_MAX_OHMS: f64 = 10.0;
pub const WARNING_MAX_OHMS: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingStatus {
    Excellent,
    Good,
    Warning,
    Danger,
}

impl GroundingStatus {
    pub fn classify(resistance: f64) -> Self {
        if resistance <= EXCELLENT_MAX_OHMS {
            GroundingStatus::Excellent
        } else if resistance <= GOOD_MAX_OHMS {
            GroundingStatus::Good
        } else if resistance <= WARNING_MAX_OHMS {
            GroundingStatus::Warning
        } else {
            GroundingStatus::Danger
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GroundingStatus::Excellent => "Excellent",
            GroundingStatus::Good => "Good",
            GroundingStatus::Warning => "Warning",
            GroundingStatus::Danger => "Danger",
        }
    }

    /// Display color as RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            GroundingStatus::Excellent => [0, 200, 83],
            GroundingStatus::Good => [139, 195, 74],
            GroundingStatus::Warning => [255, 171, 0],
            GroundingStatus::Danger => [213, 0, 0],
        }
    }
}

/// Percentage of the design goal reached, linear between `target`
/// (100%) and ten times `target` (0%).
pub fn efficiency(resistance: f64, target: f64) -> f64 {
    if resistance <= 0.0 {
        return 100.0;
    }
    if resistance >= target * 10.0 {
        return 0.0;
    }
    100.0 * (1.0 - (resistance - target) / (target * 9.0)).clamp(0.0, 1.0)
}

/// Ohm's law current through the grounding path.
///
/// Non-positive resistance yields 0 A rather than a division artifact.
/// Infinite resistance also gives 0 A.
pub fn fault_current(voltage: f64, resistance: f64) -> f64 {
    if resistance <= 0.0 {
        return 0.0;
    }
    voltage / resistance
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn efficiency_endpoints() {
        assert_eq!(efficiency(5.0, 5.0), 100.0);
        assert_eq!(efficiency(50.0, 5.0), 0.0);
        assert_eq!(efficiency(1.0, 5.0), 100.0);
        assert_eq!(efficiency(0.0, 5.0), 100.0);
        assert_eq!(efficiency(f64::INFINITY, 5.0), 0.0);
        assert!((efficiency(27.5, 5.0) - 50.0).abs() < 1e-9);
    }
    #[test]
    fn efficiency_never_increases_with_resistance() {
        let mut previous = efficiency(0.0, 5.0);
        for step in 1..=1200 {
            let value = efficiency(step as f64 * 0.05, 5.0);
            assert!(value <= previous);
            assert!((0.0..=100.0).contains(&value));
            previous = value;
        }
    }
    #[test]
    fn fault_current_guards() {
        assert_eq!(fault_current(220.0, 0.0), 0.0);
        assert_eq!(fault_current(220.0, -3.0), 0.0);
        assert_eq!(fault_current(220.0, f64::INFINITY), 0.0);
        assert!((fault_current(220.0, 4.4) - 50.0).abs() < 1e-9);
    }
    #[test]
    fn status_thresholds_are_inclusive() {
        assert_eq!(GroundingStatus::classify(5.0), GroundingStatus::Excellent);
        assert_eq!(GroundingStatus::classify(5.0001), GroundingStatus::Good);
        assert_eq!(GroundingStatus::classify(10.0), GroundingStatus::Good);
        assert_eq!(GroundingStatus::classify(25.0), GroundingStatus::Warning);
        assert_eq!(GroundingStatus::classify(25.1), GroundingStatus::Danger);
        assert_eq!(GroundingStatus::classify(f64::INFINITY), GroundingStatus::Danger);
        assert_eq!(GroundingStatus::Danger.message(), "Danger");
    }
}
