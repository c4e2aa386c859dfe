// src/earthing/mod.rs
// Grounding-resistance model: pure formulas plus the configuration they read.
pub mod assessment;
pub mod config;
pub mod error;
pub mod metrics;
pub mod plot;
pub mod radial;
pub mod rod;
pub mod soil;
pub mod sweep;
pub use assessment::GroundingStatus;
pub use config::{GroundingConfiguration, MAX_RADIAL_COUNT, MAX_ROD_COUNT};
pub use error::EarthingError;
pub use metrics::{calculate, GroundingMetrics};
pub use plot::{render_sweep_png, PlotStyle};
pub use soil::{SoilCategory, WeatherCondition};
pub use sweep::{design_grid, minimum_rods_for_target, rod_count_sweep, SweepPoint};
