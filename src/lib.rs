pub mod math;
pub mod attractor;
pub mod sweep;
pub mod render;
pub mod visualizer;
pub mod demo;
pub mod error;

pub use math::{logistic, iterate, fixed_point, linspace};
pub use attractor::{
    AttractorSet, Detector, Outcome, attractors,
    PRECISION, SEARCH_BUDGET, TRANSIENT_STEPS
};
pub use sweep::{BifurcationDiagram, SkipReason, Skipped, SweepConfig, sweep};
pub use render::{Canvas, PLOT_HEIGHT, PLOT_WIDTH, render_diagram};
pub use visualizer::show;
pub use demo::{ILLUSTRATIONS, Illustration, format_value};
pub use error::{BifurcationError, Result};
