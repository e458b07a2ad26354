//! Error types for sweeping and displaying bifurcation diagrams.

#[derive(Debug, thiserror::Error)]
pub enum BifurcationError {
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    #[error("canvas has a zero dimension ({width}x{height})")]
    EmptyCanvas { width: usize, height: usize },

    #[error("canvas of {width}x{height} pixels does not fit in memory")]
    CanvasTooLarge { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, BifurcationError>;
