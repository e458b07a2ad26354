use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::attractor::{Detector, Outcome};
use crate::error::{BifurcationError, Result};
use crate::math::linspace;

pub const R_MIN: f64 = 0.0;
pub const R_MAX: f64 = 4.0;
pub const GRID_POINTS: usize = 1000;
pub const START_VALUE: f64 = 0.1;

/// Grid of r values to sweep and the starting value used for each.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub r_min: f64,
    pub r_max: f64,
    pub points: usize,
    pub x0: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            r_min: R_MIN,
            r_max: R_MAX,
            points: GRID_POINTS,
            x0: START_VALUE,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.points == 0 {
            return Err(BifurcationError::InvalidSweep("grid has no points".into()));
        }
        if !self.r_min.is_finite() || !self.r_max.is_finite() {
            return Err(BifurcationError::InvalidSweep(format!(
                "r range [{}, {}] is not finite",
                self.r_min, self.r_max
            )));
        }
        if self.r_min > self.r_max {
            return Err(BifurcationError::InvalidSweep(format!(
                "r_min {} exceeds r_max {}",
                self.r_min, self.r_max
            )));
        }
        if !self.x0.is_finite() {
            return Err(BifurcationError::InvalidSweep(format!(
                "starting value {} is not finite",
                self.x0
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> Vec<f64> {
        linspace(self.r_min, self.r_max, self.points)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Undetermined,
    Diverged,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skipped {
    pub r: f64,
    pub reason: SkipReason,
}

/// Collected (r, attractor) pairs for plotting, in sweep order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BifurcationDiagram {
    points: Vec<(f64, f64)>,
    skipped: Vec<Skipped>,
}

impl BifurcationDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every attractor of `outcome` at `r`. Anything other than a
    /// cycle adds no points and is noted in `skipped`.
    pub fn record(&mut self, r: f64, outcome: &Outcome) {
        match outcome {
            Outcome::Cycle(set) => self.points.extend(set.values().map(|v| (r, v))),
            Outcome::Undetermined { steps, .. } => {
                debug!(r, steps, "no repeat within budget, skipping");
                self.skipped.push(Skipped { r, reason: SkipReason::Undetermined });
            }
            Outcome::Diverged => {
                debug!(r, "trajectory diverged, skipping");
                self.skipped.push(Skipped { r, reason: SkipReason::Diverged });
            }
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of attractors plotted at each r, in sweep order.
    pub fn attractor_counts(&self) -> Vec<(f64, usize)> {
        let mut counts: Vec<(f64, usize)> = Vec::new();
        for &(r, _) in &self.points {
            match counts.last_mut() {
                Some((last, n)) if *last == r => *n += 1,
                _ => counts.push((r, 1)),
            }
        }
        counts
    }
}

/// Run the detector at every r of the grid and collect the results.
pub fn sweep(config: &SweepConfig, detector: &Detector) -> Result<BifurcationDiagram> {
    config.validate()?;

    info!(
        points = config.points,
        r_min = config.r_min,
        r_max = config.r_max,
        x0 = config.x0,
        "sweeping r"
    );

    let mut diagram = BifurcationDiagram::new();
    for r in config.grid() {
        diagram.record(r, &detector.detect(config.x0, r));
    }

    info!(
        points = diagram.len(),
        skipped = diagram.skipped().len(),
        "sweep complete"
    );
    Ok(diagram)
}
