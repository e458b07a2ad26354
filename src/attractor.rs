//! Attractor detection for the logistic map.
//!
//! The trajectory is iterated past a transient, then each new value is
//! rounded to a fixed number of decimal digits. The first rounded value that
//! repeats closes the cycle. This is an approximation of period detection:
//! a chaotic orbit also "cycles" once two of its values agree at the chosen
//! resolution, so the reported set for chaotic r is a sample of the orbit
//! rather than a true periodic attractor.

use std::collections::BTreeSet;

use crate::math::{iterate, logistic, quantize};

/// Map applications discarded before collecting attractors.
pub const TRANSIENT_STEPS: usize = 100;

/// Maximum steps searched for a repeated value after the transient.
pub const SEARCH_BUDGET: usize = 1000;

/// Decimal digits kept when comparing values.
pub const PRECISION: u32 = 4;

/// Beyond this many digits `f64` cannot tell rounded values apart.
const MAX_PRECISION: u32 = 15;

/// Distinct values of a trajectory, rounded to `precision` decimal digits.
///
/// Values are held as integer grid indices, so two values are the same
/// attractor exactly when they round to the same decimal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttractorSet {
    keys: BTreeSet<i64>,
    precision: u32,
}

impl AttractorSet {
    fn new(precision: u32) -> Self {
        AttractorSet { keys: BTreeSet::new(), precision }
    }

    fn scale(&self) -> f64 {
        scale_for(self.precision)
    }

    /// Returns false if the key was already present.
    fn insert_key(&mut self, key: i64) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounded attractor values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let scale = self.scale();
        self.keys.iter().map(move |&k| k as f64 / scale)
    }

    /// Whether `value` rounds to one of the attractors.
    pub fn contains(&self, value: f64) -> bool {
        quantize(value, self.precision).is_some_and(|k| self.keys.contains(&k))
    }
}

/// Result of searching a trajectory for its long-run values.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A rounded value repeated; the set holds every value of the cycle.
    Cycle(AttractorSet),

    /// The search budget ran out before any rounded value repeated.
    /// `partial` holds what was collected over `steps` steps.
    Undetermined { partial: AttractorSet, steps: usize },

    /// The trajectory left the finite reals.
    Diverged,
}

impl Outcome {
    /// The attractor set, if a cycle was found.
    pub fn attractors(&self) -> Option<&AttractorSet> {
        match self {
            Outcome::Cycle(set) => Some(set),
            _ => None,
        }
    }

    pub fn into_attractors(self) -> Option<AttractorSet> {
        match self {
            Outcome::Cycle(set) => Some(set),
            _ => None,
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, Outcome::Cycle(_))
    }
}

/// Parameters of the attractor search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detector {
    pub transient: usize,
    pub budget: usize,
    pub precision: u32,
}

impl Default for Detector {
    fn default() -> Self {
        Detector {
            transient: TRANSIENT_STEPS,
            budget: SEARCH_BUDGET,
            precision: PRECISION,
        }
    }
}

impl Detector {
    pub fn new(transient: usize, budget: usize, precision: u32) -> Self {
        Detector {
            transient,
            budget,
            precision: precision.min(MAX_PRECISION),
        }
    }

    /// Precision is clamped here as well, since the fields are public.
    pub fn detect(&self, x0: f64, r: f64) -> Outcome {
        let precision = self.precision.min(MAX_PRECISION);
        let mut set = AttractorSet::new(precision);

        let mut x = iterate(x0, r, self.transient);
        let Some(seed) = quantize(x, precision) else {
            return Outcome::Diverged;
        };
        set.insert_key(seed);

        for _ in 0..self.budget {
            x = logistic(x, r);
            let Some(key) = quantize(x, precision) else {
                return Outcome::Diverged;
            };
            if !set.insert_key(key) {
                return Outcome::Cycle(set);
            }
        }

        Outcome::Undetermined { partial: set, steps: self.budget }
    }
}

/// Search the trajectory from `x0` under `r` with the default detector.
pub fn attractors(x0: f64, r: f64) -> Outcome {
    Detector::default().detect(x0, r)
}

fn scale_for(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fixed_point;

    fn cycle(x0: f64, r: f64) -> AttractorSet {
        match attractors(x0, r) {
            Outcome::Cycle(set) => set,
            other => panic!("expected a cycle for r={r}, got {other:?}"),
        }
    }

    #[test]
    fn fixed_point_regime() {
        let set = cycle(0.1, 2.5);
        assert_eq!(set.len(), 1);
        let value = set.values().next().unwrap();
        assert!((value - fixed_point(2.5)).abs() < 1e-4, "got {value}");
        assert!(set.contains(0.6));
    }

    #[test]
    fn period_two() {
        let set = cycle(0.2, 3.1);
        assert_eq!(set.len(), 2);
        let values: Vec<f64> = set.values().collect();
        assert!((values[0] - 0.558).abs() < 1e-3, "got {values:?}");
        assert!((values[1] - 0.7646).abs() < 1e-3, "got {values:?}");
    }

    #[test]
    fn period_four() {
        let set = cycle(0.1, 3.5);
        assert_eq!(set.len(), 4);
        assert!(set.contains(0.8750));
        assert!(set.contains(0.3828));
    }

    #[test]
    fn zero_parameter_collapses() {
        let set = cycle(0.7, 0.0);
        assert_eq!(set.values().collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn exhausted_budget_is_undetermined() {
        // Period four needs three steps to close; two is not enough.
        let detector = Detector::new(TRANSIENT_STEPS, 2, PRECISION);
        match detector.detect(0.1, 3.5) {
            Outcome::Undetermined { partial, steps } => {
                assert_eq!(steps, 2);
                assert_eq!(partial.len(), 3);
            }
            other => panic!("expected undetermined, got {other:?}"),
        }
    }

    #[test]
    fn undetermined_is_not_empty_set() {
        let detector = Detector::new(TRANSIENT_STEPS, 0, PRECISION);
        let outcome = detector.detect(0.1, 3.9);
        assert!(outcome.attractors().is_none());
        assert!(!outcome.is_cycle());
    }

    #[test]
    fn divergent_trajectory() {
        assert_eq!(attractors(0.5, 5.0), Outcome::Diverged);
        assert_eq!(attractors(1.5, 4.0), Outcome::Diverged);
    }

    #[test]
    fn precision_is_clamped() {
        assert_eq!(Detector::new(10, 10, 40).precision, MAX_PRECISION);
        assert_eq!(Detector::new(10, 10, 2).precision, 2);
    }

    #[test]
    fn coarser_precision_merges_values() {
        let coarse = Detector::new(TRANSIENT_STEPS, SEARCH_BUDGET, 1)
            .detect(0.1, 3.9)
            .into_attractors()
            .unwrap();
        assert!(coarse.len() <= 11);
        assert_eq!(coarse.precision(), 1);
    }

    #[test]
    fn rounds_on_exact_binary_value() {
        // Settles on the double just below 0.58375.
        let set = cycle(0.1, 2.4024024024024024);
        assert_eq!(set.values().collect::<Vec<_>>(), vec![0.5837]);
    }

    #[test]
    fn runaway_values_diverge_instead_of_saturating() {
        // 1e16, -1e32, -1e64, ... are finite but far outside i64 once scaled.
        let detector = Detector::new(0, SEARCH_BUDGET, PRECISION);
        assert_eq!(detector.detect(1e16, 1.0), Outcome::Diverged);
    }

    #[test]
    fn precision_set_directly_is_clamped() {
        let detector = Detector { transient: TRANSIENT_STEPS, budget: SEARCH_BUDGET, precision: 40 };
        let outcome = detector.detect(0.1, 2.5);
        let set = outcome.attractors().expect("fixed point should close a cycle");
        assert_eq!(set.precision(), MAX_PRECISION);
        assert!(set.contains(0.6));
    }

    #[test]
    fn deterministic() {
        assert_eq!(attractors(0.1, 3.7), attractors(0.1, 3.7));
    }
}
