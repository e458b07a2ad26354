//! Fixed illustrations printed by the binary: convergence to a fixed point
//! for r = 1, and two-cycle oscillation for r = 3.1.

use crate::math::iterate;

#[derive(Clone, Copy, Debug)]
pub struct Illustration {
    pub heading: &'static str,
    /// Text between the step count and the value.
    pub label: &'static str,
    pub x0: f64,
    pub r: f64,
    pub steps: &'static [usize],
}

impl Illustration {
    /// `(steps, value)` for each step count.
    pub fn samples(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.steps.iter().map(|&n| (n, iterate(self.x0, self.r, n)))
    }

    /// Heading followed by one line per sample.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.heading.to_string()];
        lines.extend(
            self.samples()
                .map(|(n, value)| format!("{} {} {}", n, self.label, format_value(value))),
        );
        lines
    }
}

pub const ILLUSTRATIONS: [Illustration; 2] = [
    Illustration {
        heading: "iterated function with 0 < x < 1 and 1 <= r <= 3",
        label: "iterations: ",
        x0: 0.5,
        r: 1.0,
        steps: &[10, 100, 1000, 10000],
    },
    Illustration {
        heading: "iterated function with 0 < x < 1 and r > 3",
        label: "iterations",
        x0: 0.2,
        r: 3.1,
        steps: &[200, 201, 202, 203, 204],
    },
];

/// Shortest round-trip form, switching to `d.ddde-XX` below 1e-4 and at
/// 1e16 and above, with a fractional part always shown otherwise.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return match value {
            v if v.is_nan() => "nan".to_string(),
            v if v > 0.0 => "inf".to_string(),
            _ => "-inf".to_string(),
        };
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let text = format!("{value:e}");
        let Some((mantissa, exponent)) = text.split_once('e') else {
            return text;
        };
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let text = value.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}
