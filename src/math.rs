/// One application of the logistic map f(x) = r·x·(1−x).
#[inline]
pub fn logistic(x: f64, r: f64) -> f64 {
    r * x * (1.0 - x)
}

/// Apply the logistic map `n` times starting from `x0`.
///
/// No clamping or validation: values outside [0, 1] or r outside [0, 4]
/// are iterated as given and may run off to infinity.
pub fn iterate(x0: f64, r: f64, n: usize) -> f64 {
    let mut x = x0;
    for _ in 0..n {
        x = logistic(x, r);
    }
    x
}

/// Fixed point (r−1)/r the map settles on for 1 ≤ r ≤ 3.
pub fn fixed_point(r: f64) -> f64 {
    (r - 1.0) / r
}

/// `n` evenly spaced values over [start, stop], both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Round `x` to `precision` decimal digits and return it scaled to an
/// integer, so 0.58374 at four digits becomes 5837.
///
/// Rounding is done on the exact binary value of `x`. Returns `None` for
/// non-finite input or when the scaled value does not fit in an `i64`.
pub(crate) fn quantize(x: f64, precision: u32) -> Option<i64> {
    if !x.is_finite() {
        return None;
    }
    let digits = format!("{:.*}", precision as usize, x);
    digits.replace('.', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step() {
        assert_eq!(logistic(0.5, 4.0), 1.0);
        assert_eq!(logistic(0.5, 2.0), 0.5);
        assert_eq!(logistic(0.0, 3.7), 0.0);
    }

    #[test]
    fn zero_steps_is_identity() {
        assert_eq!(iterate(0.123, 3.9, 0), 0.123);
        assert_eq!(iterate(-7.5, 100.0, 0), -7.5);
    }

    #[test]
    fn iterate_composes() {
        let a = iterate(0.2, 3.3, 7);
        let b = iterate(iterate(0.2, 3.3, 3), 3.3, 4);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn r_one_converges_to_zero() {
        let x = iterate(0.5, 1.0, 10_000);
        assert!(x.abs() < 1e-3, "expected ~0.0, got {x}");
    }

    #[test]
    fn converges_to_fixed_point() {
        let x = iterate(0.5, 2.5, 200);
        assert!((x - fixed_point(2.5)).abs() < 1e-9, "got {x}");
    }

    #[test]
    fn diverges_outside_unit_interval() {
        let x = iterate(0.5, 5.0, 100);
        assert!(x.is_infinite() && x < 0.0, "got {x}");
    }

    #[test]
    fn linspace_matches_endpoints() {
        let grid = linspace(0.0, 4.0, 1000);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[999], 4.0);
        assert!((grid[1] - 4.0 / 999.0).abs() < 1e-15);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn quantize_rounds_to_grid() {
        assert_eq!(quantize(0.12344, 4), Some(1234));
        assert_eq!(quantize(0.12346, 4), Some(1235));
        assert_eq!(quantize(-0.0, 4), Some(0));
        assert_eq!(quantize(-0.25, 1), Some(-2));
        assert_eq!(quantize(7.6, 0), Some(8));
        assert_eq!(quantize(f64::NEG_INFINITY, 4), None);
        assert_eq!(quantize(f64::NAN, 4), None);
    }

    #[test]
    fn quantize_uses_exact_binary_value() {
        // The double nearest 0.58375 lies just below the tie; scaling by 1e4
        // first would land exactly on 5837.5 and round up.
        assert_eq!(quantize(0.58375, 4), Some(5837));
    }

    #[test]
    fn quantize_rejects_values_beyond_i64() {
        assert_eq!(quantize(9.2e14, 4), Some(9_200_000_000_000_000_000));
        assert_eq!(quantize(9.3e14, 4), None);
        assert_eq!(quantize(-1e16, 4), None);
        assert_eq!(quantize(1e300, 4), None);
    }
}
