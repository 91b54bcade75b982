//! Deterministic numeric and statistical helpers.
//!
//! Every helper returns `0.0` for empty input instead of failing.

#![forbid(unsafe_code)]

/// Divide and guard division by zero (or a negative denominator).
#[must_use]
pub fn safe_div(numer: f64, denom: f64) -> f64 {
    if denom <= 0.0 { 0.0 } else { numer / denom }
}

/// Return the largest value, or `0.0` for an empty slice.
///
/// Inputs are non-negative metric values; the fold starts at zero.
#[must_use]
pub fn max_f64(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Return the arithmetic mean, or `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Return the median of an unsorted slice.
///
/// Even-length input averages the two central values.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_sorted(&sorted)
}

/// Return the median of an ascending-sorted slice.
#[must_use]
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => sorted[(n - 1) / 2],
        _ => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_div_guards_divide_by_zero() {
        assert_eq!(safe_div(5.0, 0.0), 0.0);
        assert_eq!(safe_div(5.0, -1.0), 0.0);
        assert_eq!(safe_div(1.0, 4.0), 0.25);
    }

    #[test]
    fn empty_inputs_are_zero() {
        assert_eq!(max_f64(&[]), 0.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn median_handles_odd_and_even_lengths() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[7.5]), 7.5);
    }
}
