//! Shared test utilities for the contour-map workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Sample grid generators (ramps, peaks, steps, noise)
//! - Fixtures for the reference scenarios and delimited sample files
//! - Approximate float assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, create_peak_grid, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Asserts every value of a slice lies within `[min, max]`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_all_within;
///
/// assert_all_within!(&[0.5, 1.0], 0.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_all_within {
    ($values:expr, $min:expr, $max:expr) => {{
        let min: f64 = $min as f64;
        let max: f64 = $max as f64;
        for (idx, &value) in $values.iter().enumerate() {
            if !(value >= min && value <= max) {
                panic!(
                    "assertion failed: value[{}] = `{:?}` outside [`{:?}`, `{:?}`]",
                    idx, value, min, max
                );
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_all_within_passes() {
        assert_all_within!(vec![0.0, 0.5, 1.0], 0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "value[1]")]
    fn test_assert_all_within_fails() {
        assert_all_within!([0.0, 1.5], 0.0, 1.0);
    }
}
