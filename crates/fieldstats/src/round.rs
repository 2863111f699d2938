//! Fixed-precision rounding for floating results.

/// Decimal digits kept by [`round_default`].
pub const DEFAULT_PRECISION: u32 = 10;

/// Rounds `value` to `precision` decimal digits.
///
/// Uses scale-multiply-round-divide, which is sufficient to normalize the
/// accumulation noise the calculators produce.
///
/// # Examples
///
/// ```
/// use fieldstats::round::round_to;
///
/// assert_eq!(round_to(2.675, 2), 2.68);
/// assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
/// ```
#[expect(clippy::cast_possible_wrap)]
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Rounds `value` to the crate-wide default of ten decimal digits.
#[must_use]
pub fn round_default(value: f64) -> f64 {
    round_to(value, DEFAULT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(3.14159, 0), 3.0);
        assert_eq!(round_to(-3.14159, 3), -3.142);
    }

    #[test]
    fn default_precision_suppresses_accumulation_noise() {
        let noisy = 0.1 + 0.2;
        assert_ne!(noisy, 0.3);
        assert_eq!(round_default(noisy), 0.3);
    }

    #[test]
    fn integral_values_are_unchanged() {
        assert_eq!(round_default(42.0), 42.0);
        assert_eq!(round_to(-7.0, 5), -7.0);
    }
}
