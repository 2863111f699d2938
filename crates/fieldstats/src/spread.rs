//! Measures of spread: range, variance, standard deviation, and percentile.

use serde_json::Value;

use crate::{StatsError, extract::extract_numbers, round::round_default};

/// Options for [`variance`] and [`stdev`].
///
/// Defaults to no field projection and sample mode (divisor `n - 1`).
///
/// # Examples
///
/// ```
/// use fieldstats::VarianceOptions;
///
/// let options = VarianceOptions::default();
/// assert!(options.sample);
/// assert!(options.field.is_none());
///
/// let population = VarianceOptions { sample: false, ..VarianceOptions::default() };
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VarianceOptions {
    /// Record field to project before computing, if any.
    pub field: Option<String>,
    /// Divide by `n - 1` when `true` (sample), by `n` when `false`
    /// (population).
    pub sample: bool,
}

impl Default for VarianceOptions {
    fn default() -> Self {
        Self {
            field: None,
            sample: true,
        }
    }
}

/// Computes the range (`max - min`) of the extracted values.
///
/// An empty extracted sequence yields `0.0`.
///
/// # Errors
///
/// Propagates extraction failures from [`extract_numbers`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let values = json!([10, 20, 20, 30, 50]);
/// assert_eq!(fieldstats::range(&values, None).unwrap(), 40.0);
/// ```
pub fn range(values: &Value, field: Option<&str>) -> Result<f64, StatsError> {
    let numbers = extract_numbers(values, field)?;
    Ok(range_of(&numbers))
}

pub(crate) fn range_of(numbers: &[f64]) -> f64 {
    let Some((&first, rest)) = numbers.split_first() else {
        return 0.0;
    };
    let mut min = first;
    let mut max = first;
    // An element can update at most one extreme per pass; a value equal to
    // the current min or max updates neither.
    for &number in rest {
        if number < min {
            min = number;
        } else if number > max {
            max = number;
        }
    }
    round_default(max - min)
}

/// Computes the variance of the extracted values.
///
/// Sample mode divides the sum of squared deviations by `n - 1`, population
/// mode by `n`. An empty extracted sequence yields `0.0` in both modes;
/// sample mode over exactly one observation fails.
///
/// # Errors
///
/// * [`StatsError::InsufficientData`] - sample mode with one observation
/// * extraction failures from [`extract_numbers`]
///
/// # Examples
///
/// ```
/// use fieldstats::VarianceOptions;
/// use serde_json::json;
///
/// let values = json!([2, 4, 4, 4, 5, 5, 7, 9]);
/// let population = VarianceOptions { sample: false, ..VarianceOptions::default() };
/// assert_eq!(fieldstats::variance(&values, &population).unwrap(), 4.0);
/// ```
pub fn variance(values: &Value, options: &VarianceOptions) -> Result<f64, StatsError> {
    let numbers = extract_numbers(values, options.field.as_deref())?;
    variance_of(&numbers, options.sample)
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn variance_of(numbers: &[f64], sample: bool) -> Result<f64, StatsError> {
    if numbers.is_empty() {
        return Ok(0.0);
    }
    if sample && numbers.len() == 1 {
        return Err(StatsError::InsufficientData);
    }
    let count = numbers.len() as f64;
    let divisor = if sample { count - 1.0 } else { count };
    let mean = numbers.iter().sum::<f64>() / count;
    let squared_deviations = numbers.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Ok(round_default(squared_deviations / divisor))
}

/// Computes the standard deviation of the extracted values.
///
/// Returns the rounded square root of the (already rounded) variance; the
/// double rounding is intentional.
///
/// # Errors
///
/// Same as [`variance`].
///
/// # Examples
///
/// ```
/// use fieldstats::VarianceOptions;
/// use serde_json::json;
///
/// let values = json!([2, 4, 4, 4, 5, 5, 7, 9]);
/// let population = VarianceOptions { sample: false, ..VarianceOptions::default() };
/// assert_eq!(fieldstats::stdev(&values, &population).unwrap(), 2.0);
/// ```
pub fn stdev(values: &Value, options: &VarianceOptions) -> Result<f64, StatsError> {
    Ok(round_default(variance(values, options)?.sqrt()))
}

/// Computes the `p`-th percentile of the extracted values.
///
/// `p` must lie in `[0, 100]`. The endpoints return the minimum and maximum
/// directly; interior percentiles interpolate linearly between the values at
/// the floor and ceiling of the fractional rank `(p / 100) * (n - 1)`. An
/// empty extracted sequence yields `0.0`.
///
/// # Errors
///
/// * [`StatsError::InvalidRange`] - `p` outside `[0, 100]`
/// * extraction failures from [`extract_numbers`]
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let values = json!([15, 20, 35, 40, 50]);
/// assert_eq!(fieldstats::percentile(&values, 40.0, None).unwrap(), 29.0);
/// assert_eq!(fieldstats::percentile(&values, 0.0, None).unwrap(), 15.0);
/// assert_eq!(fieldstats::percentile(&values, 100.0, None).unwrap(), 50.0);
/// ```
#[expect(
    clippy::float_cmp,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub fn percentile(values: &Value, p: f64, field: Option<&str>) -> Result<f64, StatsError> {
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidRange { percentile: p });
    }
    let mut numbers = extract_numbers(values, field)?;
    if numbers.is_empty() {
        return Ok(0.0);
    }
    numbers.sort_by(f64::total_cmp);

    // The endpoints bypass interpolation entirely.
    if p == 0.0 {
        return Ok(numbers[0]);
    }
    if p == 100.0 {
        return Ok(numbers[numbers.len() - 1]);
    }

    let rank = (p / 100.0) * ((numbers.len() - 1) as f64);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(numbers[lower]);
    }
    let weight = rank - rank.floor();
    Ok(round_default(
        numbers[lower] + (numbers[upper] - numbers[lower]) * weight,
    ))
}
