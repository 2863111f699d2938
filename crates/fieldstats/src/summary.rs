//! Combined statistics report.

use serde_json::Value;

use crate::{
    StatsError,
    central::{mean_of, median_of},
    extract::extract_numbers,
    spread::{range_of, variance_of},
};

/// Common descriptive statistics for one dataset, computed in a single call.
///
/// `variance` and `std_dev` use sample mode and are `None` when the dataset
/// holds fewer than two observations.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let values = json!([10, 20, 20, 30, 50]);
/// let summary = fieldstats::summary(&values, None).unwrap().unwrap();
/// assert_eq!(summary.count, 5);
/// assert_eq!(summary.min, 10.0);
/// assert_eq!(summary.max, 50.0);
/// assert_eq!(summary.mean, 26.0);
/// assert_eq!(summary.median, 20.0);
/// assert_eq!(summary.range, 40.0);
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct Summary {
    /// Number of extracted observations.
    pub count: usize,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (hybrid sort/selection).
    pub median: f64,
    /// `max - min`.
    pub range: f64,
    /// Sample variance; `None` with fewer than two observations.
    pub variance: Option<f64>,
    /// Sample standard deviation; `None` with fewer than two observations.
    pub std_dev: Option<f64>,
}

/// Computes a [`Summary`] over the extracted values.
///
/// Returns `Ok(None)` when the extracted sequence is empty — unlike the
/// individual calculators, a report full of policy zeros would be
/// misleading.
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
/// assert!(fieldstats::summary(&json!([]), None).unwrap().is_none());
///
/// let records = json!([{ "score": 85 }, { "score": 92 }, { "score": 78 }]);
/// let summary = fieldstats::summary(&records, Some("score")).unwrap().unwrap();
/// assert_eq!(summary.count, 3);
/// assert_eq!(summary.median, 85.0);
/// ```
pub fn summary(values: &Value, field: Option<&str>) -> Result<Option<Summary>, StatsError> {
    let numbers = extract_numbers(values, field)?;
    if numbers.is_empty() {
        return Ok(None);
    }

    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = if numbers.len() >= 2 {
        Some(variance_of(&numbers, true)?)
    } else {
        None
    };
    let std_dev = variance.map(|v| crate::round::round_default(v.sqrt()));

    Ok(Some(Summary {
        count: numbers.len(),
        min,
        max,
        mean: mean_of(&numbers),
        median: median_of(numbers.clone(), &mut rand::rng()),
        range: range_of(&numbers),
        variance,
        std_dev,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert!(summary(&json!([]), None).unwrap().is_none());
        assert!(summary(&json!([null, null]), None).unwrap().is_none());
    }

    #[test]
    fn single_observation_has_no_variance() {
        let summary = summary(&json!([5]), None).unwrap().unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 5.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.range, 0.0);
        assert!(summary.variance.is_none());
        assert!(summary.std_dev.is_none());
    }

    #[test]
    fn matches_individual_calculators() {
        let values = json!([2, 4, 4, 4, 5, 5, 7, 9]);
        let summary = summary(&values, None).unwrap().unwrap();
        assert_eq!(summary.mean, crate::mean(&values, None).unwrap());
        assert_eq!(summary.median, crate::median(&values, None).unwrap());
        assert_eq!(summary.range, crate::range(&values, None).unwrap());
        assert_eq!(
            summary.variance.unwrap(),
            crate::variance(&values, &crate::VarianceOptions::default()).unwrap()
        );
        assert_eq!(
            summary.std_dev.unwrap(),
            crate::stdev(&values, &crate::VarianceOptions::default()).unwrap()
        );
    }

    #[test]
    fn serializes_to_json() {
        let summary = summary(&json!([1, 2, 3]), None).unwrap().unwrap();
        let rendered = serde_json::to_value(&summary).unwrap();
        assert_eq!(rendered["count"], 3);
        assert_eq!(rendered["median"], 2.0);
    }
}
