//! Measures of central tendency: mean, median, and mode.

use std::collections::HashMap;

use rand::Rng;
use serde_json::Value;

use crate::{StatsError, extract::extract_numbers, round::round_default, select::select_nth};

/// Below this many values the median sorts instead of selecting; sorting is
/// cheaper than selection setup at small sizes.
const SELECTION_THRESHOLD: usize = 32;

/// Computes the arithmetic mean of the extracted values.
///
/// An empty extracted sequence yields `0.0` rather than an error.
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
/// assert_eq!(fieldstats::mean(&values, None).unwrap(), 26.0);
/// assert_eq!(fieldstats::mean(&json!([]), None).unwrap(), 0.0);
/// ```
pub fn mean(values: &Value, field: Option<&str>) -> Result<f64, StatsError> {
    let numbers = extract_numbers(values, field)?;
    Ok(mean_of(&numbers))
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn mean_of(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    round_default(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Computes the median of the extracted values.
///
/// Small sequences (fewer than 32 values) are sorted; larger ones go through
/// in-place quickselect, which finds the middle rank in average linear time.
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
/// let odd = json!([7, 1, 3]);
/// assert_eq!(fieldstats::median(&odd, None).unwrap(), 3.0);
///
/// let even = json!([1, 2, 3, 4]);
/// assert_eq!(fieldstats::median(&even, None).unwrap(), 2.5);
/// ```
pub fn median(values: &Value, field: Option<&str>) -> Result<f64, StatsError> {
    median_with_rng(values, field, &mut rand::rng())
}

/// Like [`median`], but with a caller-supplied pivot generator.
///
/// Seeding the generator pins the quickselect pivot sequence, which makes
/// the selection path reproducible. The computed median is the same for any
/// generator.
///
/// # Errors
///
/// Propagates extraction failures from [`extract_numbers`].
pub fn median_with_rng(
    values: &Value,
    field: Option<&str>,
    rng: &mut impl Rng,
) -> Result<f64, StatsError> {
    let numbers = extract_numbers(values, field)?;
    Ok(median_of(numbers, rng))
}

pub(crate) fn median_of(mut numbers: Vec<f64>, rng: &mut impl Rng) -> f64 {
    let n = numbers.len();
    if n == 0 {
        return 0.0;
    }
    if n < SELECTION_THRESHOLD {
        numbers.sort_by(f64::total_cmp);
        if n % 2 == 1 {
            return numbers[n / 2];
        }
        return round_default((numbers[n / 2 - 1] + numbers[n / 2]) / 2.0);
    }
    if n % 2 == 1 {
        // An original value, no rounding needed.
        return select_nth(&mut numbers, n / 2, rng);
    }
    // The first selection leaves everything left of the found position at or
    // below it, so the second selection reuses the same working buffer.
    let lower = select_nth(&mut numbers, n / 2 - 1, rng);
    let upper = select_nth(&mut numbers, n / 2, rng);
    round_default((lower + upper) / 2.0)
}

/// Computes the mode of the extracted values.
///
/// Values are grouped by exact (bit-for-bit) equality. Every distinct value
/// whose frequency equals the maximum observed frequency is returned, sorted
/// ascending with no duplicates. If every value is unique, every value is
/// returned. An empty extracted sequence yields an empty vec.
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
/// assert_eq!(fieldstats::mode(&values, None).unwrap(), vec![20.0]);
///
/// let bimodal = json!([1, 1, 2, 2, 3]);
/// assert_eq!(fieldstats::mode(&bimodal, None).unwrap(), vec![1.0, 2.0]);
/// ```
pub fn mode(values: &Value, field: Option<&str>) -> Result<Vec<f64>, StatsError> {
    let numbers = extract_numbers(values, field)?;

    let mut frequencies: HashMap<u64, usize> = HashMap::new();
    let mut max_frequency = 0;
    for number in numbers {
        let count = frequencies.entry(number.to_bits()).or_insert(0);
        *count += 1;
        max_frequency = max_frequency.max(*count);
    }

    let mut modes: Vec<f64> = frequencies
        .into_iter()
        .filter(|&(_, count)| count == max_frequency)
        .map(|(bits, _)| f64::from_bits(bits))
        .collect();
    modes.sort_by(f64::total_cmp);
    Ok(modes)
}
