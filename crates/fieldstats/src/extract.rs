//! Input validation and numeric extraction.
//!
//! Every calculator funnels its input through [`extract_numbers`] before
//! computing anything; no calculator re-implements validation.

use serde_json::Value;

use crate::StatsError;

/// Extracts a sequence of finite numbers from a JSON array.
///
/// With a field selector, each element is projected through
/// `element.get(field)` before validation; without one, elements are used
/// directly. Projected `null` values and missing fields are skipped and do
/// not count toward the length of the result. Any other non-numeric or
/// non-finite value aborts extraction immediately.
///
/// # Errors
///
/// * [`StatsError::InvalidInputKind`] - `input` is not an array
/// * [`StatsError::NonNumericValue`] - a projected element is not a finite
///   number; carries the offending index and value
///
/// # Examples
///
/// ```
/// use fieldstats::extract_numbers;
/// use serde_json::json;
///
/// let values = json!([1, null, 2.5]);
/// assert_eq!(extract_numbers(&values, None).unwrap(), vec![1.0, 2.5]);
///
/// let records = json!([{ "x": 3 }, { "y": 9 }, { "x": 7 }]);
/// assert_eq!(extract_numbers(&records, Some("x")).unwrap(), vec![3.0, 7.0]);
/// ```
pub fn extract_numbers(input: &Value, field: Option<&str>) -> Result<Vec<f64>, StatsError> {
    let Value::Array(elements) = input else {
        return Err(StatsError::InvalidInputKind);
    };

    let mut numbers = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let projected = match field {
            Some(name) => match element.get(name) {
                Some(value) => value,
                None => continue,
            },
            None => element,
        };
        if projected.is_null() {
            continue;
        }
        // `as_f64` also rejects numbers outside the finite f64 range.
        match projected.as_f64().filter(|number| number.is_finite()) {
            Some(number) => numbers.push(number),
            None => {
                return Err(StatsError::NonNumericValue {
                    index,
                    value: projected.clone(),
                });
            }
        }
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_non_array_input() {
        assert!(matches!(
            extract_numbers(&json!(42), None),
            Err(StatsError::InvalidInputKind)
        ));
        assert!(matches!(
            extract_numbers(&json!({ "a": 1 }), None),
            Err(StatsError::InvalidInputKind)
        ));
    }

    #[test]
    fn extracts_raw_numbers_in_order() {
        let values = json!([3, 1.5, -2, 0]);
        assert_eq!(
            extract_numbers(&values, None).unwrap(),
            vec![3.0, 1.5, -2.0, 0.0]
        );
    }

    #[test]
    fn skips_nulls_without_failing() {
        let values = json!([1, null, 3]);
        assert_eq!(extract_numbers(&values, None).unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn fails_fast_on_non_numeric_value() {
        let values = json!([1, "two", 3]);
        let err = extract_numbers(&values, None).unwrap_err();
        match err {
            StatsError::NonNumericValue { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, json!("two"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_at_offending_position_is_skipped_instead() {
        let values = json!([1, null, 3]);
        assert_eq!(extract_numbers(&values, None).unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn projects_through_field_selector() {
        let records = json!([{ "score": 85 }, { "score": 92 }]);
        assert_eq!(
            extract_numbers(&records, Some("score")).unwrap(),
            vec![85.0, 92.0]
        );
    }

    #[test]
    fn missing_field_is_skipped() {
        let records = json!([{ "score": 85 }, { "other": 1 }, { "score": 92 }]);
        assert_eq!(
            extract_numbers(&records, Some("score")).unwrap(),
            vec![85.0, 92.0]
        );
    }

    #[test]
    fn non_numeric_field_value_fails_with_index() {
        let records = json!([{ "score": 85 }, { "score": "n/a" }]);
        let err = extract_numbers(&records, Some("score")).unwrap_err();
        assert!(matches!(
            err,
            StatsError::NonNumericValue { index: 1, .. }
        ));
    }

    #[test]
    fn empty_array_yields_empty_sequence() {
        assert_eq!(extract_numbers(&json!([]), None).unwrap(), Vec::<f64>::new());
        let all_null = json!([null, null]);
        assert_eq!(extract_numbers(&all_null, None).unwrap(), Vec::<f64>::new());
    }
}
