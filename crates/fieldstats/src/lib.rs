//! Descriptive statistics over plain numbers or fields of records.
//!
//! This crate computes summary statistics for a JSON array of values. The
//! array may hold raw numbers, or objects from which a named field is
//! projected before the computation:
//!
//! - **Central tendency**: mean, median (hybrid sort/quickselect), mode
//! - **Spread**: range, variance, standard deviation, percentile
//! - **Combined report**: [`Summary`] bundling the common measures
//!
//! Every calculator shares one extraction pass ([`extract_numbers`]) that
//! validates the input up front: `null` values and missing fields are
//! skipped, anything else that is not a finite number aborts the call with
//! [`StatsError::NonNumericValue`]. Floating results are rounded to ten
//! decimal digits to suppress accumulation noise.
//!
//! # Modules
//!
//! - [`extract`]: Input validation and numeric extraction
//! - [`central`]: Mean, median, and mode
//! - [`spread`]: Range, variance, standard deviation, and percentile
//! - [`summary`]: Combined statistics report
//! - [`select`]: In-place order-statistic selection (quickselect)
//! - [`round`]: Fixed-precision rounding
//!
//! # Examples
//!
//! ## Statistics over raw numbers
//!
//! ```
//! use serde_json::json;
//!
//! let values = json!([10, 20, 20, 30, 50]);
//! assert_eq!(fieldstats::mean(&values, None).unwrap(), 26.0);
//! assert_eq!(fieldstats::median(&values, None).unwrap(), 20.0);
//! assert_eq!(fieldstats::mode(&values, None).unwrap(), vec![20.0]);
//! assert_eq!(fieldstats::range(&values, None).unwrap(), 40.0);
//! ```
//!
//! ## Statistics over a field of records
//!
//! ```
//! use serde_json::json;
//!
//! let records = json!([
//!     { "score": 85 },
//!     { "score": 92 },
//!     { "score": 78 },
//!     { "score": 92 },
//! ]);
//! assert_eq!(fieldstats::mean(&records, Some("score")).unwrap(), 86.75);
//! assert_eq!(fieldstats::mode(&records, Some("score")).unwrap(), vec![92.0]);
//! ```
//!
//! ## Sample vs. population variance
//!
//! ```
//! use fieldstats::VarianceOptions;
//! use serde_json::json;
//!
//! let values = json!([2, 4, 4, 4, 5, 5, 7, 9]);
//! let population = VarianceOptions { sample: false, ..VarianceOptions::default() };
//! assert_eq!(fieldstats::variance(&values, &population).unwrap(), 4.0);
//! assert_eq!(fieldstats::stdev(&values, &population).unwrap(), 2.0);
//! ```

pub use self::{
    central::{mean, median, median_with_rng, mode},
    extract::extract_numbers,
    select::select_nth,
    spread::{VarianceOptions, percentile, range, stdev, variance},
    summary::{Summary, summary},
};

pub mod central;
pub mod extract;
pub mod round;
pub mod select;
pub mod spread;
pub mod summary;

/// Errors raised by the calculators.
///
/// All errors are raised synchronously at the point of detection; no partial
/// result accompanies an error.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The input value is not an array.
    #[display("input is not an array")]
    InvalidInputKind,
    /// A projected element is not a finite number.
    #[display("value at index {index} is not a finite number: {value}")]
    NonNumericValue {
        /// Index of the offending element in the input array.
        index: usize,
        /// The offending value, as found after field projection.
        value: serde_json::Value,
    },
    /// The percentile argument lies outside `[0, 100]`.
    #[display("percentile must be within [0, 100], got {percentile}")]
    InvalidRange {
        /// The rejected percentile argument.
        percentile: f64,
    },
    /// Sample variance requested over fewer than two observations.
    #[display("sample variance requires at least two data points")]
    InsufficientData,
}
