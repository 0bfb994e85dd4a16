//! Core traits and error types
//!
//! Statistic-producing operations are grouped under [`TemperatureStatistics`];
//! every fallible operation in the crate reports a [`SeriesError`].

use crate::statistics::TempSummaryStatistics;

/// Error returned by series construction, append and statistic queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// A statistic was requested on a series with no readings
    EmptySeries,
    /// A reading below absolute zero (or NaN) was offered
    ///
    /// `index` is the position of the first offending value within the
    /// rejected batch. The whole batch is rejected.
    InvalidReading { index: usize, value: f64 },
}

impl core::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SeriesError::EmptySeries => write!(f, "temperature series is empty"),
            SeriesError::InvalidReading { index, value } if value.is_nan() => {
                write!(
                    f,
                    "invalid reading at index {}: NaN is not a valid reading (must be >= {})",
                    index,
                    crate::series::ABSOLUTE_ZERO
                )
            }
            SeriesError::InvalidReading { index, value } => {
                write!(
                    f,
                    "invalid reading at index {}: {} is below absolute zero ({})",
                    index,
                    value,
                    crate::series::ABSOLUTE_ZERO
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeriesError {}

/// Descriptive statistics over a fully materialized set of readings
///
/// All methods fail with [`SeriesError::EmptySeries`] when there is nothing
/// to describe.
pub trait TemperatureStatistics {
    /// Arithmetic mean
    fn average(&self) -> Result<f64, SeriesError>;

    /// Population standard deviation (divides by `n`, not `n - 1`)
    ///
    /// Readings of positive infinity are accepted by a series, but any
    /// infinite reading makes the deviation NaN.
    fn deviation(&self) -> Result<f64, SeriesError>;

    /// Smallest reading
    fn min(&self) -> Result<f64, SeriesError>;

    /// Largest reading
    fn max(&self) -> Result<f64, SeriesError>;

    /// Snapshot of average, deviation, min and max
    ///
    /// The snapshot is a plain value and does not follow later changes to
    /// the source.
    fn summary_statistics(&self) -> Result<TempSummaryStatistics, SeriesError> {
        Ok(TempSummaryStatistics::new(
            self.average()?,
            self.deviation()?,
            self.min()?,
            self.max()?,
        ))
    }
}
