//! Temperature series storage, queries and filters
//!
//! Readings live in a single `Vec<f64>`. Its length is the number of valid
//! entries; its capacity may run ahead of that and is managed explicitly so
//! repeated appends stay amortized linear.

use crate::math;
use crate::traits::{SeriesError, TemperatureStatistics};
use log::{debug, trace};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Lowest accepted reading, in degrees Celsius
pub const ABSOLUTE_ZERO: f64 = -273.0;

/// Check whether a single value may be stored in a series
///
/// NaN is never valid.
#[inline]
pub fn is_valid_reading(value: f64) -> bool {
    value >= ABSOLUTE_ZERO
}

/// Reject the whole batch if any value is invalid
fn validate(readings: &[f64]) -> Result<(), SeriesError> {
    match readings.iter().position(|&value| !is_valid_reading(value)) {
        Some(index) => {
            let value = readings[index];
            debug!(
                "rejecting batch of {} readings: index {} holds {}",
                readings.len(),
                index,
                value
            );
            Err(SeriesError::InvalidReading { index, value })
        }
        None => Ok(()),
    }
}

/// Insertion-ordered series of temperature readings
///
/// Construction and [`add_temps`](Self::add_temps) are all-or-nothing: when
/// any reading in the input is below [`ABSOLUTE_ZERO`], the call fails with
/// [`SeriesError::InvalidReading`] and the series is left as it was.
///
/// Statistics come from the [`TemperatureStatistics`] trait and fail with
/// [`SeriesError::EmptySeries`] on an empty series. Filters and sorting never
/// fail.
///
/// # Example
///
/// ```
/// use tempseries::series::TemperatureSeries;
/// use tempseries::traits::TemperatureStatistics;
///
/// let series = TemperatureSeries::from_readings(&[3.0, -5.0, 1.0, 5.0]).unwrap();
///
/// assert!((series.average().unwrap() - 1.0).abs() < 1e-9);
/// assert!((series.deviation().unwrap() - 14f64.sqrt()).abs() < 1e-9);
/// assert_eq!(series.find_temps_less_than(2.0), vec![-5.0, 1.0]);
/// assert_eq!(series.sort_temps(), vec![-5.0, 1.0, 3.0, 5.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemperatureSeries {
    values: Vec<f64>,
}

impl TemperatureSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty series with room for `capacity` readings
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an initial set of readings
    ///
    /// The input is copied; later changes to `readings` do not reach the
    /// series.
    pub fn from_readings(readings: &[f64]) -> Result<Self, SeriesError> {
        validate(readings)?;
        Ok(Self {
            values: readings.to_vec(),
        })
    }

    /// Number of readings in the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series holds no readings
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of readings the backing storage can hold without growing
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Readings in insertion order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over readings in insertion order
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Append a batch of readings, returning the new count
    ///
    /// The whole batch is validated before anything is stored. An empty
    /// batch is a no-op.
    pub fn add_temps(&mut self, readings: &[f64]) -> Result<usize, SeriesError> {
        if readings.is_empty() {
            return Ok(self.values.len());
        }
        validate(readings)?;

        self.grow_for(self.values.len() + readings.len());
        self.values.extend_from_slice(readings);
        Ok(self.values.len())
    }

    /// Grow storage to hold at least `required` readings
    ///
    /// New capacity is `max(capacity * 2, required)`, and at least 1.
    fn grow_for(&mut self, required: usize) {
        let capacity = self.values.capacity();
        if capacity >= required {
            return;
        }

        let new_capacity = capacity.saturating_mul(2).max(1).max(required);
        trace!("growing series storage: {} -> {}", capacity, new_capacity);
        self.values.reserve_exact(new_capacity - self.values.len());
    }

    /// Discard every reading and release the backing storage
    pub fn reset(&mut self) {
        debug!("resetting series, discarding {} readings", self.values.len());
        self.values = Vec::new();
    }

    /// Reading closest to zero
    ///
    /// See [`find_temp_closest_to_value`](Self::find_temp_closest_to_value)
    /// for the scan order; this variant also compares the first reading
    /// against itself, so a tie between the first reading and a later, larger
    /// one resolves to the later one.
    ///
    /// ```
    /// use tempseries::series::TemperatureSeries;
    ///
    /// let series = TemperatureSeries::from_readings(&[-0.2, 0.2, 5.0]).unwrap();
    /// assert_eq!(series.find_temp_closest_to_zero().unwrap(), 0.2);
    /// ```
    pub fn find_temp_closest_to_zero(&self) -> Result<f64, SeriesError> {
        self.first_closer(0, 0.0)
    }

    /// Reading closest to `target`
    ///
    /// The first reading is the initial candidate. Scanning from the second
    /// reading on, the first one that is strictly closer, or equally close
    /// and larger, replaces it and ends the scan.
    pub fn find_temp_closest_to_value(&self, target: f64) -> Result<f64, SeriesError> {
        self.first_closer(1, target)
    }

    fn first_closer(&self, start: usize, target: f64) -> Result<f64, SeriesError> {
        let first = *self.values.first().ok_or(SeriesError::EmptySeries)?;
        let best_distance = math::abs(first - target);

        let replacement = self.values[start..].iter().copied().find(|&value| {
            let distance = math::abs(value - target);
            distance < best_distance || (distance == best_distance && value > first)
        });

        Ok(replacement.unwrap_or(first))
    }

    /// Readings strictly below `threshold`, in insertion order
    pub fn find_temps_less_than(&self, threshold: f64) -> Vec<f64> {
        self.filtered(|value| value < threshold)
    }

    /// Readings at or above `threshold`, in insertion order
    ///
    /// The lower bound is inclusive.
    pub fn find_temps_greater_than(&self, threshold: f64) -> Vec<f64> {
        self.filtered(|value| value >= threshold)
    }

    /// Readings in the half-open range `[low, high)`, in insertion order
    pub fn find_temps_in_range(&self, low: f64, high: f64) -> Vec<f64> {
        self.filtered(|value| low <= value && value < high)
    }

    fn filtered<F>(&self, keep: F) -> Vec<f64>
    where
        F: Fn(f64) -> bool,
    {
        self.values.iter().copied().filter(|&value| keep(value)).collect()
    }

    /// Ascending copy of the readings; the series itself is untouched
    pub fn sort_temps(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl TemperatureStatistics for TemperatureSeries {
    fn average(&self) -> Result<f64, SeriesError> {
        if self.values.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        let sum: f64 = self.values.iter().sum();
        Ok(sum / self.values.len() as f64)
    }

    fn deviation(&self) -> Result<f64, SeriesError> {
        let mean = self.average()?;
        let sum_sq: f64 = self
            .values
            .iter()
            .map(|&value| {
                let delta = value - mean;
                delta * delta
            })
            .sum();
        Ok(math::sqrt(sum_sq / self.values.len() as f64))
    }

    fn min(&self) -> Result<f64, SeriesError> {
        let (&first, rest) = self.values.split_first().ok_or(SeriesError::EmptySeries)?;
        Ok(rest
            .iter()
            .fold(first, |min, &value| if value < min { value } else { min }))
    }

    fn max(&self) -> Result<f64, SeriesError> {
        let (&first, rest) = self.values.split_first().ok_or(SeriesError::EmptySeries)?;
        Ok(rest
            .iter()
            .fold(first, |max, &value| if value > max { value } else { max }))
    }
}

impl TryFrom<&[f64]> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(readings: &[f64]) -> Result<Self, Self::Error> {
        Self::from_readings(readings)
    }
}

impl TryFrom<Vec<f64>> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(readings: Vec<f64>) -> Result<Self, Self::Error> {
        validate(&readings)?;
        Ok(Self { values: readings })
    }
}

impl<'a> IntoIterator for &'a TemperatureSeries {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TemperatureSeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("TemperatureSeries", 1)?;
        state.serialize_field("readings", self.as_slice())?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TemperatureSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct SeriesData {
            readings: Vec<f64>,
        }

        let data = SeriesData::deserialize(deserializer)?;
        TemperatureSeries::try_from(data.readings).map_err(serde::de::Error::custom)
    }
}
