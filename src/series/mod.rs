//! Growable temperature series
//!
//! This module provides [`TemperatureSeries`], an owned, insertion-ordered
//! sequence of readings in degrees Celsius. Every reading is checked against
//! [`ABSOLUTE_ZERO`] when it enters the series.
//!
//! # Example
//!
//! ```
//! use tempseries::series::TemperatureSeries;
//! use tempseries::traits::TemperatureStatistics;
//!
//! let mut series = TemperatureSeries::from_readings(&[1.0, 2.0]).unwrap();
//!
//! let count = series.add_temps(&[3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(count, 5);
//! assert_eq!(series.max().unwrap(), 5.0);
//!
//! // A batch with one bad reading is rejected as a whole
//! assert!(series.add_temps(&[6.0, -300.0]).is_err());
//! assert_eq!(series.len(), 5);
//! ```

mod temperature;

pub use temperature::{is_valid_reading, TemperatureSeries, ABSOLUTE_ZERO};
