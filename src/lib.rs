//! # Tempseries
//!
//! In-memory temperature series with descriptive statistics, filtering and sorting.
//!
//! A [`TemperatureSeries`] owns an insertion-ordered sequence of readings in
//! degrees Celsius. Readings are validated against absolute zero on the way
//! in, batches are appended all-or-nothing, and statistics are computed over
//! the fully materialized sequence.
//!
//! ## Features
//!
//! - **Statistics**: average, population standard deviation, min, max and a
//!   combined [`TempSummaryStatistics`] snapshot
//! - **Closest-value search**: reading closest to zero or to any target
//! - **Filters**: below a threshold, at or above a threshold, half-open ranges
//! - **Sorting**: ascending copy without touching the series
//! - **Atomic appends**: a batch with one bad reading changes nothing
//!
//! ## Quick Start
//!
//! ```rust
//! use tempseries::prelude::*;
//!
//! let mut series = TemperatureSeries::from_readings(&[3.0, -5.0, 1.0, 5.0]).unwrap();
//!
//! println!("Average: {}", series.average().unwrap());
//! println!("Closest to zero: {}", series.find_temp_closest_to_zero().unwrap());
//!
//! series.add_temps(&[12.5, 14.0]).unwrap();
//! assert_eq!(series.len(), 6);
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use tempseries::prelude::*;
//!
//! let mut series = TemperatureSeries::new();
//! assert_eq!(series.average(), Err(SeriesError::EmptySeries));
//!
//! let err = series.add_temps(&[1.0, -280.0]).unwrap_err();
//! assert!(matches!(err, SeriesError::InvalidReading { index: 1, .. }));
//! assert!(series.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; `no_std` + `alloc` otherwise
//! - `serde`: Enable serialization
//! - `full`: Enable everything

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

// Core traits always available
pub mod traits;

pub mod series;
pub mod statistics;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::series::{TemperatureSeries, ABSOLUTE_ZERO};
    pub use crate::statistics::TempSummaryStatistics;
}

pub use series::TemperatureSeries;
pub use statistics::TempSummaryStatistics;
pub use traits::SeriesError;
