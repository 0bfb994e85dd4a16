//! Statistical summaries over a temperature series
//!
//! # Example
//!
//! ```
//! use tempseries::series::TemperatureSeries;
//! use tempseries::traits::TemperatureStatistics;
//!
//! let series = TemperatureSeries::from_readings(&[3.0, -5.0, 1.0, 5.0]).unwrap();
//! let stats = series.summary_statistics().unwrap();
//!
//! println!("Average: {}", stats.avg_temp());
//! println!("Deviation: {}", stats.dev_temp());
//! println!("Min: {}", stats.min_temp());
//! println!("Max: {}", stats.max_temp());
//! ```

mod summary;

pub use summary::TempSummaryStatistics;
