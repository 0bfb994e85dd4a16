//! Immutable summary snapshot (average, deviation, min, max)

/// Snapshot of the four headline statistics of a series
///
/// Computed once by
/// [`summary_statistics`](crate::traits::TemperatureStatistics::summary_statistics);
/// it is a plain value and is not updated when the source series changes.
///
/// # Example
///
/// ```
/// use tempseries::series::TemperatureSeries;
/// use tempseries::traits::TemperatureStatistics;
///
/// let mut series = TemperatureSeries::from_readings(&[3.0, -5.0, 1.0, 5.0]).unwrap();
/// let stats = series.summary_statistics().unwrap();
///
/// series.add_temps(&[100.0]).unwrap();
///
/// // The snapshot still describes the original four readings
/// assert!((stats.avg_temp() - 1.0).abs() < 1e-9);
/// assert!((stats.dev_temp() - 14f64.sqrt()).abs() < 1e-9);
/// assert_eq!(stats.min_temp(), -5.0);
/// assert_eq!(stats.max_temp(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempSummaryStatistics {
    avg_temp: f64,
    dev_temp: f64,
    min_temp: f64,
    max_temp: f64,
}

impl TempSummaryStatistics {
    /// Create a snapshot from precomputed values
    pub fn new(avg_temp: f64, dev_temp: f64, min_temp: f64, max_temp: f64) -> Self {
        Self {
            avg_temp,
            dev_temp,
            min_temp,
            max_temp,
        }
    }

    /// Arithmetic mean
    pub fn avg_temp(&self) -> f64 {
        self.avg_temp
    }

    /// Population standard deviation
    pub fn dev_temp(&self) -> f64 {
        self.dev_temp
    }

    /// Minimum reading
    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    /// Maximum reading
    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }
}

impl core::fmt::Display for TempSummaryStatistics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "avg={:.3} dev={:.3} min={:.3} max={:.3}",
            self.avg_temp, self.dev_temp, self.min_temp, self.max_temp
        )
    }
}
