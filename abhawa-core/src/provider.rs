use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::AcquireError,
    model::{CurrentReading, ForecastReadings},
};

pub mod openweather;

/// Read-only view of the upstream weather provider.
///
/// Both fetches are keyed by a country-qualified location name and
/// report metric units. Implementations do not retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current conditions for `location`.
    async fn current(&self, location: &str) -> Result<CurrentReading, AcquireError>;

    /// Fetch the ordered multi-period forecast for `location`.
    async fn forecast(&self, location: &str) -> Result<ForecastReadings, AcquireError>;
}
