use chrono::{FixedOffset, Offset, Utc};
use tracing::warn;

use crate::{
    aggregate::select_daily,
    classify::classify_condition,
    error::AcquireError,
    fallback::fallback_forecast,
    localize::{TODAY_NAMES, day_names, localize_condition},
    model::{CurrentReading, ForecastPeriod, WeatherSnapshot, round_temperature},
    provider::WeatherProvider,
};

/// Orchestrates the two provider fetches and enforces the
/// all-or-nothing fallback contract.
///
/// Every call builds its sequence from scratch; nothing is cached or
/// shared between callers.
#[derive(Debug)]
pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetch and normalize the forecast panel for `location`.
    ///
    /// Always returns a complete sequence: the live one when both
    /// provider calls succeed, the static fallback otherwise. The
    /// failure reason is logged and never surfaces to the caller.
    pub async fn acquire(&self, location: &str) -> Vec<WeatherSnapshot> {
        match self.acquire_live(location).await {
            Ok(snapshots) => snapshots,
            Err(err) => {
                warn!(location, error = %err, "weather acquisition failed, serving fallback forecast");
                fallback_forecast()
            }
        }
    }

    async fn acquire_live(&self, location: &str) -> Result<Vec<WeatherSnapshot>, AcquireError> {
        // The two fetches have no data dependency; join them.
        let (current, forecast) = tokio::try_join!(
            self.provider.current(location),
            self.provider.forecast(location)
        )?;

        let offset = location_offset(forecast.utc_offset_secs);

        let mut snapshots = Vec::with_capacity(7);
        snapshots.push(today_snapshot(&current));
        for period in select_daily(&forecast.periods, offset) {
            snapshots.push(daily_snapshot(period, offset));
        }

        Ok(snapshots)
    }
}

fn location_offset(utc_offset_secs: i32) -> FixedOffset {
    FixedOffset::east_opt(utc_offset_secs).unwrap_or_else(|| Utc.fix())
}

fn today_snapshot(reading: &CurrentReading) -> WeatherSnapshot {
    let (day, day_localized) = TODAY_NAMES;

    WeatherSnapshot {
        day: day.to_string(),
        day_localized: day_localized.to_string(),
        temperature_c: round_temperature(reading.temperature_c),
        condition: reading.condition.clone(),
        condition_localized: localize_condition(&reading.condition).to_string(),
        icon: classify_condition(&reading.condition),
        humidity_pct: reading.humidity_pct,
    }
}

fn daily_snapshot(period: &ForecastPeriod, offset: FixedOffset) -> WeatherSnapshot {
    let (day, day_localized) = day_names(period.timestamp, offset);

    WeatherSnapshot {
        day: day.to_string(),
        day_localized: day_localized.to_string(),
        temperature_c: round_temperature(period.temperature_c),
        condition: period.condition.clone(),
        condition_localized: localize_condition(&period.condition).to_string(),
        icon: classify_condition(&period.condition),
        humidity_pct: period.humidity_pct,
    }
}
