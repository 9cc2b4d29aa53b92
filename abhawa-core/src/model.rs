use serde::{Deserialize, Serialize};

/// Canonical condition category attached to every snapshot.
///
/// This is a symbolic tag only; mapping it to an actual glyph is the
/// presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    Rain,
    Cloud,
    Clear,
    PartlyCloudy,
}

impl IconTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconTag::Rain => "rain",
            IconTag::Cloud => "cloud",
            IconTag::Clear => "clear",
            IconTag::PartlyCloudy => "partly-cloudy",
        }
    }
}

impl std::fmt::Display for IconTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the normalized, bilingual forecast panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub day: String,
    pub day_localized: String,
    pub temperature_c: i32,
    pub condition: String,
    pub condition_localized: String,
    pub icon: IconTag,
    pub humidity_pct: u8,
}

/// Current-conditions reading as extracted from the provider response.
#[derive(Debug, Clone)]
pub struct CurrentReading {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition: String,
    pub utc_offset_secs: i32,
}

/// One raw forecast period; the provider reports one every three hours.
#[derive(Debug, Clone)]
pub struct ForecastPeriod {
    pub timestamp: i64,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition: String,
}

/// The full forecast payload after extraction, still unaggregated.
#[derive(Debug, Clone)]
pub struct ForecastReadings {
    pub utc_offset_secs: i32,
    pub periods: Vec<ForecastPeriod>,
}

/// Round a provider temperature to whole degrees, halves away from zero.
pub fn round_temperature(celsius: f64) -> i32 {
    celsius.round() as i32
}
