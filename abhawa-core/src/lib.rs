//! Core library for the `abhawa` weather panel.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather acquisition client
//! - Normalization: condition classification, Bangla localization,
//!   daily aggregation
//! - The all-or-nothing fallback contract
//!
//! It is used by `abhawa-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod fallback;
pub mod localize;
pub mod model;
pub mod provider;
pub mod service;

pub use config::Config;
pub use error::AcquireError;
pub use fallback::fallback_forecast;
pub use model::{IconTag, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use service::WeatherService;
