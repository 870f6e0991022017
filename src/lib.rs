//! Pulsegen - Synthetic physiological telemetry generator
//!
//! Pulsegen fabricates a plausible activity/heart-rate/step/calorie reading
//! on a fixed interval and persists it to PostgreSQL, forever. Each tick runs
//! a layered stochastic model: time-of-day → activity choice → biometric
//! signals → one committed row.
//!
//! ## Modules
//!
//! - **Selector**: circadian-weighted activity choice with stickiness
//! - **Signals**: heart rate, steps, and calories for the chosen activity
//! - **Sink**: append-only Postgres persistence with startup retry

pub mod circadian;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod selector;
pub mod signals;
pub mod sink;
pub mod types;

pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::Generator;
pub use sink::EventSink;
pub use types::{Activity, Sample, UserProfile};

/// Pulsegen version reported at startup
pub const PULSEGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
