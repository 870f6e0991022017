//! Deterministic time-of-day signals
//!
//! The simulation biases both activity choice and heart rate with simple
//! circadian curves: two Gaussian bumps of daytime activity (late morning and
//! early evening) attenuated by a night-suppression term, plus a sinusoidal
//! heart-rate component peaking in the early afternoon.

use chrono::{Local, Timelike};

/// Lower night boundary for the sleep/rest weight override
pub const NIGHT_END_HOUR: f64 = 6.0;

/// Upper night boundary for the sleep/rest weight override
pub const NIGHT_START_HOUR: f64 = 23.0;

/// Fractional local hour-of-day in [0, 24)
pub fn local_hour() -> f64 {
    let now = Local::now();
    f64::from(now.hour()) + f64::from(now.minute()) / 60.0 + f64::from(now.second()) / 3600.0
}

/// Whether the sleep-dominated night override applies
pub fn is_night(hour: f64) -> bool {
    hour < NIGHT_END_HOUR || hour >= NIGHT_START_HOUR
}

/// Daytime activity level in [0, 1].
///
/// Weighted sum of two Gaussian bumps centered at 11:00 (width 2.0 h) and
/// 18:00 (width 2.5 h), attenuated by a night-suppression term centered at
/// 03:00 (width 2.2 h), clamped to [0, 1].
pub fn activity_level(hour: f64) -> f64 {
    let late_morning = gaussian_bump(hour, 11.0, 2.0);
    let early_evening = gaussian_bump(hour, 18.0, 2.5);
    let night = 1.0 - gaussian_bump(hour, 3.0, 2.2);
    ((0.7 * late_morning + 0.9 * early_evening) * night).clamp(0.0, 1.0)
}

/// Circadian heart-rate component in bpm.
///
/// A sinusoid of amplitude 3 and 24-hour period whose peak trails 08:00 by a
/// quarter cycle (so the maximum lands at 14:00).
pub fn heart_rate_component(hour: f64) -> f64 {
    3.0 * ((hour - 8.0) * std::f64::consts::PI / 12.0).sin()
}

fn gaussian_bump(hour: f64, center: f64, width: f64) -> f64 {
    (-0.5 * ((hour - center) / width).powi(2)).exp()
}
