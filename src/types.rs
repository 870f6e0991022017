//! Core types for the pulsegen simulation
//!
//! This module defines the data that flows through each tick: the immutable
//! user profile, the closed activity set with its physiological constants,
//! and the sample that gets persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable per-process user profile, sourced from configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self { weight_kg: 72.0 }
    }
}

/// Activity label chosen on each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Sleep,
    Rest,
    Walk,
    Run,
    Bike,
    Strength,
}

/// All activities, in selection order. The last entry doubles as the
/// floating-point fallback of the cumulative draw.
pub const ACTIVITIES: [Activity; 6] = [
    Activity::Sleep,
    Activity::Rest,
    Activity::Walk,
    Activity::Run,
    Activity::Bike,
    Activity::Strength,
];

impl Activity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Sleep => "sleep",
            Activity::Rest => "rest",
            Activity::Walk => "walk",
            Activity::Run => "run",
            Activity::Bike => "bike",
            Activity::Strength => "strength",
        }
    }

    /// Metabolic equivalent of the activity (1.0 = resting metabolism)
    pub fn met(&self) -> f64 {
        match self {
            Activity::Sleep => 0.95,
            Activity::Rest => 1.3,
            Activity::Walk => 3.3,
            Activity::Run => 8.0,
            Activity::Bike => 6.8,
            Activity::Strength => 5.0,
        }
    }

    /// Cadence range in steps per minute (min, max). A zero max means the
    /// activity produces no steps at all.
    pub fn step_rate_per_min(&self) -> (f64, f64) {
        match self {
            Activity::Sleep => (0.0, 0.0),
            Activity::Rest => (0.0, 10.0),
            Activity::Walk => (80.0, 130.0),
            Activity::Run => (150.0, 190.0),
            Activity::Bike => (0.0, 15.0),
            Activity::Strength => (0.0, 30.0),
        }
    }

    /// Additive heart-rate offset in bpm over the resting baseline
    pub fn heart_rate_offset(&self) -> f64 {
        match self {
            Activity::Sleep => -10.0,
            Activity::Rest => 0.0,
            Activity::Walk => 25.0,
            Activity::Run => 70.0,
            Activity::Bike => 55.0,
            Activity::Strength => 45.0,
        }
    }

    /// Standard deviation of the heart-rate noise term in bpm
    pub fn heart_rate_noise_sd(&self) -> f64 {
        match self {
            Activity::Sleep => 2.0,
            Activity::Rest => 4.0,
            Activity::Walk => 6.0,
            Activity::Run => 10.0,
            Activity::Bike => 9.0,
            Activity::Strength => 8.0,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fabricated reading, created once per tick and persisted immediately
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Timestamp of the tick (UTC)
    pub ts: DateTime<Utc>,
    /// Activity chosen for this tick
    pub activity: Activity,
    /// Step count for the elapsed interval
    pub steps: u32,
    /// Heart rate in bpm, always within [35, 205]
    pub heart_rate: i32,
    /// Calories burned over the interval, non-negative, 2 decimal places
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_activity_serde_round_trip() {
        for activity in ACTIVITIES {
            let json = serde_json::to_string(&activity).unwrap();
            assert_eq!(json, format!("\"{}\"", activity.as_str()));
            let back: Activity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, activity);
        }
    }

    #[test]
    fn test_step_rate_tables_are_ordered() {
        for activity in ACTIVITIES {
            let (lo, hi) = activity.step_rate_per_min();
            assert!(lo >= 0.0);
            assert!(hi >= lo, "{} has inverted cadence range", activity);
        }
    }

    #[test]
    fn test_sleep_produces_no_steps() {
        assert_eq!(Activity::Sleep.step_rate_per_min(), (0.0, 0.0));
    }

    #[test]
    fn test_met_values_are_positive() {
        for activity in ACTIVITIES {
            assert!(activity.met() > 0.0);
        }
    }
}
