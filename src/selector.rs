//! Activity selection
//!
//! Maps time-of-day and the previous tick's activity to a probabilistically
//! chosen activity label. Weights are an affine function of the circadian
//! activity level, with a night override favoring sleep and a stickiness
//! bonus on the previous activity for temporal autocorrelation.

use crate::circadian;
use crate::types::{Activity, ACTIVITIES};
use rand::Rng;

/// Multiplier applied to the previous activity's weight
pub const STICKINESS: f64 = 2.2;

/// Raw (unnormalized) selection weights for every activity at the given hour.
///
/// Night hours override the sleep/rest weights to strongly favor sleep; the
/// remaining weights scale with the daytime activity level.
pub fn activity_weights(hour: f64, prev: Activity) -> [(Activity, f64); 6] {
    let day = circadian::activity_level(hour);
    let night = circadian::is_night(hour);

    let mut weights = [
        (Activity::Sleep, if night { 0.85 } else { 0.05 }),
        (Activity::Rest, if night { 0.15 } else { 0.55 }),
        (Activity::Walk, 0.35 + 1.6 * day),
        (Activity::Run, 0.05 + 0.35 * day),
        (Activity::Bike, 0.04 + 0.25 * day),
        (Activity::Strength, 0.04 + 0.20 * day),
    ];

    for (activity, weight) in &mut weights {
        if *activity == prev {
            *weight *= STICKINESS;
        }
    }

    weights
}

/// Choose the activity for the current tick.
///
/// Normalizes the weights to a distribution and selects via cumulative
/// threshold on a single uniform draw. Total: always returns a valid label,
/// falling back to the last activity on floating-point edge cases.
pub fn select_activity(rng: &mut impl Rng, hour: f64, prev: Activity) -> Activity {
    let weights = activity_weights(hour, prev);
    let total: f64 = weights.iter().map(|(_, w)| w).sum();

    let draw: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (activity, weight) in weights {
        cumulative += weight / total;
        if draw <= cumulative {
            return activity;
        }
    }
    ACTIVITIES[ACTIVITIES.len() - 1]
}
