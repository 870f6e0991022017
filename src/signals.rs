//! Signal synthesis
//!
//! Three independent sub-computations turn the chosen activity, the elapsed
//! interval, the time-of-day, and the user profile into believable biometric
//! signals: heart rate, step count, and calorie burn. All inputs are in-range
//! by construction, so every function here is total.

use crate::circadian;
use crate::types::{Activity, UserProfile};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Resting heart-rate baseline in bpm
const HR_BASELINE: i32 = 62;

/// Hard physiological bounds on the emitted heart rate
const HR_MIN: f64 = 35.0;
const HR_MAX: f64 = 205.0;

/// Probability that a walk/strength interval contains an idle pause
const IDLE_PAUSE_PROBABILITY: f64 = 0.10;

/// Synthesize a heart-rate reading in bpm, always within [35, 205].
///
/// Baseline with uniform jitter, plus the circadian sinusoid, plus the
/// activity's additive offset, plus activity-dependent Gaussian noise.
pub fn heart_rate(rng: &mut impl Rng, activity: Activity, hour: f64) -> i32 {
    let base = f64::from(HR_BASELINE + rng.gen_range(-4..=8));
    let circ = circadian::heart_rate_component(hour);
    let noise = gauss(rng, 0.0, activity.heart_rate_noise_sd());
    let hr = base + circ + activity.heart_rate_offset() + noise;
    hr.clamp(HR_MIN, HR_MAX).round() as i32
}

/// Synthesize a step count for the elapsed interval.
///
/// Cadence is drawn uniformly from the activity's steps/minute range; walk
/// and strength intervals occasionally collapse to an idle pause. The actual
/// count is a Poisson-like Gaussian draw around the expected count, floored
/// at zero.
pub fn steps(rng: &mut impl Rng, activity: Activity, interval_seconds: u64) -> u32 {
    let (lo, hi) = activity.step_rate_per_min();
    if hi <= 0.0 {
        return 0;
    }

    let mut cadence = rng.gen_range(lo..=hi);
    if matches!(activity, Activity::Walk | Activity::Strength)
        && rng.gen::<f64>() < IDLE_PAUSE_PROBABILITY
    {
        cadence *= rng.gen_range(0.0..=0.30);
    }

    let expected = (cadence / 60.0) * interval_seconds as f64;
    let noisy = gauss(rng, expected, expected.sqrt().max(1.0));
    noisy.round().max(0.0) as u32
}

/// Synthesize the calorie burn for the elapsed interval.
///
/// Standard MET formula scaled by a heart-rate factor and a small
/// multiplicative jitter, floored at zero and rounded to 2 decimal places.
pub fn calories(
    rng: &mut impl Rng,
    activity: Activity,
    profile: &UserProfile,
    interval_seconds: u64,
    heart_rate: i32,
) -> f64 {
    let minutes = interval_seconds as f64 / 60.0;
    let mut kcal = activity.met() * 3.5 * profile.weight_kg / 200.0 * minutes;

    let hr_factor = 1.0 + ((f64::from(heart_rate) - 70.0) / 200.0).clamp(-0.1, 0.35);
    kcal *= hr_factor;
    kcal *= rng.gen_range(0.92..=1.08);

    (kcal.max(0.0) * 100.0).round() / 100.0
}

/// Gaussian draw; degenerate standard deviations fall back to the mean
fn gauss(rng: &mut impl Rng, mean: f64, sd: f64) -> f64 {
    match Normal::new(mean, sd) {
        Ok(dist) => dist.sample(rng),
        Err(_) => mean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ACTIVITIES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_heart_rate_always_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for activity in ACTIVITIES {
            for i in 0..2000 {
                let hour = f64::from(i % 240) / 10.0;
                let hr = heart_rate(&mut rng, activity, hour);
                assert!((35..=205).contains(&hr), "hr {} for {}", hr, activity);
            }
        }
    }

    #[test]
    fn test_heart_rate_tracks_activity_intensity() {
        let mut rng = StdRng::seed_from_u64(2);
        let mean = |rng: &mut StdRng, activity| {
            (0..500)
                .map(|_| f64::from(heart_rate(rng, activity, 12.0)))
                .sum::<f64>()
                / 500.0
        };
        let sleeping = mean(&mut rng, Activity::Sleep);
        let running = mean(&mut rng, Activity::Run);
        assert!(running > sleeping + 50.0, "run {} vs sleep {}", running, sleeping);
    }

    #[test]
    fn test_sleep_never_produces_steps() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert_eq!(steps(&mut rng, Activity::Sleep, 10), 0);
        }
    }

    #[test]
    fn test_steps_are_plausible_for_a_walk() {
        let mut rng = StdRng::seed_from_u64(4);
        // 80-130 steps/min over 60 s, minus occasional idle pauses.
        for _ in 0..1000 {
            let count = steps(&mut rng, Activity::Walk, 60);
            assert!(count <= 200, "implausible walk step count {}", count);
        }
    }

    #[test]
    fn test_run_steps_scale_with_interval() {
        let mut rng = StdRng::seed_from_u64(5);
        let mean = |rng: &mut StdRng, interval| {
            (0..500)
                .map(|_| f64::from(steps(rng, Activity::Run, interval)))
                .sum::<f64>()
                / 500.0
        };
        let short = mean(&mut rng, 10);
        let long = mean(&mut rng, 60);
        assert!(long > 4.0 * short, "60s mean {} vs 10s mean {}", long, short);
    }

    #[test]
    fn test_calories_are_non_negative_and_rounded() {
        let mut rng = StdRng::seed_from_u64(6);
        let profile = UserProfile { weight_kg: 72.0 };
        for activity in ACTIVITIES {
            for hr in [35, 70, 150, 205] {
                let kcal = calories(&mut rng, activity, &profile, 10, hr);
                assert!(kcal >= 0.0);
                let cents = kcal * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6, "kcal {} not 2dp", kcal);
            }
        }
    }

    #[test]
    fn test_forced_run_calorie_envelope() {
        // interval=10s, weight=70kg, activity=run, hr=150:
        // base = 8.0 * 3.5 * 70/200 * (10/60) = 1.6333 kcal, then scaled by
        // hr_factor 1.35 and jitter in [0.92, 1.08].
        let mut rng = StdRng::seed_from_u64(7);
        let profile = UserProfile { weight_kg: 70.0 };
        let base = 8.0 * 3.5 * 70.0 / 200.0 * (10.0 / 60.0);
        let lo = base * 1.35 * 0.92 - 0.01;
        let hi = base * 1.35 * 1.08 + 0.01;
        for _ in 0..1000 {
            let kcal = calories(&mut rng, Activity::Run, &profile, 10, 150);
            assert!(kcal >= lo && kcal <= hi, "kcal {} outside [{}, {}]", kcal, lo, hi);
        }
    }

    #[test]
    fn test_gauss_falls_back_on_degenerate_sd() {
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(gauss(&mut rng, 5.0, -1.0), 5.0);
    }
}
