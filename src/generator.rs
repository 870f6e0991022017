//! Tick orchestration
//!
//! One tick runs the selector and the synthesizer to produce a sample; the
//! forever loop persists each sample and carries the chosen activity into
//! the next tick as an explicit loop-local value.

use crate::circadian;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::selector;
use crate::signals;
use crate::sink::EventSink;
use crate::types::{Activity, Sample, UserProfile};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// Previous-activity seed for the very first tick
pub const INITIAL_ACTIVITY: Activity = Activity::Rest;

/// Stateless tick producer plus the steady-state loop
pub struct Generator {
    profile: UserProfile,
    interval_seconds: u64,
}

impl Generator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            profile: config.profile,
            interval_seconds: config.interval_seconds,
        }
    }

    /// Produce one sample for the given instant.
    ///
    /// Selector then synthesizer; the caller threads `prev` from the
    /// previous tick's result.
    pub fn tick(
        &self,
        rng: &mut impl Rng,
        ts: DateTime<Utc>,
        hour: f64,
        prev: Activity,
    ) -> Sample {
        let activity = selector::select_activity(rng, hour, prev);
        let heart_rate = signals::heart_rate(rng, activity, hour);
        let steps = signals::steps(rng, activity, self.interval_seconds);
        let calories = signals::calories(
            rng,
            activity,
            &self.profile,
            self.interval_seconds,
            heart_rate,
        );

        Sample {
            ts,
            activity,
            steps,
            heart_rate,
            calories,
        }
    }

    /// Run the steady-state loop: one persisted sample per interval, forever.
    ///
    /// # Errors
    ///
    /// Returns the first insert failure. Startup connection retries happen
    /// before this is called; once here, database errors are fatal.
    pub async fn run(&self, sink: &EventSink, rng: &mut impl Rng) -> Result<(), GeneratorError> {
        info!(
            interval_seconds = self.interval_seconds,
            weight_kg = self.profile.weight_kg,
            "generator started, writing one row per interval"
        );

        let mut prev = INITIAL_ACTIVITY;
        loop {
            let ts = Utc::now();
            let hour = circadian::local_hour();
            let sample = self.tick(rng, ts, hour, prev);

            sink.insert(&sample).await?;
            info!(
                "{} | {:<8} | steps={:4} | hr={:3} | kcal={:6.2}",
                sample.ts.to_rfc3339(),
                sample.activity,
                sample.steps,
                sample.heart_rate,
                sample.calories
            );

            prev = sample.activity;
            tokio::time::sleep(Duration::from_secs(self.interval_seconds)).await;
        }
    }
}
