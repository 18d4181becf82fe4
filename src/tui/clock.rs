//! Fixed-step update clock and frame statistics.

use std::time::{Duration, Instant};

use tracing::instrument;

use crate::config::ConfigError;

/// Accumulates wall-clock time and converts it into whole update ticks.
///
/// Leftover time stays in the accumulator (the "lag") until it adds up to
/// another tick, so the update rate is independent of how often the loop
/// spins.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    lag: Duration,
}

impl FixedStep {
    /// Creates a clock running at `rate_hz` ticks per second.
    ///
    /// Fails when the step does not fit a `Duration` or rounds to zero.
    #[instrument]
    pub fn from_rate(rate_hz: f64) -> Result<Self, ConfigError> {
        let step = Duration::try_from_secs_f64(1.0 / rate_hz)
            .map_err(|e| ConfigError::new(format!("Invalid tick rate {}: {}", rate_hz, e)))?;
        if step.is_zero() {
            return Err(ConfigError::new(format!(
                "Tick rate {} is too fast to time",
                rate_hz
            )));
        }
        Ok(Self {
            step,
            lag: Duration::ZERO,
        })
    }

    /// Adds `elapsed` to the accumulator and returns how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.lag += elapsed;
        let mut ticks = 0;
        while self.lag >= self.step {
            self.lag -= self.step;
            ticks += 1;
        }
        ticks
    }

    /// Duration of one tick.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time accumulated towards the next tick.
    pub fn lag(&self) -> Duration {
        self.lag
    }

    /// Time left until the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        self.step.saturating_sub(self.lag)
    }
}

/// Timing figures shown in the stats overlay.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    last_render: Option<Instant>,
    render_interval: Duration,
}

impl FrameStats {
    /// Records that a frame was drawn at `now`.
    pub fn record_render(&mut self, now: Instant) {
        if let Some(prev) = self.last_render {
            self.render_interval = now.saturating_duration_since(prev);
        }
        self.last_render = Some(now);
    }

    /// Frames drawn per second, judged from the last two frames.
    pub fn render_rate(&self) -> f64 {
        rate(self.render_interval)
    }
}

/// Converts an interval into a per-second rate; zero for an empty interval.
pub fn rate(interval: Duration) -> f64 {
    let secs = interval.as_secs_f64();
    if secs > 0.0 { 1.0 / secs } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_whole_ticks() {
        let mut clock = FixedStep::from_rate(100.0).unwrap();
        assert_eq!(clock.advance(Duration::from_millis(5)), 0);
        assert_eq!(clock.advance(Duration::from_millis(5)), 1);
        assert_eq!(clock.advance(Duration::from_millis(35)), 3);
        assert_eq!(clock.lag(), Duration::from_millis(5));
    }

    #[test]
    fn test_until_next_tick() {
        let mut clock = FixedStep::from_rate(10.0).unwrap();
        clock.advance(Duration::from_millis(30));
        assert_eq!(clock.until_next_tick(), Duration::from_millis(70));
    }

    #[test]
    fn test_no_time_no_ticks() {
        let mut clock = FixedStep::from_rate(240.0).unwrap();
        assert_eq!(clock.advance(Duration::ZERO), 0);
        assert_eq!(clock.until_next_tick(), clock.step());
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        // Too fast: the step rounds down to zero nanoseconds.
        assert!(FixedStep::from_rate(1e10).is_err());
        // Too slow: the step overflows a Duration.
        assert!(FixedStep::from_rate(1e-30).is_err());
        assert!(FixedStep::from_rate(0.0).is_err());
        assert!(FixedStep::from_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_render_rate() {
        let mut stats = FrameStats::default();
        let start = Instant::now();
        assert_eq!(stats.render_rate(), 0.0);
        stats.record_render(start);
        stats.record_render(start + Duration::from_millis(20));
        assert!((stats.render_rate() - 50.0).abs() < 1e-9);
    }
}
