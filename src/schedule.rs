//! Fixed-cadence callbacks decoupled from the frame rate.
//!
//! The host advances a [`CadenceTimer`] with each frame's delta time and runs
//! the scheduled work whenever it reports elapsed periods.

use crate::error::{Error, Result};

/// Accumulates frame time and reports how many periods have elapsed.
///
/// The first [`advance`](Self::advance) always fires, matching a repeating
/// callback scheduled with no initial delay.
#[derive(Debug, Clone)]
pub struct CadenceTimer {
    interval: f32,
    accumulated_time: f32,
    started: bool,
}

impl CadenceTimer {
    /// Fails unless `interval` is a positive, finite number of seconds.
    pub fn new(interval: f32) -> Result<Self> {
        if !(interval > 0.0 && interval.is_finite()) {
            return Err(Error::InvalidInterval(interval));
        }
        Ok(Self {
            interval,
            accumulated_time: 0.0,
            started: false,
        })
    }

    /// Adds `delta_time` and returns the number of periods that elapsed.
    pub fn advance(&mut self, delta_time: f32) -> u32 {
        let mut fired = 0;

        if !self.started {
            self.started = true;
            fired += 1;
        }

        self.accumulated_time += delta_time;
        while self.accumulated_time >= self.interval {
            self.accumulated_time -= self.interval;
            fired += 1;
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_immediately() {
        let mut timer = CadenceTimer::new(0.2).unwrap();
        assert_eq!(timer.advance(0.0), 1);
        assert_eq!(timer.advance(0.0), 0);
    }

    #[test]
    fn test_independent_of_frame_rate() {
        let mut fast = CadenceTimer::new(0.25).unwrap();
        let mut slow = CadenceTimer::new(0.25).unwrap();

        let fast_total: u32 = (0..64).map(|_| fast.advance(1.0 / 64.0)).sum();
        let slow_total: u32 = (0..4).map(|_| slow.advance(0.25)).sum();

        // One immediate fire plus four periods in one second
        assert_eq!(fast_total, 5);
        assert_eq!(slow_total, 5);
    }

    #[test]
    fn test_long_frame_reports_every_period() {
        let mut timer = CadenceTimer::new(0.5).unwrap();
        timer.advance(0.0);
        assert_eq!(timer.advance(1.5), 3);
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        for interval in [0.0, -0.2, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                CadenceTimer::new(interval),
                Err(Error::InvalidInterval(_))
            ));
        }
    }
}
