//! Frame timing.

use std::time::{Duration, Instant};

/// Tracks the time since startup and measures each frame against the previous one.
#[derive(Clone, Copy, Debug)]
pub struct FrameTimer {
    start: Instant,
    last_frame: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last_frame: start,
        }
    }

    /// Marks the start of a new frame and returns the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as [`FrameTimer::tick`] with an explicit timestamp. Timestamps earlier than the
    /// previous frame produce a delta of zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta_time = now
            .checked_duration_since(self.last_frame)
            .unwrap_or(Duration::ZERO)
            .as_secs_f32();
        self.last_frame = self.last_frame.max(now);
        delta_time
    }

    /// Seconds from startup to the most recent tick.
    pub fn elapsed(&self) -> f32 {
        self.last_frame.duration_since(self.start).as_secs_f32()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_measures_from_start() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start);
        let dt = timer.tick_at(start + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-6);
        assert!((timer.elapsed() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn delta_is_relative_to_previous_tick() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start);
        timer.tick_at(start + Duration::from_millis(100));
        let dt = timer.tick_at(start + Duration::from_millis(116));
        assert!((dt - 0.016).abs() < 1e-6);
        assert!((timer.elapsed() - 0.116).abs() < 1e-6);
    }

    #[test]
    fn going_back_in_time_yields_zero() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start + Duration::from_secs(1));
        assert_eq!(timer.tick_at(start), 0.0);
        assert_eq!(timer.elapsed(), 0.0);
    }
}
