//! Variable-step frame loop driving the session.
//!
//! Each frame measures wall time since the previous one, clamps it, and hands
//! it to the frame callback, which ticks the clock and computes positions.

use std::time::Instant;
use tracing::warn;

/// Longest frame delta passed on to the clock, in seconds.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Frame loop state.
pub struct FrameLoop {
    previous_time: Instant,
    frame_count: u64,
    total_wall_time: f64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            frame_count: 0,
            total_wall_time: 0.0,
        }
    }

    /// Runs one frame: measures elapsed wall time and calls `frame_fn(delta_seconds)` once.
    pub fn tick(&mut self, frame_fn: impl FnOnce(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.run_frame(frame_time, frame_fn);
    }

    /// Runs one frame with an explicit wall delta. Used by replays and tests.
    pub fn tick_with(&mut self, frame_time: f64, frame_fn: impl FnOnce(f64)) {
        self.run_frame(frame_time, frame_fn);
    }

    fn run_frame(&mut self, frame_time: f64, frame_fn: impl FnOnce(f64)) {
        let frame_time = clamp_frame_time(frame_time);
        self.total_wall_time += frame_time;
        frame_fn(frame_time);
        self.frame_count += 1;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Sum of all (clamped) frame deltas so far, in seconds.
    pub fn total_wall_time(&self) -> f64 {
        self.total_wall_time
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_frame_time(frame_time: f64) -> f64 {
    if frame_time > MAX_FRAME_TIME {
        warn!(
            "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
            frame_time * 1000.0,
            MAX_FRAME_TIME * 1000.0
        );
        MAX_FRAME_TIME
    } else {
        frame_time.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_passed_through() {
        let mut frames = FrameLoop::new();
        let mut received = 0.0;
        frames.tick_with(0.016, |dt| received = dt);
        assert_eq!(received, 0.016);
        assert_eq!(frames.frame_count(), 1);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut frames = FrameLoop::new();
        let mut received = 0.0;
        frames.tick_with(3.0, |dt| received = dt);
        assert_eq!(received, MAX_FRAME_TIME);
    }

    #[test]
    fn test_negative_delta_becomes_zero() {
        let mut frames = FrameLoop::new();
        let mut received = -1.0;
        frames.tick_with(-0.5, |dt| received = dt);
        assert_eq!(received, 0.0);
    }

    #[test]
    fn test_total_wall_time_accumulates_clamped() {
        let mut frames = FrameLoop::new();
        for ft in [0.017, 0.015, 1.0, 0.016] {
            frames.tick_with(ft, |_| {});
        }
        assert!((frames.total_wall_time() - (0.017 + 0.015 + MAX_FRAME_TIME + 0.016)).abs() < 1e-12);
        assert_eq!(frames.frame_count(), 4);
    }

    #[test]
    fn test_measured_tick_runs_callback_once() {
        let mut frames = FrameLoop::default();
        let mut calls = 0;
        frames.tick(|dt| {
            assert!((0.0..=MAX_FRAME_TIME).contains(&dt));
            calls += 1;
        });
        assert_eq!(calls, 1);
    }
}
