//! Frame pacing
//!
//! [`FrameClock`] decides when the next frame is due and keeps a smoothed
//! frames-per-second figure for the HUD.

use std::time::{Duration, Instant};

/// Weight of the newest frame in the smoothed frame time
const SMOOTHING: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_frame: Option<Instant>,
    smoothed_frame_time: Option<f32>,
    frames: u64,
}

impl FrameClock {
    /// Clock targeting `fps` frames per second (at least one)
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            last_frame: None,
            smoothed_frame_time: None,
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Earliest instant at which the next frame should start
    pub fn next_deadline(&self, now: Instant) -> Instant {
        match self.last_frame {
            Some(last) => last + self.interval,
            None => now,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline(now)
    }

    /// Records that a frame started at `now`
    pub fn mark_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let elapsed = now.saturating_duration_since(last).as_secs_f32();
            self.smoothed_frame_time = Some(match self.smoothed_frame_time {
                Some(smoothed) => smoothed + (elapsed - smoothed) * SMOOTHING,
                None => elapsed,
            });
        }
        self.last_frame = Some(now);
        self.frames += 1;
    }

    /// Smoothed frames per second, zero until two frames were recorded
    pub fn fps(&self) -> f32 {
        match self.smoothed_frame_time {
            Some(time) if time > 0.0 => 1.0 / time,
            _ => 0.0,
        }
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.smoothed_frame_time.unwrap_or(0.0) * 1000.0
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let clock = FrameClock::new(60);
        let now = Instant::now();
        assert!(clock.is_due(now));
        assert_eq!(clock.next_deadline(now), now);
    }

    #[test]
    fn test_next_frame_waits_for_interval() {
        let mut clock = FrameClock::new(50);
        let start = Instant::now();
        clock.mark_frame(start);

        assert_eq!(clock.interval(), Duration::from_millis(20));
        assert!(!clock.is_due(start + Duration::from_millis(10)));
        assert!(clock.is_due(start + Duration::from_millis(20)));
        assert_eq!(clock.next_deadline(start), start + Duration::from_millis(20));
    }

    #[test]
    fn test_fps_from_steady_frames() {
        let mut clock = FrameClock::new(60);
        let start = Instant::now();
        for frame in 0..10 {
            clock.mark_frame(start + Duration::from_millis(25) * frame);
        }

        assert_eq!(clock.frames(), 10);
        assert_relative_eq!(clock.fps(), 40.0, max_relative = 1e-3);
        assert_relative_eq!(clock.frame_time_ms(), 25.0, max_relative = 1e-3);
    }

    #[test]
    fn test_zero_fps_is_treated_as_one() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.interval(), Duration::from_secs(1));
        assert_eq!(clock.fps(), 0.0);
    }
}
