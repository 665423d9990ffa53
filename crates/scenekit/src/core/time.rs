/// Monotonic frame clock.
/// Accumulates per-frame deltas into the "current time" tweens are advanced with.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Seconds since the clock started.
    now: f32,
    /// Frames ticked so far.
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at a given time.
    pub fn starting_at(now: f32) -> Self {
        Self { now, frame: 0 }
    }

    /// Advance by one frame. Negative deltas are ignored so time never runs
    /// backwards. Returns the new current time.
    pub fn tick(&mut self, frame_dt: f32) -> f32 {
        if frame_dt > 0.0 {
            self.now += frame_dt;
        }
        self.frame += 1;
        self.now
    }

    /// Current time in seconds.
    pub fn now(&self) -> f32 {
        self.now
    }

    /// Number of frames ticked.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas() {
        let mut clock = FrameClock::new();
        clock.tick(0.25);
        let now = clock.tick(0.5);
        assert_eq!(now, 0.75);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = FrameClock::starting_at(2.0);
        assert_eq!(clock.tick(-1.0), 2.0);
        assert_eq!(clock.tick(f32::NAN), 2.0);
    }
}
