use instant::Instant;

/// Time sample produced once per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous tick; never negative.
    pub dt: f32,
}

/// Monotonic frame clock: elapsed time plus per-frame delta.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    prev_elapsed: f32,
}

impl FrameClock {
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            prev_elapsed: 0.0,
        }
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now.duration_since(self.start).as_secs_f32();
        let dt = (elapsed - self.prev_elapsed).max(0.0);
        self.prev_elapsed = self.prev_elapsed.max(elapsed);
        FrameTime { elapsed, dt }
    }
}
