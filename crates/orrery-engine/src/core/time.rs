/// Fixed timestep accumulator.
/// Keeps simulation ticks at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// Capped at 10 steps per frame to prevent a stall from snowballing.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Monotonic simulation clock: accumulated real milliseconds × a scale factor.
///
/// The scale factor controls perceived orbital speed — at the default
/// 0.0001, one orbital period unit corresponds to 10,000 real milliseconds.
/// Advancing is explicit, so tests drive it with synthetic deltas instead
/// of sampling a wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    elapsed_ms: f64,
    scale: f64,
}

impl SimClock {
    pub fn new(scale: f64) -> Self {
        Self {
            elapsed_ms: 0.0,
            scale,
        }
    }

    /// Advance the clock by `dt` seconds of real time.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed_ms += dt * 1000.0;
    }

    /// Scaled simulation time — the value fed to the orbit solver.
    pub fn time(&self) -> f64 {
        self.elapsed_ms * self.scale
    }

    /// Unscaled elapsed real time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}
