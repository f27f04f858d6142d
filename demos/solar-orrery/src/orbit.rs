//! Elliptical orbit solver — pure math, no engine dependencies.
//!
//! Kepler's equation is solved by Newton–Raphson iteration. The stopping
//! test is the absolute residual |E − e·sin E − M|, not the step size;
//! trajectories are reproducible frame-to-frame only if this exact test
//! is kept, so don't "improve" it.

use std::fmt;

/// Convergence threshold for the Kepler residual.
pub const EPSILON: f64 = 1e-6;
/// Iteration safety bound. Orbits here all have e < 0.3 and converge in a
/// handful of steps; the cap is never expected to bind.
pub const MAX_ITERATIONS: usize = 1000;

/// Validated orbital parameters for one body.
/// Distances share one arbitrary unit; period shares the solver's time unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    perihelion: f64,
    aphelion: f64,
    period: f64,
}

/// Rejected orbital parameters. Raised at configuration time, never
/// during the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitError {
    NonPositivePerihelion(f64),
    AphelionBelowPerihelion { perihelion: f64, aphelion: f64 },
    NonPositivePeriod(f64),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePerihelion(p) => {
                write!(f, "perihelion must be positive, got {p}")
            }
            Self::AphelionBelowPerihelion { perihelion, aphelion } => {
                write!(f, "aphelion {aphelion} is below perihelion {perihelion}")
            }
            Self::NonPositivePeriod(t) => {
                write!(f, "orbital period must be positive, got {t}")
            }
        }
    }
}

impl std::error::Error for OrbitError {}

impl OrbitParams {
    /// Validate and construct. `perihelion > 0` also guarantees the
    /// `perihelion + aphelion` denominator below is non-zero.
    pub fn new(perihelion: f64, aphelion: f64, period: f64) -> Result<Self, OrbitError> {
        if perihelion <= 0.0 {
            return Err(OrbitError::NonPositivePerihelion(perihelion));
        }
        if aphelion < perihelion {
            return Err(OrbitError::AphelionBelowPerihelion { perihelion, aphelion });
        }
        if period <= 0.0 {
            return Err(OrbitError::NonPositivePeriod(period));
        }
        Ok(Self { perihelion, aphelion, period })
    }

    pub fn perihelion(&self) -> f64 {
        self.perihelion
    }

    pub fn aphelion(&self) -> f64 {
        self.aphelion
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Semi-major axis `a = (perihelion + aphelion) / 2`.
    pub fn semi_major_axis(&self) -> f64 {
        (self.perihelion + self.aphelion) / 2.0
    }

    /// Eccentricity `e = (aphelion − perihelion) / (aphelion + perihelion)`,
    /// in [0, 1) by construction.
    pub fn eccentricity(&self) -> f64 {
        (self.aphelion - self.perihelion) / (self.aphelion + self.perihelion)
    }
}

/// Position in the orbital plane at time `t`.
///
/// Mean anomaly `M = (2π / period)·t`; Kepler's equation `E − e·sin E = M`
/// solved for the eccentric anomaly; position
/// `(a·(cos E − e), a·√(1−e²)·sin E)`. Pure and deterministic.
///
/// Running past the iteration cap is a soft failure: the best available
/// estimate is returned and the condition is logged, never surfaced.
pub fn orbit_position(params: &OrbitParams, time: f64) -> (f64, f64) {
    let a = params.semi_major_axis();
    let e = params.eccentricity();
    let mean_motion = 2.0 * std::f64::consts::PI / params.period;
    let mean_anomaly = mean_motion * time;

    let mut ea = mean_anomaly; // initial guess
    let mut converged = false;
    for _ in 0..MAX_ITERATIONS {
        let delta = ea - e * ea.sin() - mean_anomaly;
        ea -= delta / (1.0 - e * ea.cos());
        if delta.abs() < EPSILON {
            converged = true;
            break;
        }
    }
    if !converged {
        log::warn!(
            "Kepler solve hit the {MAX_ITERATIONS}-iteration cap (e = {e:.4}, M = {mean_anomaly:.4}); using best estimate"
        );
    }

    let x = a * (ea.cos() - e);
    let y = a * (1.0 - e * e).sqrt() * ea.sin();
    (x, y)
}
