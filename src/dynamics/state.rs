use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Reactor state: species concentrations (proxy units)
// ---------------------------------------------------------------------------

/// Concentrations `[x, y]` at a single instant.
pub type State = Vector2<f64>;

/// Instantaneous rates `[dx/dt, dy/dt]`.
pub type Deriv = Vector2<f64>;

// ---------------------------------------------------------------------------
// Kinetic parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub a: f64,
    pub b: f64,
}

impl Params {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Heuristic starting point derived from `a`: `x0 = a/5`, `y0 = 1 + a²/25`.
    ///
    /// This is where the nullclines `x = a/5` and `y = 1 + x²` cross.
    pub fn initial_state(&self) -> State {
        State::new(self.a / 5.0, 1.0 + self.a.powi(2) / 25.0)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite("a", self.a)?;
        finite("b", self.b)
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteInput { name, value })
    }
}

// ---------------------------------------------------------------------------
// Integration config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub h: f64,     // fixed step
    pub t_max: f64, // horizon
}

impl SimConfig {
    /// Largest step count a run may request.
    pub const MAX_STEPS: usize = 1_000_000_000;

    /// Number of RK4 steps: `floor(t_max / h)`.
    pub fn steps(&self) -> usize {
        (self.t_max / self.h) as usize
    }

    pub fn validate(&self) -> Result<()> {
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(Error::InvalidStep(self.h));
        }
        if !self.t_max.is_finite() || self.t_max <= 0.0 {
            return Err(Error::InvalidHorizon(self.t_max));
        }
        let steps = self.t_max / self.h;
        if !steps.is_finite() || steps > Self::MAX_STEPS as f64 {
            return Err(Error::TooManySteps(steps));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            h: 0.01,
            t_max: 10.0,
        }
    }
}
