use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dynamics::state::{Params, SimConfig};
use crate::error::{Error, Result};
use super::runner::simulate;
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Run selection
// ---------------------------------------------------------------------------

/// What to integrate: one parameter pair, or a sweep of pairs zipped by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunConfig {
    SingleRun { a: f64, b: f64 },
    Sweep { a_values: Vec<f64>, b_values: Vec<f64> },
}

impl RunConfig {
    /// Pair known to give sustained oscillations.
    pub fn oscillatory() -> Self {
        RunConfig::SingleRun { a: 1000.0, b: 652.0 }
    }

    /// Ten settings spanning a ∈ [100, 1000], b ∈ [100, 650].
    pub fn default_sweep() -> Self {
        RunConfig::Sweep {
            a_values: linspace(100.0, 1000.0, 10),
            b_values: linspace(100.0, 650.0, 10),
        }
    }

    /// Parameter pairs in presentation order.
    pub fn params(&self) -> Result<Vec<Params>> {
        match self {
            RunConfig::SingleRun { a, b } => Ok(vec![Params::new(*a, *b)]),
            RunConfig::Sweep { a_values, b_values } => {
                if a_values.len() != b_values.len() {
                    return Err(Error::SweepLengthMismatch {
                        a: a_values.len(),
                        b: b_values.len(),
                    });
                }
                if a_values.is_empty() {
                    return Err(Error::EmptySweep);
                }
                Ok(a_values
                    .iter()
                    .zip(b_values)
                    .map(|(&a, &b)| Params::new(a, b))
                    .collect())
            }
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::oscillatory()
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RunResult {
    pub index: usize,
    pub params: Params,
    pub trajectory: Trajectory,
}

/// Integrate every parameter pair from its fixed-point start.
///
/// Runs are independent and computed in parallel; the result order matches
/// `selection.params()`.
pub fn run(selection: &RunConfig, config: &SimConfig) -> Result<Vec<RunResult>> {
    config.validate()?;
    let params = selection.params()?;
    let total = params.len();

    params
        .into_par_iter()
        .enumerate()
        .map(|(index, p)| -> Result<RunResult> {
            let trajectory = simulate(&p, &p.initial_state(), config)?;
            info!("run {}/{}: a={:.1}, b={:.1}", index + 1, total, p.a, p.b);
            Ok(RunResult {
                index,
                params: p,
                trajectory,
            })
        })
        .collect()
}
