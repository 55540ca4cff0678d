use std::io;

/// Errors raised before or around an integration run.
///
/// Numerical blow-up during a run is not an error: the trajectory simply
/// carries the non-finite values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("time horizon must be finite and positive, got {0}")]
    InvalidHorizon(f64),

    #[error("t_max / h = {0} exceeds the limit of 1e9 steps")]
    TooManySteps(f64),

    #[error("`{name}` must be finite, got {value}")]
    NonFiniteInput { name: &'static str, value: f64 },

    #[error("sweep has {a} values of `a` but {b} values of `b`")]
    SweepLengthMismatch { a: usize, b: usize },

    #[error("sweep has no parameter pairs")]
    EmptySweep,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
