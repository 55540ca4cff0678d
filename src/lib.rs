pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod sim;

pub use error::{Error, Result};

pub mod types {
    pub use crate::config::AppConfig;
    pub use crate::dynamics::state::{Deriv, Params, SimConfig, State};
    pub use crate::sim::{RunConfig, RunResult, Trajectory};
}
