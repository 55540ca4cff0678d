pub mod integrator;
pub mod runner;
pub mod sweep;
pub mod trajectory;

pub use integrator::rk4_step;
pub use runner::{integrate, simulate};
pub use sweep::{linspace, run, RunConfig, RunResult};
pub use trajectory::Trajectory;
