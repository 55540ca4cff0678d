use tracing::{debug, warn};

use crate::dynamics::state::{finite, Params, SimConfig, State};
use crate::error::Result;
use super::integrator::rk4_step;
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Full integration run
// ---------------------------------------------------------------------------

/// Integrate from `initial` over `[0, t_max]` with fixed step `h`.
///
/// Produces `floor(t_max / h) + 1` samples with `t[i] = i·h`. Inputs are
/// validated up front; values that blow up mid-run are kept as-is.
pub fn simulate(params: &Params, initial: &State, config: &SimConfig) -> Result<Trajectory> {
    config.validate()?;
    params.validate()?;
    finite("x0", initial.x)?;
    finite("y0", initial.y)?;

    let steps = config.steps();
    debug!(a = params.a, b = params.b, h = config.h, steps, "integrating");

    let mut trajectory = Trajectory::with_capacity(*params, *initial, config.h, steps + 1);
    let mut state = *initial;

    for n in 1..=steps {
        state = rk4_step(&state, params, config.h);
        trajectory.push(n as f64 * config.h, &state);
    }

    if !trajectory.is_finite() {
        warn!(a = params.a, b = params.b, h = config.h, "trajectory diverged");
    }

    Ok(trajectory)
}

/// Flat entry point: initial state, parameters, step and horizon.
pub fn integrate(x0: f64, y0: f64, a: f64, b: f64, h: f64, t_max: f64) -> Result<Trajectory> {
    simulate(
        &Params::new(a, b),
        &State::new(x0, y0),
        &SimConfig { h, t_max },
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;

    fn from_fixed_point(a: f64, b: f64, h: f64, t_max: f64) -> Trajectory {
        let params = Params::new(a, b);
        simulate(&params, &params.initial_state(), &SimConfig { h, t_max }).unwrap()
    }

    #[test]
    fn sample_count_is_floor_plus_one() {
        for &(h, t_max) in &[(0.01, 10.0), (0.3, 1.0), (0.25, 1.0), (0.07, 2.0), (5.0, 1.0)] {
            let traj = integrate(0.5, 1.0, 1.0, 1.0, h, t_max).unwrap();
            let expected = (t_max / h) as usize + 1;
            assert_eq!(traj.len(), expected, "h={h}, t_max={t_max}");
            assert_eq!(traj.x().len(), expected);
            assert_eq!(traj.y().len(), expected);
        }
    }

    #[test]
    fn time_is_arithmetic() {
        let traj = integrate(0.5, 1.0, 1.0, 1.0, 0.07, 2.0).unwrap();
        for (i, &t) in traj.time().iter().enumerate() {
            assert_eq!(t, i as f64 * 0.07);
        }
        assert!(traj.time().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn initial_sample_is_exact() {
        let traj = integrate(0.123, 4.56, 3.0, 2.0, 0.01, 1.0).unwrap();
        assert_eq!(traj.x()[0], 0.123);
        assert_eq!(traj.y()[0], 4.56);
        assert_eq!(traj.time()[0], 0.0);
    }

    #[test]
    fn ten_steps_match_step_by_step_evaluation() {
        let params = Params::new(2.0, 3.0);
        let traj = integrate(0.5, 1.5, 2.0, 3.0, 0.01, 0.1).unwrap();
        assert_eq!(traj.len(), 11);

        let mut s = State::new(0.5, 1.5);
        for i in 1..=10 {
            s = rk4_step(&s, &params, 0.01);
            assert_abs_diff_eq!(traj.x()[i], s.x, epsilon = 1e-9);
            assert_abs_diff_eq!(traj.y()[i], s.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn ten_steps_match_precomputed_values() {
        let traj = integrate(0.5, 1.5, 2.0, 3.0, 0.01, 0.1).unwrap();
        let end = traj.final_state();
        assert_abs_diff_eq!(end.x, 0.427331308854288, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, 1.4695902236859115, epsilon = 1e-9);

        let traj = from_fixed_point(1000.0, 652.0, 0.01, 0.1);
        let end = traj.final_state();
        assert_abs_diff_eq!(end.x, 199.999406486692, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, 40001.53987017289, epsilon = 1e-9);
    }

    #[test]
    fn step_halving_converges() {
        // The cross-coupled stages are only first-order consistent for the
        // coupled system, so successive differences roughly halve.
        let run = |h: f64| integrate(0.5, 1.5, 2.0, 3.0, h, 1.0).unwrap().final_state();
        let (s1, s2, s4) = (run(0.1), run(0.05), run(0.025));
        let d1 = (s1 - s2).norm();
        let d2 = (s2 - s4).norm();

        assert!(d2 < d1, "halving h should shrink the gap");
        assert!(d1 / d2 > 1.5, "convergence ratio too low: {}", d1 / d2);

        let reference = run(0.1 / 64.0);
        assert!((s4 - reference).norm() < (s1 - reference).norm());
    }

    #[test]
    fn deterministic() {
        let a = from_fixed_point(1000.0, 652.0, 0.01, 10.0);
        let b = from_fixed_point(1000.0, 652.0, 0.01, 10.0);
        assert_eq!(a, b);
        for (p, q) in a.x().iter().zip(b.x()) {
            assert_eq!(p.to_bits(), q.to_bits());
        }
    }

    #[test]
    fn oscillatory_scenario() {
        let traj = from_fixed_point(1000.0, 652.0, 0.01, 10.0);
        assert_eq!(traj.len(), 1001);
        assert_abs_diff_eq!(traj.time()[1000], 10.0, epsilon = 1e-12);
        assert_eq!(traj.x()[0], 200.0);
        assert_eq!(traj.y()[0], 40_001.0);
    }

    #[test]
    fn low_parameter_scenario() {
        let traj = from_fixed_point(100.0, 100.0, 0.01, 10.0);
        assert_eq!(traj.len(), 1001);
        assert_eq!(traj.x()[0], 20.0);
        assert_eq!(traj.y()[0], 401.0);
    }

    #[test]
    fn horizon_shorter_than_step_keeps_initial_only() {
        let traj = integrate(1.0, 2.0, 1.0, 1.0, 0.5, 0.2).unwrap();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.final_state(), State::new(1.0, 2.0));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            integrate(1.0, 1.0, 1.0, 1.0, -0.1, 1.0),
            Err(Error::InvalidStep(_))
        ));
        assert!(matches!(
            integrate(1.0, 1.0, 1.0, 1.0, 0.1, 0.0),
            Err(Error::InvalidHorizon(_))
        ));
        assert!(matches!(
            integrate(f64::NAN, 1.0, 1.0, 1.0, 0.1, 1.0),
            Err(Error::NonFiniteInput { name: "x0", .. })
        ));
        assert!(matches!(
            integrate(1.0, 1.0, 1.0, f64::NEG_INFINITY, 0.1, 1.0),
            Err(Error::NonFiniteInput { name: "b", .. })
        ));
    }

    #[test]
    fn rejects_step_count_beyond_cap() {
        assert!(matches!(
            integrate(1.0, 1.0, 1.0, 1.0, 1e-300, 1.0),
            Err(Error::TooManySteps(_))
        ));
        assert!(matches!(
            integrate(1.0, 1.0, 1.0, 1.0, 1e-9, 10.0),
            Err(Error::TooManySteps(_))
        ));
    }

    #[test]
    fn into_parts_preserves_series() {
        let traj = integrate(0.5, 1.5, 2.0, 3.0, 0.1, 1.0).unwrap();
        let x_last = traj.final_state().x;
        let (t, x, y) = traj.into_parts();
        assert_eq!(t.len(), 11);
        assert_eq!(x.len(), y.len());
        assert_eq!(x[10], x_last);
    }
}
