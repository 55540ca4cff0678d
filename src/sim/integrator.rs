use crate::dynamics::state::{Params, State};
use crate::dynamics::{dx_dt, dy_dt};

// ---------------------------------------------------------------------------
// Fixed-step RK4 with cross-coupled stages
// ---------------------------------------------------------------------------

/// Single RK4 step: advance state by `h`.
///
/// Each equation gets its own four stages. The x-stages shift `y` by `h/2`
/// and `h` (not by a y-slope), and the y-stages shift `x` the same way. This
/// coupling must stay exactly as written; results are compared bit-for-bit.
pub fn rk4_step(state: &State, params: &Params, h: f64) -> State {
    let (x, y) = (state.x, state.y);
    let (a, b) = (params.a, params.b);

    let kx1 = h * dx_dt(x, y, a);
    let kx2 = h * dx_dt(x + kx1 / 2.0, y + h / 2.0, a);
    let kx3 = h * dx_dt(x + kx2 / 2.0, y + h / 2.0, a);
    let kx4 = h * dx_dt(x + kx3, y + h, a);

    let ky1 = h * dy_dt(x, y, b);
    let ky2 = h * dy_dt(x + h / 2.0, y + ky1 / 2.0, b);
    let ky3 = h * dy_dt(x + h / 2.0, y + ky2 / 2.0, b);
    let ky4 = h * dy_dt(x + h, y + ky3, b);

    State::new(
        x + (1.0 / 6.0) * (kx1 + 2.0 * kx2 + 2.0 * kx3 + kx4),
        y + (1.0 / 6.0) * (ky1 + 2.0 * ky2 + 2.0 * ky3 + ky4),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn step_matches_hand_computed_stages() {
        let params = Params::new(2.0, 3.0);
        let s = State::new(0.5, 1.5);
        let h = 0.1;

        let f = |x: f64, y: f64| 2.0 - x - 4.0 * x * y / (1.0 + x * x);
        let g = |x: f64, y: f64| 3.0 * x * (1.0 - y / (1.0 + x * x));

        let kx1 = h * f(0.5, 1.5);
        let kx2 = h * f(0.5 + kx1 / 2.0, 1.55);
        let kx3 = h * f(0.5 + kx2 / 2.0, 1.55);
        let kx4 = h * f(0.5 + kx3, 1.6);
        let ky1 = h * g(0.5, 1.5);
        let ky2 = h * g(0.55, 1.5 + ky1 / 2.0);
        let ky3 = h * g(0.55, 1.5 + ky2 / 2.0);
        let ky4 = h * g(0.6, 1.5 + ky3);

        let next = rk4_step(&s, &params, h);
        assert_abs_diff_eq!(
            next.x,
            0.5 + (kx1 + 2.0 * kx2 + 2.0 * kx3 + kx4) / 6.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            next.y,
            1.5 + (ky1 + 2.0 * ky2 + 2.0 * ky3 + ky4) / 6.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn cross_coupling_differs_from_decoupled_rk4() {
        // At the fixed point a decoupled RK4 would not move at all; the
        // cross-coupled stages nudge y by h/2 and h, so the state drifts.
        let params = Params::new(10.0, 4.0);
        let fixed = params.initial_state();
        let next = rk4_step(&fixed, &params, 0.01);
        assert!(next != fixed);
        assert!((next.x - fixed.x).abs() > 0.0);
    }

    #[test]
    fn zero_step_is_identity() {
        let params = Params::new(1000.0, 652.0);
        let s = State::new(3.0, 4.0);
        assert_eq!(rk4_step(&s, &params, 0.0), s);
    }
}
