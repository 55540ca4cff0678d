pub mod state;

use self::state::{Deriv, Params, State};

// ---------------------------------------------------------------------------
// Two-variable BZ reaction kinetics
// ---------------------------------------------------------------------------

/// dx/dt = a - x - 4xy / (1 + x²)
pub fn dx_dt(x: f64, y: f64, a: f64) -> f64 {
    a - x - (4.0 * x * y) / (1.0 + x.powi(2))
}

/// dy/dt = b·x·(1 - y / (1 + x²))
pub fn dy_dt(x: f64, y: f64, b: f64) -> f64 {
    b * x * (1.0 - y / (1.0 + x.powi(2)))
}

/// Both rates at once.
pub fn derivatives(state: &State, params: &Params) -> Deriv {
    Deriv::new(
        dx_dt(state.x, state.y, params.a),
        dy_dt(state.x, state.y, params.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rates_at_origin() {
        assert_eq!(dx_dt(0.0, 5.0, 3.0), 3.0);
        assert_eq!(dy_dt(0.0, 5.0, 7.0), 0.0);
    }

    #[test]
    fn rates_hand_computed() {
        // x = 1, y = 2: 1 + x² = 2
        assert_relative_eq!(dx_dt(1.0, 2.0, 10.0), 10.0 - 1.0 - 8.0 / 2.0);
        assert_relative_eq!(dy_dt(1.0, 2.0, 3.0), 0.0);
        assert_relative_eq!(dy_dt(2.0, 1.0, 3.0), 3.0 * 2.0 * (1.0 - 1.0 / 5.0));
    }

    #[test]
    fn fixed_point_is_stationary() {
        let params = Params::new(10.0, 4.0);
        let d = derivatives(&params.initial_state(), &params);
        assert_relative_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn defined_for_negative_and_large_inputs() {
        for &(x, y) in &[(-3.0, -7.0), (1e6, 1e12), (-1e-9, 0.0)] {
            assert!(dx_dt(x, y, 1.0).is_finite());
            assert!(dy_dt(x, y, 1.0).is_finite());
        }
    }
}
