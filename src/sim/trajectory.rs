use crate::dynamics::state::{Params, State};

/// Dense, uniformly sampled solution of one integration run.
///
/// The three series are index-aligned and always the same length. They are
/// filled once by the runner and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    params: Params,
    h: f64,
    t: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Trajectory {
    /// Pre-sized buffers holding only the initial sample.
    pub(crate) fn with_capacity(params: Params, initial: State, h: f64, samples: usize) -> Self {
        let mut traj = Self {
            params,
            h,
            t: Vec::with_capacity(samples),
            x: Vec::with_capacity(samples),
            y: Vec::with_capacity(samples),
        };
        traj.push(0.0, &initial);
        traj
    }

    pub(crate) fn push(&mut self, t: f64, state: &State) {
        self.t.push(t);
        self.x.push(state.x);
        self.y.push(state.y);
    }

    pub fn params(&self) -> Params {
        self.params
    }

    pub fn step_size(&self) -> f64 {
        self.h
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.t
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn state(&self, i: usize) -> Option<State> {
        Some(State::new(*self.x.get(i)?, *self.y.get(i)?))
    }

    pub fn initial_state(&self) -> State {
        State::new(self.x[0], self.y[0])
    }

    pub fn final_state(&self) -> State {
        let last = self.len() - 1;
        State::new(self.x[last], self.y[last])
    }

    /// `(t, x, y)` triples in time order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.t
            .iter()
            .zip(&self.x)
            .zip(&self.y)
            .map(|((&t, &x), &y)| (t, x, y))
    }

    /// True if every sample is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(&self.y).all(|v| v.is_finite())
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.t, self.x, self.y)
    }
}
