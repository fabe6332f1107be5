//! Fixed-step power iteration
//!
//! Starts from the uniform random-surfer vector and applies the transition
//! matrix `k` times. There is no convergence check and no renormalization
//! between steps: mass is conserved only as far as the transition matrix is
//! column-stochastic.

use crate::errors::{Error, Result};
use crate::matrix::Matrix;

/// Hooks called after every power-iteration step.
pub trait IterationObserver {
    /// Called with the 1-based step number, the new state and the L1
    /// distance to the previous state.
    fn on_iteration(&mut self, _iteration: usize, _state: &Matrix, _delta: f64) {}
}

/// No-op observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {}

/// Records the L1 delta of every step.
#[derive(Debug, Clone, Default)]
pub struct DeltaHistory {
    pub deltas: Vec<f64>,
}

impl IterationObserver for DeltaHistory {
    fn on_iteration(&mut self, _iteration: usize, _state: &Matrix, delta: f64) {
        self.deltas.push(delta);
    }
}

/// The N x 1 vector with every entry `1/N`
pub fn uniform_vector(n: usize) -> Matrix {
    if n == 0 {
        return Matrix::column(Vec::new());
    }
    Matrix::column(vec![1.0 / n as f64; n])
}

fn l1_distance(a: &Matrix, b: &Matrix) -> f64 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).abs())
        .sum()
}

/// Power iteration with a caller-supplied step count
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerIteration {
    /// Number of multiplications to perform
    pub iterations: usize,
}

impl PowerIteration {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Run from the uniform vector and return the final state
    pub fn run(&self, transition: &Matrix) -> Result<Matrix> {
        self.run_observed(transition, &mut NoopObserver)
    }

    /// Same as [`PowerIteration::run`], notifying `observer` after each step
    pub fn run_observed(
        &self,
        transition: &Matrix,
        observer: &mut impl IterationObserver,
    ) -> Result<Matrix> {
        if transition.rows() != transition.cols() {
            return Err(Error::Dimension {
                op: "power_iteration",
                lhs: transition.shape(),
                rhs: (transition.cols(), 1),
            });
        }

        trace_stage!(crate::STAGE_POWER_ITERATION);
        let mut state = uniform_vector(transition.rows());

        for iteration in 1..=self.iterations {
            let next = transition.dot(&state)?;
            let delta = l1_distance(&state, &next);

            #[cfg(feature = "tracing")]
            tracing::debug!(iteration, delta, "power iteration step");

            observer.on_iteration(iteration, &next, delta);
            state = next;
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle3() -> Matrix {
        // 0 -> 1 -> 2 -> 0
        Matrix::from_rows(&[
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_uniform_vector() {
        let v = uniform_vector(4);
        assert_eq!(v.shape(), (4, 1));
        assert!(v.as_slice().iter().all(|&x| x == 0.25));
        assert_eq!(uniform_vector(0).shape(), (0, 1));
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let state = PowerIteration::new(0).run(&cycle3()).unwrap();
        assert_eq!(state, uniform_vector(3));
    }

    #[test]
    fn test_state_follows_transition() {
        let t = Matrix::from_rows(&[vec![0.5, 0.0], vec![0.5, 1.0]]).unwrap();

        let one = PowerIteration::new(1).run(&t).unwrap();
        assert_eq!(one.as_slice(), &[0.25, 0.75]);

        let two = PowerIteration::new(2).run(&t).unwrap();
        assert_eq!(two.as_slice(), &[0.125, 0.875]);
    }

    #[test]
    fn test_non_square_rejected() {
        let err = PowerIteration::new(1).run(&Matrix::new(2, 3)).unwrap_err();
        assert!(matches!(err, Error::Dimension { op: "power_iteration", .. }));
    }

    #[test]
    fn test_observer_sees_every_step() {
        let t = Matrix::from_rows(&[vec![0.5, 0.0], vec![0.5, 1.0]]).unwrap();
        let mut history = DeltaHistory::default();

        PowerIteration::new(3).run_observed(&t, &mut history).unwrap();

        assert_eq!(history.deltas, vec![0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_cycle_is_stationary() {
        let mut history = DeltaHistory::default();
        let state = PowerIteration::new(5)
            .run_observed(&cycle3(), &mut history)
            .unwrap();

        assert_eq!(state, uniform_vector(3));
        assert!(history.deltas.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_empty_transition() {
        let state = PowerIteration::new(10).run(&Matrix::new(0, 0)).unwrap();
        assert_eq!(state.shape(), (0, 1));
    }
}
