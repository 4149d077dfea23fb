use crate::{check_bounds, diagonal, EigenSolver, SolveError};
use na::Matrix3;
use nalgebra as na;
use tensor::{PrincipalStresses, StressTensor};
use tracing::trace;

const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Cyclic Jacobi rotations. One sweep annihilates each off-diagonal pair once,
/// iteration stops when the off-diagonal norm drops below `eps` times the
/// Frobenius norm of the tensor.
pub struct Jacobi {
    pub eps: f64,
    pub max_sweeps: usize,
}

impl EigenSolver for Jacobi {
    fn new() -> Self {
        Jacobi {
            eps: 4.0 * f64::EPSILON,
            max_sweeps: 50,
        }
    }

    #[allow(non_snake_case)]
    fn solve(&self, s: &StressTensor) -> Result<PrincipalStresses, SolveError> {
        check_bounds(self.eps, self.max_sweeps)?;
        if !s.is_finite() {
            return Err(SolveError::NotConverged { iterations: 0 });
        }
        if let Some(p) = diagonal(s) {
            return Ok(p);
        }

        // work on entries in [-1, 1] so the squared norms cannot over- or underflow
        let amax = s.amax();
        let mut A = s.unscale(amax).matrix();
        let tol = self.eps * A.norm();
        for sweep in 0..self.max_sweeps {
            if off_norm(&A) <= tol {
                trace!(sweep, "jacobi converged");
                let w = PrincipalStresses::from_unordered([A[(0, 0)], A[(1, 1)], A[(2, 2)]]);
                return Ok(w.scale(amax));
            }
            for (p, q) in PAIRS {
                let apq = A[(p, q)];
                if apq.abs() <= tol * f64::EPSILON {
                    A[(p, q)] = 0.0;
                    A[(q, p)] = 0.0;
                    continue;
                }
                let theta = (A[(q, q)] - A[(p, p)]) / (2.0 * apq);
                // smaller root of t^2 + 2 theta t - 1 = 0
                let t = if theta.abs() > 1e150 {
                    0.5 / theta
                } else {
                    theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt())
                };
                let c = 1.0 / (t * t + 1.0).sqrt();
                let sn = t * c;

                let mut J = Matrix3::identity();
                J[(p, p)] = c;
                J[(q, q)] = c;
                J[(p, q)] = sn;
                J[(q, p)] = -sn;
                A = J.transpose() * A * J;
                A[(p, q)] = 0.0;
                A[(q, p)] = 0.0;
            }
        }
        Err(SolveError::NotConverged {
            iterations: self.max_sweeps,
        })
    }
}

#[inline]
fn off_norm(a: &Matrix3<f64>) -> f64 {
    PAIRS
        .iter()
        .map(|&(p, q)| a[(p, q)] * a[(p, q)])
        .sum::<f64>()
        .sqrt()
}
