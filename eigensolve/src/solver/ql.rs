use crate::{check_bounds, diagonal, EigenSolver, SolveError};
use na::linalg::SymmetricEigen;
use nalgebra as na;
use tensor::{PrincipalStresses, StressTensor};
use tracing::trace;

/// Householder tridiagonalization followed by implicit QL steps.
/// Only the lower triangle of the tensor is handed to the decomposition.
pub struct SymmetricQl {
    pub eps: f64,
    // nalgebra treats 0 as unbounded, we never pass it
    pub max_iter: usize,
}

impl EigenSolver for SymmetricQl {
    fn new() -> Self {
        SymmetricQl {
            eps: f64::EPSILON,
            max_iter: 100,
        }
    }

    fn solve(&self, s: &StressTensor) -> Result<PrincipalStresses, SolveError> {
        check_bounds(self.eps, self.max_iter)?;
        if !s.is_finite() {
            return Err(SolveError::NotConverged { iterations: 0 });
        }
        if let Some(p) = diagonal(s) {
            return Ok(p);
        }
        let eigen = SymmetricEigen::try_new(s.lower(), self.eps, self.max_iter).ok_or(
            SolveError::NotConverged {
                iterations: self.max_iter,
            },
        )?;
        let w = eigen.eigenvalues;
        trace!(?w, "ql eigenvalues");
        Ok(PrincipalStresses::from_unordered([w[0], w[1], w[2]]))
    }
}
