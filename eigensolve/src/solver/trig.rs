use crate::{diagonal, EigenSolver, SolveError};
use na::Matrix3;
use nalgebra as na;
use std::f64::consts::PI;
use tensor::{PrincipalStresses, StressTensor};

/// Closed form eigenvalues from the deviatoric part,
/// A = q I + p B with det(B) / 2 = cos(3 phi).
/// The tensor is divided by its largest component first.
/// Loses accuracy for nearly repeated eigenvalues.
pub struct Trigonometric;

impl EigenSolver for Trigonometric {
    fn new() -> Self {
        Trigonometric
    }

    #[allow(non_snake_case)]
    fn solve(&self, s: &StressTensor) -> Result<PrincipalStresses, SolveError> {
        if !s.is_finite() {
            return Err(SolveError::NotConverged { iterations: 0 });
        }
        if let Some(p) = diagonal(s) {
            return Ok(p);
        }
        let amax = s.amax();
        let s = s.unscale(amax);
        let A = s.matrix();
        let p1 = s.s12 * s.s12 + s.s23 * s.s23 + s.s13 * s.s13;
        let q = A.trace() / 3.0;
        let p2 = (s.s11 - q).powi(2) + (s.s22 - q).powi(2) + (s.s33 - q).powi(2) + 2.0 * p1;
        let p = (p2 / 6.0).sqrt();
        if p == 0.0 {
            // shear below the resolution of the diagonal
            return Ok(PrincipalStresses::from_unordered([q, q, q]).scale(amax));
        }

        let B = (1.0 / p) * (A - q * Matrix3::identity());
        let r = B.determinant() / 2.0;
        let phi = if r <= -1.0 {
            PI / 3.0
        } else if r >= 1.0 {
            0.0
        } else {
            r.acos() / 3.0
        };
        let eig1 = q + 2.0 * p * phi.cos();
        let eig3 = q + 2.0 * p * (phi + 2.0 * PI / 3.0).cos();
        let eig2 = 3.0 * q - eig1 - eig3;
        Ok(PrincipalStresses::from_unordered([eig1, eig2, eig3]).scale(amax))
    }
}
