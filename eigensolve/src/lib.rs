//! Eigenvalues of symmetric 3x3 stress tensors.
//!
//! All solvers read the six independent components of a [`StressTensor`] and
//! return the [`PrincipalStresses`] sorted descending. Iterative solvers are
//! bounded, running out of iterations is reported as
//! [`SolveError::NotConverged`].
use std::fmt;
use std::str::FromStr;

pub use tensor::{PrincipalStresses, StressTensor};
use thiserror::Error;

pub mod solver;
pub use solver::{Jacobi, SymmetricQl, Trigonometric};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("eigenvalues not converged after {iterations} iterations")]
    NotConverged { iterations: usize },

    /// the solver was called with parameters it cannot work with, a programming fault
    #[error("argument `{argument}` is illegal: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl SolveError {
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, SolveError::InvalidArgument { .. })
    }
}

pub trait EigenSolver {
    fn new() -> Self
    where
        Self: Sized;
    fn solve(&self, s: &StressTensor) -> Result<PrincipalStresses, SolveError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// tridiagonalization + implicit QL, nalgebra's `SymmetricEigen`
    #[default]
    Ql,
    /// cyclic Jacobi rotations
    Jacobi,
    /// closed form, no iteration
    Trig,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Ql, Method::Jacobi, Method::Trig];

    pub fn solver(self) -> Box<dyn EigenSolver + Send + Sync> {
        match self {
            Method::Ql => Box::new(SymmetricQl::new()),
            Method::Jacobi => Box::new(Jacobi::new()),
            Method::Trig => Box::new(Trigonometric::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Ql => "ql",
            Method::Jacobi => "jacobi",
            Method::Trig => "trig",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown eigen solver `{0}`, expected one of: ql, jacobi, trig")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// checks the tolerance and iteration bound of an iterative solver
pub(crate) fn check_bounds(eps: f64, max_iter: usize) -> Result<(), SolveError> {
    if !(eps.is_finite() && eps > 0.0) {
        return Err(SolveError::InvalidArgument {
            argument: "eps",
            reason: "must be finite and positive",
        });
    }
    if max_iter == 0 {
        return Err(SolveError::InvalidArgument {
            argument: "max_iter",
            reason: "must be at least 1",
        });
    }
    Ok(())
}

/// eigenvalues of a tensor without shear are its diagonal
#[inline]
pub(crate) fn diagonal(s: &StressTensor) -> Option<PrincipalStresses> {
    if s.s12 == 0.0 && s.s23 == 0.0 && s.s13 == 0.0 {
        Some(PrincipalStresses::from_unordered([s.s11, s.s22, s.s33]))
    } else {
        None
    }
}
