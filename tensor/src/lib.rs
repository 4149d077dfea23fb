use na::{Matrix3, Vector3};
use nalgebra as na;

/// number of independent components of a symmetric 3x3 tensor
pub const N_COMPONENTS: usize = 6;

/// Symmetric stress tensor, only one value is stored per off-diagonal pair.
/// Component order follows the input columns: s11 s22 s33 s12 s23 s13
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StressTensor {
    pub s11: f64,
    pub s22: f64,
    pub s33: f64,
    pub s12: f64,
    pub s23: f64,
    pub s13: f64,
}

impl StressTensor {
    #[inline]
    pub fn new(s11: f64, s22: f64, s33: f64, s12: f64, s23: f64, s13: f64) -> Self {
        StressTensor {
            s11,
            s22,
            s33,
            s12,
            s23,
            s13,
        }
    }

    /// takes the first six values, `None` if there are fewer
    pub fn from_slice(s: &[f64]) -> Option<Self> {
        match s {
            [s11, s22, s33, s12, s23, s13, ..] => {
                Some(Self::new(*s11, *s22, *s33, *s12, *s23, *s13))
            }
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> [f64; N_COMPONENTS] {
        [self.s11, self.s22, self.s33, self.s12, self.s23, self.s13]
    }

    /// lower triangular storage, the strict upper part is zero
    /// ```text
    /// [ s11   .    .  ]
    /// [ s12  s22   .  ]
    /// [ s13  s23  s33 ]
    /// ```
    #[inline]
    pub fn lower(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.s11, 0.0, 0.0, //
            self.s12, self.s22, 0.0, //
            self.s13, self.s23, self.s33,
        )
    }

    #[inline]
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.s11, self.s12, self.s13, //
            self.s12, self.s22, self.s23, //
            self.s13, self.s23, self.s33,
        )
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.s11 + self.s22 + self.s33
    }

    /// coefficients (I1, I2, I3) of the characteristic polynomial
    /// λ³ - I1 λ² + I2 λ - I3
    pub fn invariants(&self) -> (f64, f64, f64) {
        let i1 = self.trace();
        let i2 = self.s11 * self.s22 + self.s22 * self.s33 + self.s33 * self.s11
            - self.s12 * self.s12
            - self.s23 * self.s23
            - self.s13 * self.s13;
        let i3 = self.matrix().determinant();
        (i1, i2, i3)
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|x| x.is_finite())
    }

    /// largest absolute component
    #[inline]
    pub fn amax(&self) -> f64 {
        self.as_array().iter().fold(0.0, |m, x| m.max(x.abs()))
    }

    /// every component divided by `k`
    #[inline]
    pub fn unscale(&self, k: f64) -> Self {
        let [s11, s22, s33, s12, s23, s13] = self.as_array().map(|x| x / k);
        Self::new(s11, s22, s33, s12, s23, s13)
    }
}

impl From<Matrix3<f64>> for StressTensor {
    /// reads the lower triangle only
    fn from(m: Matrix3<f64>) -> Self {
        StressTensor::new(
            m[(0, 0)],
            m[(1, 1)],
            m[(2, 2)],
            m[(1, 0)],
            m[(2, 1)],
            m[(2, 0)],
        )
    }
}

/// Eigenvalues of a [`StressTensor`], always p1 >= p2 >= p3.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrincipalStresses {
    p1: f64,
    p2: f64,
    p3: f64,
}

impl PrincipalStresses {
    /// sorts descending, NaN is ordered by `f64::total_cmp`
    pub fn from_unordered(mut w: [f64; 3]) -> Self {
        w.sort_by(|a, b| b.total_cmp(a));
        PrincipalStresses {
            p1: w[0],
            p2: w[1],
            p3: w[2],
        }
    }

    #[inline]
    pub fn p1(&self) -> f64 {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> f64 {
        self.p2
    }
    #[inline]
    pub fn p3(&self) -> f64 {
        self.p3
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.p1, self.p2, self.p3]
    }

    #[inline]
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.p1, self.p2, self.p3)
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.p1 + self.p2 + self.p3
    }

    /// same coefficients as [`StressTensor::invariants`], computed from the roots
    pub fn invariants(&self) -> (f64, f64, f64) {
        let (a, b, c) = (self.p1, self.p2, self.p3);
        (a + b + c, a * b + b * c + c * a, a * b * c)
    }

    /// multiplies by `k > 0`, which keeps the order
    #[inline]
    pub fn scale(&self, k: f64) -> Self {
        PrincipalStresses {
            p1: self.p1 * k,
            p2: self.p2 * k,
            p3: self.p3 * k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_needs_six() {
        assert!(StressTensor::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_none());
        let s = StressTensor::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(s, StressTensor::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn lower_layout() {
        let s = StressTensor::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let l = s.lower();
        assert_eq!(l[(0, 0)], 1.0);
        assert_eq!(l[(1, 0)], 4.0);
        assert_eq!(l[(1, 1)], 2.0);
        assert_eq!(l[(2, 0)], 6.0);
        assert_eq!(l[(2, 1)], 5.0);
        assert_eq!(l[(2, 2)], 3.0);
        assert_eq!(l[(0, 1)], 0.0);
        assert_eq!(l[(0, 2)], 0.0);
        assert_eq!(l[(1, 2)], 0.0);
        assert_eq!(StressTensor::from(l), s);
    }

    #[test]
    fn unscale_by_amax() {
        let s = StressTensor::new(1.0, -8.0, 2.0, 4.0, 0.0, -0.5);
        assert_eq!(s.amax(), 8.0);
        assert_eq!(
            s.unscale(s.amax()),
            StressTensor::new(0.125, -1.0, 0.25, 0.5, 0.0, -0.0625)
        );
    }

    #[test]
    fn matrix_is_symmetric() {
        let m = StressTensor::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).matrix();
        assert_eq!(m, m.transpose());
    }

    #[test]
    fn sorted_descending() {
        let p = PrincipalStresses::from_unordered([-1.0, 3.0, 2.0]);
        assert_eq!(p.as_array(), [3.0, 2.0, -1.0]);
        assert_eq!(p.scale(0.5).as_array(), [1.5, 1.0, -0.5]);
    }

    #[test]
    fn nan_does_not_panic() {
        let p = PrincipalStresses::from_unordered([1.0, f64::NAN, 2.0]);
        assert!(p.as_array().iter().any(|x| x.is_nan()));
    }
}
