//! Natural cubic spline interpolation.
//!
//! Second derivatives at the knots come from a tridiagonal solve with both
//! end moments pinned to zero. Evaluation outside the knot range continues
//! the outermost cubic piece.

use crate::{LineScreenError, Result};

/// Interpolating natural cubic spline through `(knots[i], values[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    /// Second derivative at each knot.
    moments: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural spline. Knots must be strictly increasing.
    pub fn natural(knots: &[f64], values: &[f64]) -> Result<Self> {
        if knots.len() != values.len() {
            return Err(LineScreenError::SplineLength {
                knots: knots.len(),
                values: values.len(),
            });
        }
        let n = knots.len();
        if n < 2 {
            return Err(LineScreenError::SplineTooFewKnots(n));
        }
        if let Some(i) = knots.windows(2).position(|w| w[1] <= w[0]) {
            return Err(LineScreenError::SplineKnotOrder(i + 1));
        }

        let mut moments = vec![0.0; n];
        if n > 2 {
            let m = n - 2;
            let mut sub = vec![0.0; m];
            let mut diag = vec![0.0; m];
            let mut sup = vec![0.0; m];
            let mut rhs = vec![0.0; m];
            for row in 0..m {
                let i = row + 1;
                let h0 = knots[i] - knots[i - 1];
                let h1 = knots[i + 1] - knots[i];
                sub[row] = h0;
                diag[row] = 2.0 * (h0 + h1);
                sup[row] = h1;
                rhs[row] =
                    6.0 * ((values[i + 1] - values[i]) / h1 - (values[i] - values[i - 1]) / h0);
            }
            let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs);
            moments[1..n - 1].copy_from_slice(&interior);
        }

        Ok(Self {
            knots: knots.to_vec(),
            values: values.to_vec(),
            moments,
        })
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let i = self.interval(x);
        let (x0, x1) = (self.knots[i], self.knots[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);
        let (m0, m1) = (self.moments[i], self.moments[i + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;
        (m0 * a * a * a + m1 * b * b * b) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }

    /// Evaluate at every point of `xs`.
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Index of the piece used for `x`, clamped to the outer pieces.
    fn interval(&self, x: f64) -> usize {
        let last = self.knots.len() - 2;
        self.knots
            .partition_point(|&k| k <= x)
            .saturating_sub(1)
            .min(last)
    }
}

/// Solve a tridiagonal system with the Thomas algorithm.
///
/// `sub[0]` and `sup[len - 1]` are ignored. The system must be diagonally
/// dominant, which holds for spline moment equations.
pub fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    if n == 0 {
        return Vec::new();
    }
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];
    c[0] = sup[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - sub[i] * c[i - 1];
        c[i] = sup[i] / denom;
        d[i] = (rhs[i] - sub[i] * d[i - 1]) / denom;
    }
    let mut x = vec![0.0; n];
    x[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d[i] - c[i] * x[i + 1];
    }
    x
}
