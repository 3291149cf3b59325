// src/utils/linear_algebra.rs

use nalgebra::{DMatrix, DVector};
use tracing::warn;

use crate::error::{DiffusionError, DiffusionResult};

/// Relative size below which an elimination denominator is reported as unstable.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// A tridiagonal linear system `A u = d` stored as three bands and a right-hand side.
///
/// Row `i` reads `sub[i] * u[i-1] + main[i] * u[i] + sup[i] * u[i+1] = rhs[i]`.
/// `sub[0]` and `sup[n-1]` are outside the matrix and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    pub sub: DVector<f64>,
    pub main: DVector<f64>,
    pub sup: DVector<f64>,
    pub rhs: DVector<f64>,
}

impl TridiagonalSystem {
    /// Creates a system from its bands, checking that all four have the same non-zero length.
    pub fn new(
        sub: DVector<f64>,
        main: DVector<f64>,
        sup: DVector<f64>,
        rhs: DVector<f64>,
    ) -> DiffusionResult<Self> {
        let system = TridiagonalSystem { sub, main, sup, rhs };
        system.check_bands()?;
        Ok(system)
    }

    fn check_bands(&self) -> DiffusionResult<()> {
        let n = self.rhs.len();
        if n == 0 {
            return Err(DiffusionError::EmptySystem);
        }
        for band in [&self.sub, &self.main, &self.sup] {
            if band.len() != n {
                return Err(DiffusionError::BandLengthMismatch {
                    expected: n,
                    actual: band.len(),
                });
            }
        }
        Ok(())
    }

    /// Expands the bands into a dense `N x N` matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.rhs.len();
        let mut matrix = DMatrix::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = self.main[i];
            if i > 0 {
                matrix[(i, i - 1)] = self.sub[i];
            }
            if i + 1 < n {
                matrix[(i, i + 1)] = self.sup[i];
            }
        }
        matrix
    }

    /// Solves the system with the Thomas algorithm, consuming the bands.
    ///
    /// Forward elimination overwrites the super-diagonal and right-hand side in place,
    /// back substitution then leaves the solution in the right-hand side vector.
    ///
    /// There is no pivoting. A singular or ill-conditioned system makes an elimination
    /// denominator vanish; this is logged as a warning and the arithmetic carries on,
    /// so the returned vector may then hold `inf` or `NaN`.
    ///
    /// # Returns
    ///
    /// * `Ok(DVector<f64>)` holding the solution at every row.
    /// * `Err` if the bands are empty or of unequal length.
    pub fn solve(self) -> DiffusionResult<DVector<f64>> {
        self.check_bands()?;
        let TridiagonalSystem {
            sub: a,
            main: b,
            sup: mut c,
            rhs: mut d,
        } = self;
        let n = d.len() - 1;

        check_pivot(0, b[0], b[0].abs() + c[0].abs());
        c[0] /= b[0];
        d[0] /= b[0];

        for i in 1..n {
            let denominator = b[i] - a[i] * c[i - 1];
            check_pivot(i, denominator, a[i].abs() + b[i].abs() + c[i].abs());
            c[i] /= denominator;
            d[i] = (d[i] - a[i] * d[i - 1]) / denominator;
        }

        if n > 0 {
            let denominator = b[n] - a[n] * c[n - 1];
            check_pivot(n, denominator, a[n].abs() + b[n].abs());
            d[n] = (d[n] - a[n] * d[n - 1]) / denominator;
        }

        for i in (0..n).rev() {
            d[i] -= c[i] * d[i + 1];
        }

        Ok(d)
    }
}

/// True when an elimination denominator is zero, non-finite, or tiny next to its row.
fn is_unstable_pivot(pivot: f64, scale: f64) -> bool {
    pivot == 0.0 || !pivot.is_finite() || pivot.abs() <= PIVOT_TOLERANCE * scale
}

fn check_pivot(row: usize, pivot: f64, scale: f64) {
    if is_unstable_pivot(pivot, scale) {
        warn!(row, pivot, "near-zero pivot in Thomas elimination, solution may be unstable");
    }
}

/// Assembles the finite-difference system for `d/dx(k du/dx) = f` with Dirichlet ends.
///
/// Face diffusivities are the arithmetic mean of the two neighbouring nodes. Interior rows
/// are scaled by the half-width of the control volume around each node, and the first and
/// last rows are identity rows carrying the boundary values.
///
/// # Arguments
///
/// * `grid` - Node positions, strictly increasing.
/// * `diffusivity` - Diffusion coefficient `k` at each node.
/// * `forcing` - Source term `f` at each node.
/// * `left_boundary` - Value imposed at the first node.
/// * `right_boundary` - Value imposed at the last node.
///
/// # Returns
///
/// * A `TridiagonalSystem` of size `N`, where `N` is the number of nodes.
pub fn build_diffusion_system(
    grid: &DVector<f64>,
    diffusivity: &DVector<f64>,
    forcing: &DVector<f64>,
    left_boundary: f64,
    right_boundary: f64,
) -> DiffusionResult<TridiagonalSystem> {
    let n = grid.len();
    if n < 2 {
        return Err(DiffusionError::InvalidGridPoints { num_grid_points: n });
    }
    for field in [diffusivity, forcing] {
        if field.len() != n {
            return Err(DiffusionError::BandLengthMismatch {
                expected: n,
                actual: field.len(),
            });
        }
    }

    let x = grid;
    let k = diffusivity;
    let mut a = DVector::<f64>::zeros(n);
    let mut b = DVector::<f64>::zeros(n);
    let mut c = DVector::<f64>::zeros(n);
    let mut d = DVector::<f64>::zeros(n);

    for i in 1..n - 1 {
        let west = 0.5 * (k[i] + k[i - 1]) / (x[i] - x[i - 1]);
        let east = 0.5 * (k[i + 1] + k[i]) / (x[i + 1] - x[i]);
        a[i] = west;
        b[i] = -east - west;
        c[i] = east;
        d[i] = forcing[i] * 0.5 * (x[i + 1] - x[i - 1]);
    }

    // Dirichlet rows
    b[0] = 1.0;
    d[0] = left_boundary;
    b[n - 1] = 1.0;
    d[n - 1] = right_boundary;

    Ok(TridiagonalSystem {
        sub: a,
        main: b,
        sup: c,
        rhs: d,
    })
}
