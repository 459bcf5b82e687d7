//! Construction of the A*_n near-optimal covering-lattice generator from a
//! flat metric and a target mismatch.
//!
//! The construction follows Conway & Sloane's standard generator for the
//! dual lattice A*_n (*Sphere Packings, Lattices and Groups*, ch. 4 & 6):
//! work in the zero-sum hyperplane of `R^(n+1)`, where `A*_n` is spanned by
//! `g_i = e_i - J/(n+1)` for `i in 0..n` (`J` the all-ones vector), and
//! whose covering radius in that normalization has the closed form
//! `rho(n)^2 = n(n+2) / (12(n+1))`. Those `n` vectors are projected onto an
//! orthonormal (Helmert) basis of the hyperplane to get an `n x n` basis in
//! Euclidean `R^n`, which an orthogonal projection leaves isometric to the
//! ambient construction.
//!
//! Because every matrix here has order `D = 2 + s* <= 6`, the Cholesky
//! factorization of the flat metric and the subsequent triangular inverse
//! are plain dense loops rather than routed through a workspace-driven
//! decomposition meant for large dynamically-sized systems; see
//! `DESIGN.md`. Matrix storage reuses this corpus's dense matrix type,
//! `faer_core::Mat<f64>`.

use crate::error::ScanError;
use faer_core::Mat;

/// A lattice generating matrix in canonical coordinates: `D` basis row
/// vectors such that the lattice point for integer index `i` is `O +
/// i^T * G`.
#[derive(Clone, Debug)]
pub struct Generator {
    dim: usize,
    basis: Mat<f64>,
}

impl Generator {
    /// The dimension `D` of the canonical space this generator was built
    /// for.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `k`-th basis row vector.
    pub fn row(&self, k: usize) -> Vec<f64> {
        (0..self.dim).map(|j| self.basis.read(k, j)).collect()
    }

    /// The canonical point `origin + index^T * basis`.
    pub fn point(&self, origin: &[f64], index: &[i64]) -> Vec<f64> {
        let mut p = origin.to_vec();
        for k in 0..self.dim {
            if index[k] == 0 {
                continue;
            }
            let i_k = index[k] as f64;
            for j in 0..self.dim {
                p[j] += i_k * self.basis.read(k, j);
            }
        }
        p
    }
}

/// Build the A*_D covering-lattice generator for a `dim x dim` symmetric
/// positive-definite flat metric (row-major) and a target mismatch `mu >
/// 0`.
pub fn covering_generator(
    metric_row_major: &[f64],
    dim: usize,
    mismatch: f64,
) -> Result<Generator, ScanError> {
    if !(mismatch > 0.0) {
        return Err(ScanError::NonPositiveMismatch(mismatch));
    }
    if metric_row_major.len() != dim * dim {
        return Err(ScanError::DimensionMismatch {
            expected: dim * dim,
            found: metric_row_major.len(),
        });
    }

    let g = Mat::<f64>::with_dims(dim, dim, |r, c| metric_row_major[r * dim + c]);
    let l = cholesky_lower(&g, dim)?;
    let l_inv = invert_lower_triangular(&l, dim);
    let a_star = a_star_basis(dim);
    let rho = covering_radius_a_star(dim);
    let scale = mismatch.sqrt() / rho;

    // G = scale * A * L^-T, where L^-T[k][j] = l_inv[j][k].
    let basis = Mat::<f64>::with_dims(dim, dim, |i, j| {
        let mut acc = 0.0;
        for k in 0..dim {
            acc += a_star.read(i, k) * l_inv.read(j, k);
        }
        scale * acc
    });

    Ok(Generator { dim, basis })
}

/// In-place-style dense Cholesky: `g = L L^T`, `L` lower triangular.
/// Returns [`ScanError::NonPositiveDefiniteMetric`] if a diagonal pivot is
/// not strictly positive.
fn cholesky_lower(g: &Mat<f64>, dim: usize) -> Result<Mat<f64>, ScanError> {
    let mut l = Mat::<f64>::zeros(dim, dim);
    for i in 0..dim {
        for j in 0..=i {
            let mut sum = g.read(i, j);
            for k in 0..j {
                sum -= l.read(i, k) * l.read(j, k);
            }
            if i == j {
                if sum <= 0.0 {
                    return Err(ScanError::NonPositiveDefiniteMetric { index: i, value: sum });
                }
                l.write(i, j, sum.sqrt());
            } else {
                l.write(i, j, sum / l.read(j, j));
            }
        }
    }
    Ok(l)
}

/// Forward substitution, one column at a time, to invert a lower
/// triangular matrix.
fn invert_lower_triangular(l: &Mat<f64>, dim: usize) -> Mat<f64> {
    let mut inv = Mat::<f64>::zeros(dim, dim);
    for col in 0..dim {
        for i in 0..dim {
            let mut sum = if i == col { 1.0 } else { 0.0 };
            for k in 0..i {
                sum -= l.read(i, k) * inv.read(k, col);
            }
            inv.write(i, col, sum / l.read(i, i));
        }
    }
    inv
}

/// The closed-form covering radius of A*_n in the normalization used by
/// [`a_star_basis`].
fn covering_radius_a_star(n: usize) -> f64 {
    let n = n as f64;
    (n * (n + 2.0) / (12.0 * (n + 1.0))).sqrt()
}

/// The `n`-dimensional A*_n basis, obtained by projecting the `n`
/// generators `g_i = e_i - J/(n+1)` of the ambient `(n+1)`-dimensional
/// zero-sum hyperplane construction onto a Helmert orthonormal basis of
/// that hyperplane.
fn a_star_basis(n: usize) -> Mat<f64> {
    let inv_np1 = 1.0 / (n as f64 + 1.0);
    Mat::<f64>::with_dims(n, n, |i, col| {
        let k = col + 1;
        let denom = ((k * (k + 1)) as f64).sqrt();
        let mut dot = 0.0;
        for j in 0..=k {
            let g_ij = if j == i { 1.0 - inv_np1 } else { -inv_np1 };
            let h_kj = if j < k { 1.0 / denom } else { -(k as f64) / denom };
            dot += g_ij * h_kj;
        }
        dot
    })
}

#[cfg(test)]
mod tests;
