//! Sparse assembly and profile (skyline) solver for banded frame systems
//!
//! Frame stiffness matrices are banded once equations follow the node
//! numbering. The skyline solver stores each row from its first non-zero
//! column to the diagonal and factorizes in place.

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::{CooMatrix, CsrMatrix};

use crate::error::{FEAError, FEAResult};

/// Target of global matrix assembly
pub trait MatrixAssembler {
    /// Accumulate `value` at (`row`, `col`)
    fn add(&mut self, row: usize, col: usize, value: f64);
}

impl MatrixAssembler for DMatrix<f64> {
    #[inline]
    fn add(&mut self, row: usize, col: usize, value: f64) {
        self[(row, col)] += value;
    }
}

/// Sparse matrix builder using COO format
/// More efficient for incremental assembly
pub struct SparseMatrixBuilder {
    size: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl SparseMatrixBuilder {
    /// Create a new sparse matrix builder
    pub fn new(size: usize) -> Self {
        // 3 DOFs per node, ~4 connected nodes per node
        let estimated_nnz = size * 12;
        Self {
            size,
            entries: Vec::with_capacity(estimated_nnz),
        }
    }

    /// Convert to CSR format (duplicate entries are summed)
    pub fn to_csr(&self) -> CsrMatrix<f64> {
        let mut coo = CooMatrix::new(self.size, self.size);

        for &(row, col, val) in &self.entries {
            coo.push(row, col, val);
        }

        CsrMatrix::from(&coo)
    }

    /// Convert to dense matrix (for comparison/debugging)
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut mat = DMatrix::zeros(self.size, self.size);

        for &(row, col, val) in &self.entries {
            mat[(row, col)] += val;
        }

        mat
    }

    /// Number of stored (unmerged) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Matrix dimension
    pub fn size(&self) -> usize {
        self.size
    }
}

impl MatrixAssembler for SparseMatrixBuilder {
    #[inline]
    fn add(&mut self, row: usize, col: usize, value: f64) {
        if value != 0.0 {
            self.entries.push((row, col, value));
        }
    }
}

/// Profile (skyline) Cholesky solver for symmetric positive definite matrices
pub struct SkylineSolver {
    size: usize,
    // Row i stores columns first[i]..=i
    rows: Vec<Vec<f64>>,
    first: Vec<usize>,
    factored: bool,
}

impl SkylineSolver {
    /// Build the profile from the lower triangle of a CSR matrix
    pub fn from_csr(csr: &CsrMatrix<f64>) -> Self {
        let size = csr.nrows();

        let mut first: Vec<usize> = (0..size).collect();
        for (row, col, _) in csr.triplet_iter() {
            if col < first[row] {
                first[row] = col;
            }
        }

        let mut rows: Vec<Vec<f64>> = (0..size).map(|i| vec![0.0; i - first[i] + 1]).collect();
        for (row, col, &val) in csr.triplet_iter() {
            if col <= row {
                rows[row][col - first[row]] += val;
            }
        }

        Self {
            size,
            rows,
            first,
            factored: false,
        }
    }

    /// Number of stored profile entries
    pub fn profile_len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        let start = self.first[row];
        if col < start || col > row {
            return 0.0;
        }
        self.rows[row][col - start]
    }

    /// Factorize in place: A = L * Lᵀ
    pub fn factorize(&mut self) -> FEAResult<()> {
        for i in 0..self.size {
            let start_i = self.first[i];

            for j in start_i..i {
                let start = start_i.max(self.first[j]);
                let mut sum = 0.0;
                for k in start..j {
                    sum += self.get(i, k) * self.get(j, k);
                }
                let diag_j = self.get(j, j);
                let idx = j - start_i;
                self.rows[i][idx] = (self.rows[i][idx] - sum) / diag_j;
            }

            let mut sum = 0.0;
            for k in start_i..i {
                let val = self.get(i, k);
                sum += val * val;
            }
            let diag_idx = i - start_i;
            let diag = self.rows[i][diag_idx] - sum;
            if diag <= 0.0 || !diag.is_finite() {
                return Err(FEAError::NotPositiveDefinite(i));
            }
            self.rows[i][diag_idx] = diag.sqrt();
        }

        self.factored = true;
        Ok(())
    }

    /// Solve L * Lᵀ * x = b with the factorized profile
    pub fn solve(&self, b: &DVector<f64>) -> FEAResult<DVector<f64>> {
        if !self.factored {
            return Err(FEAError::InvalidInput(
                "skyline solver used before factorization".to_string(),
            ));
        }
        if b.len() != self.size {
            return Err(FEAError::InvalidInput(format!(
                "right-hand side has {} entries, system has {}",
                b.len(),
                self.size
            )));
        }

        let mut x = b.clone();

        // Forward substitution: L * y = b
        for i in 0..self.size {
            let mut sum = 0.0;
            for k in self.first[i]..i {
                sum += self.get(i, k) * x[k];
            }
            x[i] = (x[i] - sum) / self.get(i, i);
        }

        // Backward substitution: Lᵀ * x = y
        for i in (0..self.size).rev() {
            x[i] /= self.get(i, i);
            let xi = x[i];
            for k in self.first[i]..i {
                x[k] -= self.get(i, k) * xi;
            }
        }

        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn banded_spd(n: usize) -> SparseMatrixBuilder {
        let mut builder = SparseMatrixBuilder::new(n);
        for i in 0..n {
            builder.add(i, i, 4.0);
            if i + 1 < n {
                builder.add(i, i + 1, -1.0);
                builder.add(i + 1, i, -1.0);
            }
        }
        builder
    }

    #[test]
    fn test_sparse_builder_accumulates() {
        let mut builder = SparseMatrixBuilder::new(2);
        builder.add(0, 0, 1.0);
        builder.add(0, 0, 2.0);
        builder.add(1, 1, 0.0);
        assert_eq!(builder.nnz(), 2);
        let dense = builder.to_dense();
        assert_relative_eq!(dense[(0, 0)], 3.0);
        let csr = builder.to_csr();
        assert_eq!(csr.nnz(), 1);
    }

    #[test]
    fn test_skyline_matches_dense_solve() {
        let builder = banded_spd(8);
        let dense = builder.to_dense();
        let b = DVector::from_fn(8, |i, _| (i + 1) as f64);

        let mut skyline = SkylineSolver::from_csr(&builder.to_csr());
        skyline.factorize().unwrap();
        let x = skyline.solve(&b).unwrap();

        let expected = dense.lu().solve(&b).unwrap();
        assert_relative_eq!(x, expected, epsilon = 1e-12);
        assert_eq!(skyline.profile_len(), 8 + 7);
    }

    #[test]
    fn test_tiny_magnitudes_are_kept() {
        let mut builder = SparseMatrixBuilder::new(2);
        builder.add(0, 0, 2.0e-20);
        builder.add(0, 1, -1.0e-20);
        builder.add(1, 0, -1.0e-20);
        builder.add(1, 1, 2.0e-20);
        assert_eq!(builder.nnz(), 4);

        let mut skyline = SkylineSolver::from_csr(&builder.to_csr());
        skyline.factorize().unwrap();
        let x = skyline.solve(&DVector::from_vec(vec![1.0e-20, 0.0])).unwrap();
        assert_relative_eq!(x[0], 2.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(x[1], 1.0 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_skyline_rejects_indefinite() {
        let mut builder = SparseMatrixBuilder::new(2);
        builder.add(0, 0, 1.0);
        builder.add(1, 1, -1.0);
        let mut skyline = SkylineSolver::from_csr(&builder.to_csr());
        assert!(matches!(skyline.factorize(), Err(FEAError::NotPositiveDefinite(1))));
    }

    #[test]
    fn test_solve_requires_factorization() {
        let builder = banded_spd(3);
        let skyline = SkylineSolver::from_csr(&builder.to_csr());
        assert!(skyline.solve(&DVector::zeros(3)).is_err());
    }
}
