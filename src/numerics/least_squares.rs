use na::{DMatrix, DVector};
use thiserror::Error;

use crate::Float;

/// Singular values below this fraction of the largest one count as zero
pub const RANK_TOLERANCE: Float = 1e-10;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeastSquaresError {
    #[error("{rows} equations for {unknowns} unknowns")]
    Underdetermined { rows: usize, unknowns: usize },
    #[error("rank {rank} is below the {unknowns} unknowns")]
    RankDeficient { rank: usize, unknowns: usize },
    #[error("right hand side has {provided} rows, expected {expected}")]
    DimensionMismatch { provided: usize, expected: usize },
    #[error("svd solve failed: {0}")]
    SolveFailed(String)
}

/**
 * Minimizes |M a - b|² with an SVD. Fails instead of returning a minimum norm solution when the
 * system does not pin down every unknown.
 */
#[allow(non_snake_case)]
pub fn solve_least_squares(M: &DMatrix<Float>, b: &DVector<Float>) -> Result<DVector<Float>, LeastSquaresError> {
    let rows = M.nrows();
    let unknowns = M.ncols();

    if b.nrows() != rows {
        return Err(LeastSquaresError::DimensionMismatch { provided: b.nrows(), expected: rows });
    }
    if rows < unknowns {
        return Err(LeastSquaresError::Underdetermined { rows, unknowns });
    }

    let svd = M.clone().svd(true, true);
    let largest_singular_value = svd.singular_values.max();
    if !largest_singular_value.is_finite() || largest_singular_value <= 0.0 {
        return Err(LeastSquaresError::RankDeficient { rank: 0, unknowns });
    }

    let eps = largest_singular_value*RANK_TOLERANCE;
    let rank = svd.rank(eps);
    if rank < unknowns {
        return Err(LeastSquaresError::RankDeficient { rank, unknowns });
    }

    svd.solve(b, eps).map_err(|e| LeastSquaresError::SolveFailed(e.to_string()))
}
