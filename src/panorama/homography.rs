use na::{DMatrix, DVector, Matrix3};

use crate::{Float, PanoramaError, Result};
use crate::image::features::{geometry::point::Point, matches::Match};
use crate::numerics::least_squares::solve_least_squares;

/// Number of correspondences that constrain the eight unknowns of a homography
pub const MINIMAL_SAMPLE_SIZE: usize = 4;

/// Maps homogeneous coordinates of image a to homogeneous coordinates of image b
pub type Homography = Matrix3<Float>;

pub fn translation_homography(dx: Float, dy: Float) -> Homography {
    Homography::new(1.0, 0.0, dx,
                    0.0, 1.0, dy,
                    0.0, 0.0, 1.0)
}

pub fn project_point(h: &Homography, p: &Point<Float>) -> Point<Float> {
    Point::from_homogeneous(&(h*p.to_homogeneous()))
}

/**
 * Least squares fit with h22 fixed to one. Each correspondence (x,y) -> (x',y') contributes
 *  x·h0 + y·h1 + h2 - x'·(x·h6 + y·h7) = x'
 *  x·h3 + y·h4 + h5 - y'·(x·h6 + y·h7) = y'
 */
#[allow(non_snake_case)]
pub fn compute_homography(matches: &[Match]) -> Result<Homography> {
    if matches.len() < MINIMAL_SAMPLE_SIZE {
        return Err(PanoramaError::TooFewCorrespondences { required: MINIMAL_SAMPLE_SIZE, provided: matches.len() });
    }

    let rows = 2*matches.len();
    let mut M = DMatrix::<Float>::zeros(rows, 8);
    let mut b = DVector::<Float>::zeros(rows);

    for (i, m) in matches.iter().enumerate() {
        let (x, y) = (m.p.x, m.p.y);
        let (x_prime, y_prime) = (m.q.x, m.q.y);
        let row_x = 2*i;
        let row_y = row_x + 1;

        M.row_mut(row_x).copy_from_slice(&[x, y, 1.0, 0.0, 0.0, 0.0, -x*x_prime, -y*x_prime]);
        M.row_mut(row_y).copy_from_slice(&[0.0, 0.0, 0.0, x, y, 1.0, -x*y_prime, -y*y_prime]);
        b[row_x] = x_prime;
        b[row_y] = y_prime;
    }

    let a = solve_least_squares(&M, &b)?;
    Ok(Homography::new(a[0], a[1], a[2],
                       a[3], a[4], a[5],
                       a[6], a[7], 1.0))
}

/**
 * Inverse scaled so that its last element is one.
 */
pub fn invert_homography(h: &Homography) -> Result<Homography> {
    let inverse = h.try_inverse().ok_or(PanoramaError::SingularHomography)?;
    let scale = inverse[(2, 2)];
    if scale.abs() < Float::EPSILON || !scale.is_finite() {
        return Err(PanoramaError::SingularHomography);
    }
    Ok(inverse/scale)
}
