use rand::Rng;
use rand::seq::SliceRandom;
use log::{debug, trace, warn};

use crate::Float;
use crate::image::features::matches::Match;
use crate::panorama::homography::{Homography, MINIMAL_SAMPLE_SIZE, compute_homography, project_point, translation_homography};

#[derive(Debug,Clone,PartialEq)]
pub struct RansacEstimate {
    pub homography: Homography,
    /// Matches within the threshold of `homography`. They form the prefix of the slice passed to `ransac`.
    pub inlier_count: usize,
    pub iterations: usize,
    /// False if no sample produced a valid homography. `homography` is then the identity.
    pub fitted: bool
}

pub fn reprojection_error(h: &Homography, m: &Match) -> Float {
    project_point(h, &m.p).distance(&m.q)
}

/**
 * Non finite reprojections are never inliers.
 */
pub fn is_inlier(h: &Homography, m: &Match, threshold: Float) -> bool {
    reprojection_error(h, m) < threshold
}

pub fn inlier_count(h: &Homography, matches: &[Match], threshold: Float) -> usize {
    matches.iter().filter(|m| is_inlier(h, m, threshold)).count()
}

/**
 * Reorders matches in place so that all inliers of h come first and returns their number n.
 * Afterwards matches[..n] are exactly the inliers and matches[n..] the outliers. The relative order
 * inside either part is not preserved.
 */
pub fn partition_inliers(h: &Homography, matches: &mut [Match], threshold: Float) -> usize {
    let mut count = matches.len();
    let mut i = 0;
    while i < count {
        if is_inlier(h, &matches[i], threshold) {
            i += 1;
        } else {
            count -= 1;
            matches.swap(i, count);
        }
    }
    count
}

/**
 * Random sample consensus over homographies fitted to MINIMAL_SAMPLE_SIZE matches.
 * A sample that beats the best inlier count so far is refined on all of its inliers, and the search stops
 * as soon as a refined homography has more than `cutoff` inliers.
 *
 * The match order is mutated: shuffled every iteration and, on return, partitioned so that the
 * inliers of the returned homography come first.
 */
pub fn ransac<R: Rng + ?Sized>(matches: &mut [Match], threshold: Float, iterations: usize, cutoff: usize, rng: &mut R) -> RansacEstimate {
    let mut best = 0;
    let mut best_homography = translation_homography(0.0, 0.0);
    let mut fitted = false;

    if matches.len() < MINIMAL_SAMPLE_SIZE {
        warn!("RANSAC needs at least {} matches, got {}", MINIMAL_SAMPLE_SIZE, matches.len());
        return RansacEstimate { homography: best_homography, inlier_count: 0, iterations: 0, fitted };
    }

    for iteration in 0..iterations {
        matches.shuffle(rng);
        let h = match compute_homography(&matches[..MINIMAL_SAMPLE_SIZE]) {
            Ok(h) => h,
            Err(e) => {
                trace!("iteration {}: rejected sample: {}", iteration, e);
                continue;
            }
        };

        let inliers = partition_inliers(&h, matches, threshold);
        if inliers <= best {
            continue;
        }
        best = inliers;

        let refined = match compute_homography(&matches[..inliers]) {
            Ok(refined) => refined,
            Err(e) => {
                trace!("iteration {}: refinement failed, keeping sample fit: {}", iteration, e);
                h
            }
        };
        best_homography = refined;
        fitted = true;

        let refined_inliers = partition_inliers(&refined, matches, threshold);
        if refined_inliers > cutoff {
            debug!("RANSAC reached {} inliers of {} after {} iterations", refined_inliers, matches.len(), iteration + 1);
            return RansacEstimate { homography: refined, inlier_count: refined_inliers, iterations: iteration + 1, fitted };
        }
    }

    let inlier_count = match fitted {
        true => partition_inliers(&best_homography, matches, threshold),
        false => 0
    };
    debug!("RANSAC finished {} iterations with {} inliers of {}", iterations, inlier_count, matches.len());
    RansacEstimate { homography: best_homography, inlier_count, iterations, fitted }
}
