use rand::SeedableRng;
use rand::rngs::SmallRng;
use log::{info, warn};
use std::borrow::Cow;

use crate::{PanoramaError, Result};
use crate::image::Image;
use crate::image::features::{descriptor::Descriptor, harris_corner::harris_corner_detector, matches::{Match, match_descriptors}};
use self::compositing::try_combine_images;
use self::cylindrical::cylindrical_project;
use self::homography::Homography;
use self::panorama_runtime_parameters::PanoramaRuntimeParameters;
use self::ransac::ransac;

pub mod homography;
pub mod ransac;
pub mod compositing;
pub mod cylindrical;
pub mod panorama_runtime_parameters;

#[derive(Debug,Clone)]
pub struct Panorama {
    pub image: Image,
    /// None if no homography could be estimated and `image` is a copy of the first input
    pub homography: Option<Homography>,
    /// Inliers of `homography` first
    pub matches: Vec<Match>,
    pub inlier_count: usize
}

pub struct FeatureMatches {
    pub descriptors_a: Vec<Descriptor>,
    pub descriptors_b: Vec<Descriptor>,
    pub matches: Vec<Match>
}

/**
 * Applies the optional cylindrical projection of the runtime parameters.
 */
pub fn prepare_image<'a>(image: &'a Image, runtime_parameters: &PanoramaRuntimeParameters) -> Cow<'a, Image> {
    match runtime_parameters.cylindrical_focal_length {
        Some(focal_length) => Cow::Owned(cylindrical_project(image, focal_length)),
        None => Cow::Borrowed(image)
    }
}

pub fn find_matches(a: &Image, b: &Image, runtime_parameters: &PanoramaRuntimeParameters) -> FeatureMatches {
    let descriptors_a = harris_corner_detector(a, runtime_parameters.sigma, runtime_parameters.corner_threshold, runtime_parameters.nms_window);
    let descriptors_b = harris_corner_detector(b, runtime_parameters.sigma, runtime_parameters.corner_threshold, runtime_parameters.nms_window);
    let matches = match_descriptors(&descriptors_a, &descriptors_b);
    FeatureMatches { descriptors_a, descriptors_b, matches }
}

/**
 * Stitches b onto a. Degenerate configurations fall back to an unmodified copy of a, even when the images
 * were projected onto a cylinder for matching. Only invalid parameters and images with different channel
 * counts are errors.
 */
pub fn panorama_image(a: &Image, b: &Image, runtime_parameters: &PanoramaRuntimeParameters) -> Result<Panorama> {
    runtime_parameters.validate()?;
    if a.channels() != b.channels() {
        return Err(PanoramaError::ChannelMismatch { a: a.channels(), b: b.channels() });
    }

    let prepared_a = prepare_image(a, runtime_parameters);
    let prepared_b = prepare_image(b, runtime_parameters);

    let FeatureMatches { descriptors_a, descriptors_b, mut matches } = find_matches(&prepared_a, &prepared_b, runtime_parameters);
    info!("{} corners in a, {} corners in b, {} matches", descriptors_a.len(), descriptors_b.len(), matches.len());

    let mut rng = SmallRng::seed_from_u64(runtime_parameters.seed);
    let estimate = ransac(&mut matches, runtime_parameters.inlier_threshold, runtime_parameters.ransac_iterations, runtime_parameters.inlier_cutoff, &mut rng);

    if !estimate.fitted {
        warn!("no homography found, returning first image");
        return Ok(Panorama { image: a.clone(), homography: None, matches, inlier_count: 0 });
    }

    info!("homography with {} inliers after {} iterations", estimate.inlier_count, estimate.iterations);
    let image = match try_combine_images(&prepared_a, &prepared_b, &estimate.homography) {
        Ok(canvas) => canvas,
        Err(e @ PanoramaError::ChannelMismatch { .. }) => return Err(e),
        Err(e) => {
            warn!("stitching aborted, returning first image: {}", e);
            a.clone()
        }
    };
    Ok(Panorama { image, homography: Some(estimate.homography), matches, inlier_count: estimate.inlier_count })
}
