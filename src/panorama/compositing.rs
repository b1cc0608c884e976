use log::warn;

use crate::{Float, PanoramaError, Result};
use crate::image::Image;
use crate::image::interpolation::bilinear_sample;
use crate::image::features::geometry::point::Point;
use crate::panorama::homography::{Homography, invert_homography, project_point};

/// Canvases wider or taller than this usually come from a broken homography
pub const MAX_CANVAS_DIMENSION: usize = 7000;
/// Slack for projected corners that land a rounding error past a pixel boundary
const EXTENT_EPSILON: Float = 1e-6;

/**
 * Canvas pixel (x,y) shows the point (x + offset_x, y + offset_y) of image a's frame.
 */
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct CanvasExtent {
    pub offset_x: isize,
    pub offset_y: isize,
    pub width: usize,
    pub height: usize
}

/**
 * Bounding box of image a and the outer corners of image b mapped into a's frame through the inverse of h.
 */
pub fn canvas_extent(a: &Image, b: &Image, h: &Homography) -> Result<CanvasExtent> {
    let h_inverse = invert_homography(h)?;
    let (b_width, b_height) = (b.width() as Float, b.height() as Float);
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(b_width, 0.0),
        Point::new(0.0, b_height),
        Point::new(b_width, b_height)
    ].map(|c| project_point(&h_inverse, &c));

    if corners.iter().any(|c| !c.is_finite()) {
        return Err(PanoramaError::SingularHomography);
    }

    let top_left = corners.iter().fold(Point::new(Float::INFINITY, Float::INFINITY), |acc, c| Point::new(acc.x.min(c.x), acc.y.min(c.y)));
    let bottom_right = corners.iter().fold(Point::new(Float::NEG_INFINITY, Float::NEG_INFINITY), |acc, c| Point::new(acc.x.max(c.x), acc.y.max(c.y)));

    let offset_x = (top_left.x.min(0.0) + EXTENT_EPSILON).floor();
    let offset_y = (top_left.y.min(0.0) + EXTENT_EPSILON).floor();
    let width = ((a.width() as Float).max(bottom_right.x) - EXTENT_EPSILON).ceil() - offset_x;
    let height = ((a.height() as Float).max(bottom_right.y) - EXTENT_EPSILON).ceil() - offset_y;

    if width > MAX_CANVAS_DIMENSION as Float || height > MAX_CANVAS_DIMENSION as Float {
        return Err(PanoramaError::CanvasTooLarge { width, height, limit: MAX_CANVAS_DIMENSION });
    }

    Ok(CanvasExtent { offset_x: offset_x as isize, offset_y: offset_y as isize, width: width as usize, height: height as usize })
}

/**
 * Pastes a onto a canvas covering both images, then overwrites every canvas pixel whose projection through h
 * lands inside b with the bilinear sample of b. The bound test is half open: 0 <= x < b.width, 0 <= y < b.height.
 */
pub fn try_combine_images(a: &Image, b: &Image, h: &Homography) -> Result<Image> {
    if a.channels() != b.channels() {
        return Err(PanoramaError::ChannelMismatch { a: a.channels(), b: b.channels() });
    }

    let extent = canvas_extent(a, b, h)?;
    let mut canvas = Image::empty(extent.width, extent.height, a.channels(), a.original_encoding);

    for channel in 0..a.channels() {
        for y in 0..a.height() as isize {
            for x in 0..a.width() as isize {
                canvas.set_pixel(x - extent.offset_x, y - extent.offset_y, channel, a.get_pixel(x, y, channel));
            }
        }
    }

    let (b_width, b_height) = (b.width() as Float, b.height() as Float);
    for y in 0..extent.height as isize {
        for x in 0..extent.width as isize {
            let in_a = Point::new((x + extent.offset_x) as Float, (y + extent.offset_y) as Float);
            let in_b = project_point(h, &in_a);
            if 0.0 <= in_b.x && in_b.x < b_width && 0.0 <= in_b.y && in_b.y < b_height {
                for channel in 0..b.channels() {
                    canvas.set_pixel(x, y, channel, bilinear_sample(b, in_b.x, in_b.y, channel));
                }
            }
        }
    }

    Ok(canvas)
}

/**
 * Like try_combine_images but falls back to a copy of a for degenerate homographies.
 * Mismatched channel counts are still an error.
 */
pub fn combine_images(a: &Image, b: &Image, h: &Homography) -> Result<Image> {
    match try_combine_images(a, b, h) {
        Ok(canvas) => Ok(canvas),
        Err(e @ PanoramaError::ChannelMismatch { .. }) => Err(e),
        Err(e) => {
            warn!("stitching aborted, returning first image: {}", e);
            Ok(a.clone())
        }
    }
}
