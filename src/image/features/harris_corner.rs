use na::Matrix2;
use log::debug;

use crate::image::Image;
use crate::image::filter::{gradient, smooth};
use crate::image::features::descriptor::Descriptor;
use crate::{Float, GradientDirection};

/// Sensitivity of the cornerness score to the trace of the structure tensor
pub const HARRIS_ALPHA: Float = 0.06;
/// Value written to responses that are not local maxima
pub const SUPPRESSED_RESPONSE: Float = -999999.0;

/**
 * Channel 0 = Ix², channel 1 = Iy², channel 2 = IxIy, smoothed by a gaussian of the given sigma.
 */
pub fn structure_matrix(image: &Image, sigma: Float) -> Image {
    let x_gradient = gradient(image, GradientDirection::HORIZONTAL);
    let y_gradient = gradient(image, GradientDirection::VERTICAL);

    let mut products = Image::empty(image.width(), image.height(), 3, image.original_encoding);
    for y in 0..image.height() as isize {
        for x in 0..image.width() as isize {
            let ix = x_gradient.get_pixel(x, y, 0);
            let iy = y_gradient.get_pixel(x, y, 0);
            products.set_pixel(x, y, 0, ix*ix);
            products.set_pixel(x, y, 1, iy*iy);
            products.set_pixel(x, y, 2, ix*iy);
        }
    }

    smooth(&products, sigma)
}

pub fn harris_matrix(structure: &Image, x: isize, y: isize) -> Matrix2<Float> {
    let ixx = structure.get_pixel(x, y, 0);
    let iyy = structure.get_pixel(x, y, 1);
    let ixy = structure.get_pixel(x, y, 2);
    Matrix2::new(ixx, ixy,
                 ixy, iyy)
}

pub fn harris_response(harris_matrix: &Matrix2<Float>, k: Float) -> Float {
    let determinant = harris_matrix.determinant();
    let trace = harris_matrix.trace();
    determinant - k*trace.powi(2)
}

pub fn cornerness_response(structure: &Image) -> Image {
    let mut response = Image::empty(structure.width(), structure.height(), 1, structure.original_encoding);
    for y in 0..structure.height() as isize {
        for x in 0..structure.width() as isize {
            let value = harris_response(&harris_matrix(structure, x, y), HARRIS_ALPHA);
            response.set_pixel(x, y, 0, value);
        }
    }
    response
}

/**
 * Every response with a strictly larger neighbour inside the (2*window+1)² neighbourhood is replaced by
 * SUPPRESSED_RESPONSE in the returned copy. Ties survive. Neighbours are always read from the input.
 */
pub fn non_maximum_suppression(response: &Image, window: usize) -> Image {
    let mut suppressed = response.clone();
    let width = response.width() as isize;
    let height = response.height() as isize;
    let window = window as isize;

    for y in 0..height {
        let row_start = (y - window).max(0);
        let row_end = (y + window).min(height - 1);
        for x in 0..width {
            let col_start = (x - window).max(0);
            let col_end = (x + window).min(width - 1);
            let center = response.get_pixel(x, y, 0);
            let has_larger_neighbour = (row_start..row_end+1)
                .flat_map(|row| (col_start..col_end+1).map(move |col| (col, row)))
                .filter(|&(col, row)| col != x || row != y)
                .any(|(col, row)| response.get_pixel(col, row, 0) > center);
            if has_larger_neighbour {
                suppressed.set_pixel(x, y, 0, SUPPRESSED_RESPONSE);
            }
        }
    }

    suppressed
}

/**
 * Detects corners whose suppressed response exceeds the threshold and describes them on the source image.
 * Suppressed pixels are never corners, whatever the threshold.
 * Descriptors are returned in row major scan order.
 */
pub fn harris_corner_detector(image: &Image, sigma: Float, threshold: Float, nms_window: usize) -> Vec<Descriptor> {
    let structure = structure_matrix(image, sigma);
    let response = cornerness_response(&structure);
    let suppressed = non_maximum_suppression(&response, nms_window);

    let descriptors = suppressed.buffer.iter()
        .enumerate()
        .filter(|&(_, &value)| value > threshold && value != SUPPRESSED_RESPONSE)
        .map(|(index, _)| Descriptor::describe_index(image, index))
        .collect::<Vec<Descriptor>>();

    debug!("detected {} corners in {}x{} image", descriptors.len(), image.width(), image.height());
    descriptors
}
