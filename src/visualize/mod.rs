use crate::Float;
use crate::image::Image;
use crate::image::features::{Feature, harris_corner::harris_corner_detector, matches::{Match, match_descriptors}};
use crate::panorama::homography::Homography;
use crate::panorama::ransac::partition_inliers;

const MARKER_HALF_LENGTH: isize = 9;
const INLIER_COLOR: [Float; 3] = [0.0, 1.0, 0.0];
const OUTLIER_COLOR: [Float; 3] = [1.0, 0.0, 0.0];
const MARKER_COLOR: [Float; 3] = [1.0, 0.0, 1.0];

/**
 * a and b next to each other on an rgb canvas of width a.width + b.width.
 */
pub fn both_images(image_a: &Image, image_b: &Image) -> Image {
    let rgb_a = image_a.to_rgb();
    let rgb_b = image_b.to_rgb();
    let width = rgb_a.width() + rgb_b.width();
    let height = rgb_a.height().max(rgb_b.height());
    let mut target_image = Image::empty(width, height, 3, image_a.original_encoding);

    for (source, x_offset) in [(&rgb_a, 0), (&rgb_b, rgb_a.width() as isize)] {
        for channel in 0..source.channels().min(3) {
            for y in 0..source.height() as isize {
                for x in 0..source.width() as isize {
                    target_image.set_pixel(x + x_offset, y, channel, source.get_pixel(x, y, channel));
                }
            }
        }
    }

    target_image
}

pub fn mark_spot(image: &mut Image, x: isize, y: isize) -> () {
    for i in -MARKER_HALF_LENGTH..MARKER_HALF_LENGTH+1 {
        for (channel, value) in MARKER_COLOR.iter().enumerate() {
            image.set_pixel(x + i, y, channel, *value);
            image.set_pixel(x, y + i, channel, *value);
        }
    }
}

pub fn mark_corners<F: Feature>(image: &Image, features: &[F]) -> Image {
    let mut target_image = image.to_rgb();
    for feature in features {
        mark_spot(&mut target_image, feature.get_x_image() as isize, feature.get_y_image() as isize);
    }
    target_image
}

pub fn draw_line(image: &mut Image, (x_start, y_start): (Float, Float), (x_end, y_end): (Float, Float), color: &[Float; 3]) -> () {
    let steps = (x_end - x_start).abs().max((y_end - y_start).abs()).ceil().max(1.0) as usize;
    for i in 0..steps+1 {
        let t = i as Float / steps as Float;
        let x = (x_start + t*(x_end - x_start)).round() as isize;
        let y = (y_start + t*(y_end - y_start)).round() as isize;
        for (channel, value) in color.iter().enumerate() {
            image.set_pixel(x, y, channel, *value);
        }
    }
}

/**
 * One line per match from p in a to q in b. The first `inliers` matches are drawn green, the rest red.
 */
pub fn draw_matches(image_a: &Image, image_b: &Image, matches: &[Match], inliers: usize) -> Image {
    let mut target_image = both_images(image_a, image_b);
    let x_offset = image_a.width() as Float;
    for (i, m) in matches.iter().enumerate() {
        let color = if i < inliers { &INLIER_COLOR } else { &OUTLIER_COLOR };
        draw_line(&mut target_image, (m.p.x, m.p.y), (m.q.x + x_offset, m.q.y), color);
    }
    target_image
}

pub fn draw_inliers(image_a: &Image, image_b: &Image, h: &Homography, matches: &[Match], threshold: Float) -> Image {
    let mut sorted_matches = matches.to_vec();
    let inliers = partition_inliers(h, &mut sorted_matches, threshold);
    draw_matches(image_a, image_b, &sorted_matches, inliers)
}

pub fn find_and_draw_matches(image_a: &Image, image_b: &Image, sigma: Float, threshold: Float, nms_window: usize) -> Image {
    let descriptors_a = harris_corner_detector(image_a, sigma, threshold, nms_window);
    let descriptors_b = harris_corner_detector(image_b, sigma, threshold, nms_window);
    let matches = match_descriptors(&descriptors_a, &descriptors_b);

    let marked_a = mark_corners(image_a, &descriptors_a);
    let marked_b = mark_corners(image_b, &descriptors_b);
    draw_matches(&marked_a, &marked_b, &matches, 0)
}
