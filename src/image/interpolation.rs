use crate::image::Image;
use crate::Float;

pub fn nearest_sample(image: &Image, x: Float, y: Float, channel: usize) -> Float {
    image.get_pixel(x.round() as isize, y.round() as isize, channel)
}

/**
 * Distance weighted sum of the four surrounding samples. Bounds are clamped to the image, when both bounds
 * of an axis collapse onto the same index the axis is weighted 0.5/0.5.
 */
pub fn bilinear_sample(image: &Image, x: Float, y: Float, channel: usize) -> Float {
    let (x_bounds, x_weights) = axis_bounds_and_weights(x, image.width());
    let (y_bounds, y_weights) = axis_bounds_and_weights(y, image.height());

    let mut value = 0.0;
    for (y_bound, y_weight) in y_bounds.iter().zip(y_weights.iter()) {
        for (x_bound, x_weight) in x_bounds.iter().zip(x_weights.iter()) {
            value += image.get_pixel(*x_bound, *y_bound, channel)*x_weight*y_weight;
        }
    }
    value
}

fn axis_bounds_and_weights(coordinate: Float, size: usize) -> ([isize; 2], [Float; 2]) {
    let max_index = size as isize - 1;
    let lower = (coordinate.floor() as isize).clamp(0, max_index);
    let upper = (lower + 1).clamp(0, max_index);
    match lower == upper {
        true => ([lower, upper], [0.5, 0.5]),
        false => {
            // The weight of a bound is the distance to the opposite bound
            let distance_lower = coordinate - lower as Float;
            let distance_upper = upper as Float - coordinate;
            ([lower, upper], [distance_upper, distance_lower])
        }
    }
}

fn scale_to_original(new_index: usize, original_size: usize, new_size: usize) -> Float {
    (new_index as Float + 0.5)*(original_size as Float)/(new_size as Float) - 0.5
}

fn resize_with(image: &Image, width: usize, height: usize, sampler: fn(&Image, Float, Float, usize) -> Float) -> Image {
    let mut target = Image::empty(width, height, image.channels(), image.original_encoding);
    for channel in 0..image.channels() {
        for y in 0..height {
            let y_original = scale_to_original(y, image.height(), height);
            for x in 0..width {
                let x_original = scale_to_original(x, image.width(), width);
                target.set_pixel(x as isize, y as isize, channel, sampler(image, x_original, y_original, channel));
            }
        }
    }
    target
}

pub fn nearest_resize(image: &Image, width: usize, height: usize) -> Image {
    resize_with(image, width, height, nearest_sample)
}

pub fn bilinear_resize(image: &Image, width: usize, height: usize) -> Image {
    resize_with(image, width, height, bilinear_sample)
}
