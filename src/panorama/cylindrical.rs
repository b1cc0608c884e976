use crate::Float;
use crate::image::Image;
use crate::image::interpolation::bilinear_sample;

/**
 * Projects the image onto a cylinder of radius focal_length (in pixels) around the image center and unrolls it.
 * Output pixels whose ray leaves the source image stay zero.
 */
pub fn cylindrical_project(image: &Image, focal_length: Float) -> Image {
    assert!(focal_length > 0.0, "focal length must be positive, got {}", focal_length);

    let mut target = Image::empty(image.width(), image.height(), image.channels(), image.original_encoding);
    let x_center = image.width() as Float / 2.0;
    let y_center = image.height() as Float / 2.0;
    let (width, height) = (image.width() as Float, image.height() as Float);

    for y in 0..image.height() {
        for x in 0..image.width() {
            let theta = (x as Float - x_center)/focal_length;
            let cylinder_height = (y as Float - y_center)/focal_length;
            let z = theta.cos();
            if z <= 0.0 {
                continue;
            }

            let x_source = focal_length*theta.sin()/z + x_center;
            let y_source = focal_length*cylinder_height/z + y_center;
            if 0.0 <= x_source && x_source < width && 0.0 <= y_source && y_source < height {
                for channel in 0..image.channels() {
                    target.set_pixel(x as isize, y as isize, channel, bilinear_sample(image, x_source, y_source, channel));
                }
            }
        }
    }

    target
}
