extern crate panorama;

use panorama::{Float, GradientDirection};
use panorama::image::{Image, image_encoding::ImageEncoding};
use panorama::image::filter::{convolve, gradient, smooth, kernel::Kernel, gauss_kernel::GaussKernel2D, sobel_kernel::SobelKernel};

fn horizontal_ramp(width: usize, height: usize) -> Image {
    let buffer = (0..width*height).map(|i| (i % width) as Float).collect();
    Image::from_vec(width, height, 1, buffer, ImageEncoding::F64)
}

#[test]
fn gaussian_width_covers_six_sigma() {
    assert_eq!(GaussKernel2D::width_for_sigma(2.0), 13);
    assert_eq!(GaussKernel2D::width_for_sigma(1.0), 7);
    assert_eq!(GaussKernel2D::width_for_sigma(0.5), 3);
    assert_eq!(GaussKernel2D::width_for_sigma(1.1), 7);
}

#[test]
fn gaussian_is_normalized_and_symmetric() {
    let gauss = GaussKernel2D::new(1.5);
    let kernel = gauss.kernel();
    assert_eq!(gauss.radius(), 4);
    assert!((kernel.sum() - 1.0).abs() < 1e-12);
    assert!((kernel - kernel.transpose()).abs().max() < 1e-15);
    assert_eq!(kernel.imax(), 4*kernel.nrows() + 4);
}

#[test]
fn smoothing_preserves_constant_images() {
    let image = Image::from_vec(8, 6, 2, [vec![0.3; 48], vec![0.7; 48]].concat(), ImageEncoding::F64);
    let smoothed = smooth(&image, 2.0);
    assert_eq!(smoothed.channels(), 2);
    assert!((0..48).all(|i| (smoothed.buffer[i] - 0.3).abs() < 1e-12));
    assert!((48..96).all(|i| (smoothed.buffer[i] - 0.7).abs() < 1e-12));
}

#[test]
fn convolution_without_channel_preservation_sums_channels() {
    let image = Image::from_vec(5, 5, 2, [vec![1.0; 25], vec![2.0; 25]].concat(), ImageEncoding::F64);
    let summed = convolve(&image, &GaussKernel2D::new(1.0), false);
    assert_eq!(summed.channels(), 1);
    assert!(summed.buffer.iter().all(|v| (v - 3.0).abs() < 1e-12));
}

#[test]
fn sobel_response_of_ramp() {
    let ramp = horizontal_ramp(6, 5);
    let x_gradient = gradient(&ramp, GradientDirection::HORIZONTAL);
    let y_gradient = gradient(&ramp, GradientDirection::VERTICAL);

    for y in 0..5 {
        for x in 1..5 {
            assert_eq!(x_gradient.get_pixel(x, y, 0), 8.0);
        }
        // replicated border halves the difference
        assert_eq!(x_gradient.get_pixel(0, y, 0), 4.0);
        assert_eq!(x_gradient.get_pixel(5, y, 0), 4.0);
    }
    assert!(y_gradient.buffer.iter().all(|&v| v == 0.0));
}

#[test]
fn sobel_kernels_sum_to_zero() {
    for direction in [GradientDirection::HORIZONTAL, GradientDirection::VERTICAL] {
        assert_eq!(SobelKernel::new(direction).kernel().sum(), 0.0);
    }
}
