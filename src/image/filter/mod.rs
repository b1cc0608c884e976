use crate::image::Image;
use crate::{Float, GradientDirection};
use self::{kernel::Kernel, gauss_kernel::GaussKernel2D, sobel_kernel::SobelKernel};

pub mod gauss_kernel;
pub mod sobel_kernel;
pub mod kernel;


/**
 * 2D correlation of every channel with the kernel. Borders are replicated outwards by the kernel radius
 * so the output has the size of the input. Without channel preservation all channel responses are
 * summed into a single channel.
 */
pub fn convolve(source: &Image, filter_kernel: &dyn Kernel, preserve_channels: bool) -> Image {
    let kernel = filter_kernel.kernel();
    assert_eq!(kernel.nrows(), kernel.ncols(), "kernel has to be square");
    assert_eq!(kernel.ncols() % 2, 1, "kernel has to have odd width");

    let kernel_radius_signed = filter_kernel.radius() as isize;
    let width = source.width();
    let height = source.height();
    let target_channels = if preserve_channels { source.channels() } else { 1 };
    let mut target = Image::empty(width, height, target_channels, source.original_encoding);

    for channel in 0..source.channels() {
        let target_channel = if preserve_channels { channel } else { 0 };
        for y in 0..height as isize {
            for x in 0..width as isize {
                let mut acc = 0.0;
                for kernel_row in -kernel_radius_signed..kernel_radius_signed+1 {
                    for kernel_col in -kernel_radius_signed..kernel_radius_signed+1 {
                        let kernel_value = kernel[((kernel_row + kernel_radius_signed) as usize, (kernel_col + kernel_radius_signed) as usize)];
                        acc += kernel_value*source.get_pixel(x + kernel_col, y + kernel_row, channel);
                    }
                }
                let previous = target.get_pixel(x, y, target_channel);
                let value = if preserve_channels { acc } else { previous + acc };
                target.set_pixel(x, y, target_channel, value);
            }
        }
    }

    target
}

pub fn smooth(source: &Image, sigma: Float) -> Image {
    convolve(source, &GaussKernel2D::new(sigma), true)
}

/**
 * Single channel sobel response summed over all source channels.
 */
pub fn gradient(source: &Image, direction: GradientDirection) -> Image {
    convolve(source, &SobelKernel::new(direction), false)
}
