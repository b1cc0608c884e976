use na::DMatrix;
use crate::{Float,float};
use float::consts::PI;
use super::kernel::Kernel;


pub struct GaussKernel2D {
    kernel: DMatrix<Float>
}

impl GaussKernel2D {
    fn sample(std: Float, x: Float, y: Float) -> Float {
        let two_var = 2.0*std.powi(2);
        let exponent = (-(x.powi(2) + y.powi(2))/two_var).exp();
        exponent/(PI*two_var)
    }

    /**
     * Smallest odd width covering 6 standard deviations. Weights sum to one.
     */
    pub fn width_for_sigma(std: Float) -> usize {
        let width = (6.0*std).ceil() as usize;
        width + 1 - (width % 2)
    }

    pub fn new(std: Float) -> GaussKernel2D {
        assert!(std > 0.0, "sigma must be positive, got {}", std);
        let width = GaussKernel2D::width_for_sigma(std);
        let radius = ((width - 1)/2) as Float;
        let mut kernel = DMatrix::<Float>::from_fn(width, width, |r, c| GaussKernel2D::sample(std, c as Float - radius, r as Float - radius));
        let sum = kernel.sum();
        kernel /= sum;
        GaussKernel2D { kernel }
    }
}

impl Kernel for GaussKernel2D {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }
}
