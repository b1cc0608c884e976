use na::DMatrix;
use crate::{Float, GradientDirection};
use super::kernel::Kernel;


pub struct SobelKernel {
    kernel: DMatrix<Float>
}

impl SobelKernel {

    pub fn new(direction: GradientDirection) -> SobelKernel {
        let values = match direction {
            GradientDirection::HORIZONTAL => [-1.0, 0.0, 1.0,
                                              -2.0, 0.0, 2.0,
                                              -1.0, 0.0, 1.0],
            GradientDirection::VERTICAL => [-1.0, -2.0, -1.0,
                                             0.0,  0.0,  0.0,
                                             1.0,  2.0,  1.0]
        };
        SobelKernel {
            kernel: DMatrix::from_row_slice(3, 3, &values)
        }
    }
}

impl Kernel for SobelKernel {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }
}
