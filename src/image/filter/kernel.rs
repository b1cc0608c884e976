use na::DMatrix;
use crate::Float;

pub trait Kernel {
    // Square filter with an odd side length, indexed (row,col)
    fn kernel(&self) -> &DMatrix<Float>;
    // Half of the width of the kernel save the center element
    fn radius(&self) -> usize {
        (self.kernel().ncols()-1)/2
    }
}
