extern crate image as image_rs;
extern crate nalgebra as na;

pub mod error;
pub mod image;
pub mod numerics;
pub mod panorama;
pub mod visualize;

pub use self::error::{PanoramaError, Result};

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum GradientDirection {
    HORIZONTAL,
    VERTICAL
}
