use std::path::PathBuf;
use thiserror::Error;

use crate::Float;
use crate::numerics::least_squares::LeastSquaresError;

#[derive(Error, Debug)]
pub enum PanoramaError {
    #[error("Need at least {required} correspondences, got {provided}")]
    TooFewCorrespondences { required: usize, provided: usize },
    #[error("Degenerate linear system: {0}")]
    DegenerateSystem(#[from] LeastSquaresError),
    #[error("Homography is not invertible")]
    SingularHomography,
    #[error("Canvas of {width}x{height} exceeds the limit of {limit}")]
    CanvasTooLarge { width: Float, height: Float, limit: usize },
    #[error("Channel mismatch: image a has {a} channels, image b has {b}")]
    ChannelMismatch { a: usize, b: usize },
    #[error("Invalid parameter(s) {0}")]
    InvalidParams(String),
    #[error("Unsupported channel count {0}")]
    UnsupportedChannels(usize),
    #[error("Could not open {}: {source}", path.display())]
    OpenImage { path: PathBuf, source: image_rs::ImageError },
    #[error(transparent)]
    ImageError(#[from] image_rs::ImageError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ConfigError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PanoramaError>;
