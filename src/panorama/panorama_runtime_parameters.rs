use serde::{Serialize, Deserialize};
use std::fs;
use std::path::Path;

use crate::{Float, PanoramaError, Result};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PanoramaRuntimeParameters {
    /// Gaussian used to smooth the structure matrix
    pub sigma: Float,
    /// Minimum cornerness after suppression
    pub corner_threshold: Float,
    /// Half width of the non maximum suppression window
    pub nms_window: usize,
    /// Reprojection distance in pixels below which a match is an inlier
    pub inlier_threshold: Float,
    pub ransac_iterations: usize,
    /// RANSAC stops early once a homography has more inliers than this
    pub inlier_cutoff: usize,
    pub seed: u64,
    /// Project both images onto a cylinder of this radius before matching
    pub cylindrical_focal_length: Option<Float>
}

impl Default for PanoramaRuntimeParameters {
    fn default() -> Self {
        PanoramaRuntimeParameters {
            sigma: 2.0,
            corner_threshold: 5.0,
            nms_window: 3,
            inlier_threshold: 2.0,
            ransac_iterations: 10000,
            inlier_cutoff: 30,
            seed: 10,
            cylindrical_focal_length: None
        }
    }
}

impl PanoramaRuntimeParameters {

    pub fn from_yaml_str(yaml: &str) -> Result<PanoramaRuntimeParameters> {
        let parameters: PanoramaRuntimeParameters = serde_yaml::from_str(yaml)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<PanoramaRuntimeParameters> {
        PanoramaRuntimeParameters::from_yaml_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(PanoramaError::InvalidParams(format!("sigma must be positive, got {}", self.sigma)));
        }
        if !self.corner_threshold.is_finite() {
            return Err(PanoramaError::InvalidParams(format!("corner_threshold must be finite, got {}", self.corner_threshold)));
        }
        if !(self.inlier_threshold.is_finite() && self.inlier_threshold > 0.0) {
            return Err(PanoramaError::InvalidParams(format!("inlier_threshold must be positive, got {}", self.inlier_threshold)));
        }
        match self.cylindrical_focal_length {
            Some(f) if !(f.is_finite() && f > 0.0) => Err(PanoramaError::InvalidParams(format!("cylindrical_focal_length must be positive, got {}", f))),
            _ => Ok(())
        }
    }
}
