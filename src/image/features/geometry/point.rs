use na::Vector3;
use serde::{Serialize, Deserialize};
use crate::Float;


#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Point<T> where T: PartialOrd + PartialEq {
    pub x: T,
    pub y: T
}

impl<T> Point<T> where T: PartialOrd + PartialEq {
    pub fn new(x: T, y:T) -> Point<T> {
        Point{x,y}
    }
}

impl Point<Float> {
    pub fn distance(&self, other: &Point<Float>) -> Float {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_homogeneous(&self) -> Vector3<Float> {
        Vector3::new(self.x, self.y, 1.0)
    }

    /**
     * Divides by the third coordinate. A point at infinity yields non finite coordinates.
     */
    pub fn from_homogeneous(v: &Vector3<Float>) -> Point<Float> {
        Point::new(v[0]/v[2], v[1]/v[2])
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
