use serde::{Serialize, Deserialize};

use crate::Float;
use crate::image::Image;
use crate::image::features::{Feature, geometry::point::Point};

/// Side length of the square patch a descriptor is sampled from
pub const DESCRIPTOR_WINDOW: usize = 5;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Descriptor {
    pub location: Point<Float>,
    pub data: Vec<Float>
}

impl Descriptor {

    /**
     * Differences between the center sample and every sample of the surrounding window, per channel.
     * Layout is channel major, then dx, then dy. Subtracting the center makes the vector invariant to
     * additive brightness changes.
     */
    pub fn describe_index(image: &Image, index: usize) -> Descriptor {
        let x = (index % image.width()) as isize;
        let y = (index / image.width()) as isize;
        let half_window = (DESCRIPTOR_WINDOW / 2) as isize;

        let mut data = Vec::with_capacity(DESCRIPTOR_WINDOW*DESCRIPTOR_WINDOW*image.channels());
        for channel in 0..image.channels() {
            let center_value = image.get_pixel(x, y, channel);
            for dx in -half_window..half_window+1 {
                for dy in -half_window..half_window+1 {
                    data.push(center_value - image.get_pixel(x + dx, y + dy, channel));
                }
            }
        }

        Descriptor { location: Point::new(x as Float, y as Float), data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn l1_distance(&self, other: &Descriptor) -> Float {
        debug_assert_eq!(self.len(), other.len());
        self.data.iter().zip(other.data.iter()).map(|(a, b)| (a - b).abs()).sum()
    }
}

impl Feature for Descriptor {
    fn get_location(&self) -> Point<Float> { self.location }
}
