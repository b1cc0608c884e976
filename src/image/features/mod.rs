use crate::Float;
use self::geometry::point::Point;

pub mod geometry;
pub mod harris_corner;
pub mod descriptor;
pub mod matches;


pub trait Feature {
    fn get_location(&self) -> Point<Float>;
    fn get_x_image_float(&self) -> Float { self.get_location().x }
    fn get_y_image_float(&self) -> Float { self.get_location().y }
    fn get_x_image(&self) -> usize { self.get_x_image_float().trunc() as usize }
    fn get_y_image(&self) -> usize { self.get_y_image_float().trunc() as usize }
}
