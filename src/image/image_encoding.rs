use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ImageEncoding {
    U8,
    U16,
    F64
}

impl ImageEncoding {

    pub fn max_value(&self) -> Float {
        match self {
            ImageEncoding::U8 => 255.0,
            ImageEncoding::U16 => 65535.0,
            ImageEncoding::F64 => 1.0
        }
    }

    pub fn normalize(&self, value: Float) -> Float {
        value / self.max_value()
    }

    // Values outside of [0,1] saturate
    pub fn denormalize(&self, value: Float) -> Float {
        (value.clamp(0.0, 1.0) * self.max_value()).round()
    }
}
