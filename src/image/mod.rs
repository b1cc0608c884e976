use image_rs::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use std::path::Path;

use crate::{Float, PanoramaError, Result};
use self::image_encoding::ImageEncoding;

pub mod image_encoding;
pub mod filter;
pub mod interpolation;
pub mod features;

/**
 * Planar multi channel image. Sample (x,y,c) lives at x + width*y + width*height*c.
 * Derived images are always fresh allocations.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    pub buffer: Vec<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn empty(width: usize, height: usize, channels: usize, original_encoding: ImageEncoding) -> Image {
        Image { width, height, channels, buffer: vec![0.0; width*height*channels], original_encoding }
    }

    pub fn from_vec(width: usize, height: usize, channels: usize, buffer: Vec<Float>, original_encoding: ImageEncoding) -> Image {
        assert_eq!(buffer.len(), width*height*channels, "buffer does not match {}x{}x{}", width, height, channels);
        Image { width, height, channels, buffer, original_encoding }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn channels(&self) -> usize { self.channels }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    fn index(&self, x: usize, y: usize, channel: usize) -> usize {
        x + self.width*y + self.width*self.height*channel
    }

    /**
     * Out of range coordinates are clamped to the closest edge pixel. The channel is not clamped.
     */
    pub fn get_pixel(&self, x: isize, y: isize, channel: usize) -> Float {
        assert!(channel < self.channels, "channel {} out of range for {} channels", channel, self.channels);
        let x_clamped = x.clamp(0, self.width as isize - 1) as usize;
        let y_clamped = y.clamp(0, self.height as isize - 1) as usize;
        self.buffer[self.index(x_clamped, y_clamped, channel)]
    }

    /**
     * Writes outside of the image are ignored.
     */
    pub fn set_pixel(&mut self, x: isize, y: isize, channel: usize, value: Float) -> () {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height && channel < self.channels {
            let idx = self.index(x as usize, y as usize, channel);
            self.buffer[idx] = value;
        }
    }

    pub fn add_scalar(&self, value: Float) -> Image {
        Image{ buffer: self.buffer.iter().map(|v| v + value).collect(), ..self.clone() }
    }

    /**
     * Rescales all samples into [0,1]. A constant image maps to zero.
     */
    pub fn feature_normalize(&self) -> Image {
        let min = self.buffer.iter().cloned().fold(Float::INFINITY, Float::min);
        let max = self.buffer.iter().cloned().fold(Float::NEG_INFINITY, Float::max);
        let range = max - min;
        let buffer = match range {
            r if r > 0.0 && r.is_finite() => self.buffer.iter().map(|v| (v - min)/r).collect(),
            _ => vec![0.0; self.buffer.len()]
        };
        Image{ buffer, ..self.clone() }
    }

    /**
     * Replicates a single channel image into three channels. Other images are copied.
     */
    pub fn to_rgb(&self) -> Image {
        match self.channels {
            1 => {
                let mut buffer = Vec::with_capacity(3*self.buffer.len());
                for _ in 0..3 {
                    buffer.extend_from_slice(&self.buffer);
                }
                Image::from_vec(self.width, self.height, 3, buffer, self.original_encoding)
            },
            _ => self.clone()
        }
    }

    pub fn open(path: &Path) -> Result<Image> {
        let dynamic_image = image_rs::open(path).map_err(|source| PanoramaError::OpenImage { path: path.to_path_buf(), source })?;
        Ok(Image::from_dynamic_image(&dynamic_image))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_dynamic_image()?.save(path)?;
        Ok(())
    }

    pub fn from_dynamic_image(dynamic_image: &DynamicImage) -> Image {
        match dynamic_image {
            DynamicImage::ImageLuma8(gray) => Image::from_gray_image(gray),
            DynamicImage::ImageLumaA8(_) => Image::from_gray_image(&dynamic_image.to_luma8()),
            DynamicImage::ImageLuma16(gray) => Image::from_luma16(gray),
            DynamicImage::ImageLumaA16(_) => Image::from_luma16(&dynamic_image.to_luma16()),
            DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => Image::from_rgb16(&dynamic_image.to_rgb16()),
            _ => Image::from_rgb_image(&dynamic_image.to_rgb8())
        }
    }

    pub fn from_gray_image(gray_image: &GrayImage) -> Image {
        let (width, height) = gray_image.dimensions();
        let encoding = ImageEncoding::U8;
        let buffer = gray_image.pixels().map(|p| encoding.normalize(p.0[0] as Float)).collect();
        Image::from_vec(width as usize, height as usize, 1, buffer, encoding)
    }

    pub fn from_rgb_image(rgb_image: &RgbImage) -> Image {
        Image::from_interleaved(rgb_image.dimensions(), rgb_image.as_raw().iter().map(|&v| v as Float), ImageEncoding::U8)
    }

    fn from_luma16(gray_image: &ImageBuffer<Luma<u16>, Vec<u16>>) -> Image {
        let (width, height) = gray_image.dimensions();
        let encoding = ImageEncoding::U16;
        let buffer = gray_image.pixels().map(|p| encoding.normalize(p.0[0] as Float)).collect();
        Image::from_vec(width as usize, height as usize, 1, buffer, encoding)
    }

    fn from_rgb16(rgb_image: &ImageBuffer<Rgb<u16>, Vec<u16>>) -> Image {
        Image::from_interleaved(rgb_image.dimensions(), rgb_image.as_raw().iter().map(|&v| v as Float), ImageEncoding::U16)
    }

    fn from_interleaved<I: Iterator<Item = Float>>((width, height): (u32, u32), samples: I, encoding: ImageEncoding) -> Image {
        let (width, height) = (width as usize, height as usize);
        let mut image = Image::empty(width, height, 3, encoding);
        for (i, value) in samples.enumerate() {
            let pixel = i / 3;
            let channel = i % 3;
            let idx = image.index(pixel % width, pixel / width, channel);
            image.buffer[idx] = encoding.normalize(value);
        }
        image
    }

    /**
     * One channel images become luma, three channel images rgb. Samples are expected in [0,1].
     */
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        let (width, height) = (self.width as u32, self.height as u32);
        match self.channels {
            1 => {
                let mut gray_image = GrayImage::new(width, height);
                for (x, y, pixel) in gray_image.enumerate_pixels_mut() {
                    *pixel = Luma([ImageEncoding::U8.denormalize(self.get_pixel(x as isize, y as isize, 0)) as u8]);
                }
                Ok(DynamicImage::ImageLuma8(gray_image))
            },
            3 => {
                let mut rgb_image = RgbImage::new(width, height);
                for (x, y, pixel) in rgb_image.enumerate_pixels_mut() {
                    let sample = |c: usize| ImageEncoding::U8.denormalize(self.get_pixel(x as isize, y as isize, c)) as u8;
                    *pixel = Rgb([sample(0), sample(1), sample(2)]);
                }
                Ok(DynamicImage::ImageRgb8(rgb_image))
            },
            c => Err(PanoramaError::UnsupportedChannels(c))
        }
    }
}
