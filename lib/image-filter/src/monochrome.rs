use crate::{Filter, FilterResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Grayscale filter configuration, delegating to `image::imageops::grayscale`
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GrayscaleConfig {
    #[derivative(Default(value = "true"))]
    keep_alpha: bool,
}

impl GrayscaleConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for GrayscaleConfig {
    fn apply(&self, image: &RgbaImage) -> FilterResult<RgbaImage> {
        let gray = image::imageops::grayscale(image);

        let mut output = image.clone();
        for (pixel, gray_pixel) in output.pixels_mut().zip(gray.pixels()) {
            let gray = gray_pixel.0[0];
            let alpha = if self.keep_alpha { pixel[3] } else { 255 };
            *pixel = image::Rgba([gray, gray, gray, alpha]);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_grayscale_channels_are_equal() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([200, 50, 100, 128]));
        let output = GrayscaleConfig::new().apply(&image).unwrap();

        for pixel in output.pixels() {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
            assert_eq!(pixel[3], 128);
        }
    }

    #[test]
    fn test_grayscale_drop_alpha() {
        let image = RgbaImage::from_pixel(2, 2, image::Rgba([200, 50, 100, 10]));
        let output = GrayscaleConfig::new()
            .with_keep_alpha(false)
            .apply(&image)
            .unwrap();

        assert!(output.pixels().all(|pixel| pixel[3] == 255));
    }
}
