use crate::{Filter, FilterError, FilterResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Median blur configuration, delegating to `imageproc::filter::median_filter`.
/// The aperture is the kernel edge length and must be odd and at least 3.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct MedianBlurConfig {
    #[derivative(Default(value = "5"))]
    aperture: u32,
}

impl MedianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for MedianBlurConfig {
    fn apply(&self, image: &RgbaImage) -> FilterResult<RgbaImage> {
        if self.aperture < 3 || self.aperture % 2 == 0 {
            return Err(FilterError::InvalidInput(format!(
                "median blur aperture must be odd and >= 3, got {}",
                self.aperture
            )));
        }

        log::debug!("median blur, aperture = {}", self.aperture);

        let radius = self.aperture / 2;
        Ok(imageproc::filter::median_filter(image, radius, radius))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_median_blur_removes_single_outlier() {
        let mut image = RgbaImage::from_pixel(5, 5, image::Rgba([100, 100, 100, 255]));
        image.put_pixel(2, 2, image::Rgba([255, 0, 0, 255]));

        let output = MedianBlurConfig::new().with_aperture(3).apply(&image).unwrap();

        assert_eq!(*output.get_pixel(2, 2), image::Rgba([100, 100, 100, 255]));
    }

    #[test]
    fn test_median_blur_rejects_bad_aperture() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));

        for aperture in [0, 1, 2, 4] {
            let result = MedianBlurConfig::new().with_aperture(aperture).apply(&image);
            assert!(matches!(result, Err(FilterError::InvalidInput(_))));
        }
    }
}
