pub mod blur;
pub mod brightness;
pub mod edge;
pub mod monochrome;

use image::RgbaImage;
use num_enum::{IntoPrimitive, TryFromPrimitive};

pub type FilterResult<T> = Result<T, FilterError>;

#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Filter {
    fn apply(&self, image: &RgbaImage) -> FilterResult<RgbaImage>;
}

/// The preset filters offered by the viewer. `Original` leaves the image
/// untouched; the others delegate to `image`/`imageproc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PresetFilter {
    #[default]
    Original = 0,
    Grayscale,
    MedianBlur,
    Laplacian,
}

impl PresetFilter {
    pub fn name(&self) -> &'static str {
        match self {
            PresetFilter::Original => "Original",
            PresetFilter::Grayscale => "Grayscale",
            PresetFilter::MedianBlur => "Median Blur",
            PresetFilter::Laplacian => "Laplacian",
        }
    }

    pub fn all() -> &'static [PresetFilter] {
        &[
            PresetFilter::Original,
            PresetFilter::Grayscale,
            PresetFilter::MedianBlur,
            PresetFilter::Laplacian,
        ]
    }

    pub fn apply(&self, image: &RgbaImage) -> FilterResult<RgbaImage> {
        match self {
            PresetFilter::Original => Ok(image.clone()),
            PresetFilter::Grayscale => monochrome::GrayscaleConfig::new().apply(image),
            PresetFilter::MedianBlur => blur::MedianBlurConfig::new().apply(image),
            PresetFilter::Laplacian => edge::laplacian(image),
        }
    }
}
