use crate::FilterResult;
use image::RgbaImage;

/// Laplacian edge detection, delegating to `imageproc::filter::laplacian_filter`
/// on the grayscale projection. The signed response is clamped to `[0, 255]`
/// and fanned back out to all three color channels; alpha is preserved.
pub fn laplacian(image: &RgbaImage) -> FilterResult<RgbaImage> {
    let gray = image::imageops::grayscale(image);
    let response = imageproc::filter::laplacian_filter(&gray);

    let mut output = image.clone();
    for (pixel, edge_pixel) in output.pixels_mut().zip(response.pixels()) {
        let edge = edge_pixel.0[0].clamp(0, 255) as u8;
        *pixel = image::Rgba([edge, edge, edge, pixel[3]]);
    }

    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_laplacian_flat_image_has_no_response() {
        let image = RgbaImage::from_pixel(8, 8, image::Rgba([90, 90, 90, 255]));
        let output = laplacian(&image).unwrap();

        for pixel in output.pixels() {
            assert_eq!(pixel[0], 0);
            assert_eq!(pixel[1], 0);
            assert_eq!(pixel[2], 0);
        }
    }

    #[test]
    fn test_laplacian_responds_to_step_edge() {
        let image = RgbaImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                image::Rgba([0, 0, 0, 255])
            } else {
                image::Rgba([255, 255, 255, 255])
            }
        });

        let output = laplacian(&image).unwrap();
        assert!(output.pixels().any(|pixel| pixel[0] > 0));
    }

    #[test]
    fn test_laplacian_preserves_alpha() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 77]));
        let output = laplacian(&image).unwrap();

        assert!(output.pixels().all(|pixel| pixel[3] == 77));
    }
}
