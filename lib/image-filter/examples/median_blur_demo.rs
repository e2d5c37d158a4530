/// Median blur example
/// Demonstrates median blur with different aperture sizes
use image::ImageReader;
use image_filter::{Filter, blur::MedianBlurConfig};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    let apertures = [3, 5, 7, 9];

    for aperture in apertures {
        let output = MedianBlurConfig::new().with_aperture(aperture).apply(&img)?;

        let filename = format!("median_blur_a{}.png", aperture);
        output.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All median blurs applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
