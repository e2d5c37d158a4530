/// Gray level example
/// Prints the estimated gray level of a test image and of its filtered outputs
use anyhow::Result;
use image::ImageReader;
use image_filter::{PresetFilter, brightness};
use std::path::Path;

fn main() -> Result<()> {
    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    println!("gray level = {}", brightness::gray_level(&img)?);

    for filter in PresetFilter::all() {
        let output = filter.apply(&img)?;
        println!(
            "gray level after {} = {}",
            filter.name(),
            brightness::gray_level(&output)?
        );
    }

    Ok(())
}
