/// Preset filter example
/// Applies every preset filter to a test image
use image::ImageReader;
use image_filter::PresetFilter;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    for filter in PresetFilter::all() {
        let output = filter.apply(&img)?;

        let filename = format!(
            "preset_{}.png",
            filter.name().to_lowercase().replace(' ', "_")
        );
        output.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All preset filters applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
