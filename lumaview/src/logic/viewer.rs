//! Image viewer logic module
//!
//! Owns the loaded image, runs preset filters and the gray level readout on
//! worker tasks, and feeds results back into the UI.

use crate::{
    config, global_store, logic_cb,
    logic::toast,
    slint_generatedAppWindow::{AppWindow, PresetFilterKind as UIPresetFilter},
    toast_warn,
};
use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use image_filter::{Filter, PresetFilter, blur::MedianBlurConfig, brightness};
use once_cell::sync::Lazy;
use slint::{ComponentHandle, Image, Rgba8Pixel, SharedPixelBuffer, Weak};
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// All mutable viewer state. Handed around explicitly instead of living in
/// scattered fields so every access point is visible.
#[derive(Default)]
struct ViewerState {
    source: Option<RgbaImage>,
    filtered: Option<RgbaImage>,
    filter: PresetFilter,
}

impl ViewerState {
    // the image currently on screen
    fn displayed(&self) -> Option<RgbaImage> {
        self.filtered.clone().or_else(|| self.source.clone())
    }
}

static VIEWER: Lazy<Mutex<ViewerState>> = Lazy::new(|| Mutex::new(ViewerState::default()));

crate::impl_c_like_enum_convert!(
    UIPresetFilter,
    PresetFilter,
    Original,
    Grayscale,
    MedianBlur,
    Laplacian
);

pub fn init(ui: &AppWindow) {
    logic_cb!(open_image, ui);
    logic_cb!(save_image, ui);
    logic_cb!(calc_gray_level, ui);
    logic_cb!(filter_changed, ui, filter);
}

fn open_image(ui: &AppWindow) {
    let ui = ui.as_weak();
    tokio::spawn(async move {
        let last_open_dir = config::all().viewer.last_open_dir;

        let mut dialog = native_dialog::DialogBuilder::file()
            .set_title("Choose an image")
            .add_filter("Images", &IMAGE_EXTENSIONS);

        if !last_open_dir.is_empty() {
            dialog = dialog.set_location(&last_open_dir);
        }

        let path = match dialog.open_single_file().show() {
            Ok(Some(path)) => path,
            Err(e) => {
                toast::async_toast_warn(ui, format!("Choose image failed. Reason: {e}"));
                return;
            }
            _ => return,
        };

        match load_image(&path) {
            Ok(img) => {
                remember_dir(&path, |config, dir| config.viewer.last_open_dir = dir);
                toast::async_toast_info(
                    ui.clone(),
                    format!("Loaded {}x{} image", img.width(), img.height()),
                );

                {
                    let mut state = VIEWER.lock().unwrap();
                    state.source = Some(img.clone());
                    state.filtered = None;
                    state.filter = PresetFilter::Original;
                }

                _ = ui.upgrade_in_event_loop(move |ui| {
                    render_image(&ui, &img);
                    global_store!(ui).set_image_loaded(true);
                    global_store!(ui).set_filter_index(0);
                    global_store!(ui).set_gray_level_text(slint::SharedString::default());
                });
            }
            Err(e) => toast::async_toast_warn(ui, format!("Load image failed. Reason: {e}")),
        }
    });
}

fn filter_changed(ui: &AppWindow, filter: UIPresetFilter) {
    let filter: PresetFilter = filter.into();

    let source = {
        let mut state = VIEWER.lock().unwrap();
        state.filter = filter;
        match state.source.clone() {
            Some(img) => img,
            None => return,
        }
    };

    let ui = ui.as_weak();
    tokio::spawn(async move {
        match apply_filter(filter, &source) {
            Ok(filtered) => {
                {
                    let mut state = VIEWER.lock().unwrap();

                    // a newer selection won; drop this result
                    if state.filter != filter {
                        return;
                    }

                    state.filtered = if filter == PresetFilter::Original {
                        None
                    } else {
                        Some(filtered.clone())
                    };
                }

                async_render_image(ui, filtered);
            }
            Err(e) => toast::async_toast_warn(ui, format!("Apply filter failed. Reason: {e}")),
        }
    });
}

fn save_image(ui: &AppWindow) {
    let Some(img) = VIEWER.lock().unwrap().displayed() else {
        toast_warn!(ui, "No image loaded");
        return;
    };

    let ui = ui.as_weak();
    tokio::spawn(async move {
        let last_save_dir = config::all().viewer.last_save_dir;

        let mut dialog = native_dialog::DialogBuilder::file()
            .set_title("Save image as")
            .set_filename(format!(
                "lumaview_{}.png",
                chrono::Local::now().format("%Y-%m-%dT%H-%M-%S")
            ))
            .add_filter("Images", &IMAGE_EXTENSIONS);

        if !last_save_dir.is_empty() {
            dialog = dialog.set_location(&last_save_dir);
        }

        let path = match dialog.save_single_file().show() {
            Ok(Some(path)) => path,
            Err(e) => {
                toast::async_toast_warn(ui, format!("Choose save path failed. Reason: {e}"));
                return;
            }
            _ => return,
        };

        match write_image(&img, &path) {
            Ok(()) => {
                remember_dir(&path, |config, dir| config.viewer.last_save_dir = dir);
                toast::async_toast_success(ui, "Save image successfully".to_string());
            }
            Err(e) => toast::async_toast_warn(ui, format!("Save image failed. Reason: {e}")),
        }
    });
}

fn calc_gray_level(ui: &AppWindow) {
    let Some(img) = VIEWER.lock().unwrap().source.clone() else {
        toast_warn!(ui, "No image loaded");
        return;
    };

    let ui = ui.as_weak();
    tokio::spawn(async move {
        match brightness::gray_level(&img) {
            Ok(score) => {
                _ = ui.upgrade_in_event_loop(move |ui| {
                    global_store!(ui).set_gray_level_text(slint::format!("{}", score));
                });
            }
            Err(e) => {
                toast::async_toast_warn(ui, format!("Calculate gray level failed. Reason: {e}"))
            }
        }
    });
}

fn apply_filter(filter: PresetFilter, image: &RgbaImage) -> image_filter::FilterResult<RgbaImage> {
    match filter {
        PresetFilter::MedianBlur => MedianBlurConfig::new()
            .with_aperture(config::all().viewer.median_aperture)
            .apply(image),
        _ => filter.apply(image),
    }
}

fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("open {:?} failed", path))?
        .decode()
        .with_context(|| format!("decode {:?} failed", path))?;

    Ok(img.to_rgba8())
}

fn write_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let (path, format) = match ext.as_str() {
        "jpg" | "jpeg" => (path.to_path_buf(), ImageFormat::Jpeg),
        "bmp" => (path.to_path_buf(), ImageFormat::Bmp),
        "gif" => (path.to_path_buf(), ImageFormat::Gif),
        "png" => (path.to_path_buf(), ImageFormat::Png),
        _ => (path.with_extension("png"), ImageFormat::Png),
    };

    match format {
        // these encoders reject RGBA input
        ImageFormat::Jpeg | ImageFormat::Bmp => DynamicImage::ImageRgba8(img.clone())
            .to_rgb8()
            .save_with_format(&path, format)?,
        _ => img.save_with_format(&path, format)?,
    }

    log::info!("saved {:?}", path);
    Ok(())
}

fn remember_dir(path: &Path, set: impl FnOnce(&mut config::Config, String)) {
    if let Some(dir) = path.parent().map(PathBuf::from) {
        let mut all = config::all();
        set(&mut all, dir.to_string_lossy().to_string());
        _ = config::save(all);
    }
}

fn render_image(ui: &AppWindow, img: &RgbaImage) {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(img.as_raw(), img.width(), img.height());
    global_store!(ui).set_current_image(Image::from_rgba8(buffer));
}

fn async_render_image(ui: Weak<AppWindow>, img: RgbaImage) {
    _ = ui.upgrade_in_event_loop(move |ui| {
        render_image(&ui, &img);
    });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_viewer_state_displayed_prefers_filtered() {
        let source = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
        let filtered = RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]));

        let state = ViewerState {
            source: Some(source.clone()),
            filtered: Some(filtered.clone()),
            filter: PresetFilter::Grayscale,
        };
        assert_eq!(state.displayed().unwrap(), filtered);

        let state = ViewerState {
            source: Some(source.clone()),
            filtered: None,
            filter: PresetFilter::Original,
        };
        assert_eq!(state.displayed().unwrap(), source);

        assert!(ViewerState::default().displayed().is_none());
    }

    #[test]
    fn test_write_image_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));

        write_image(&img, &dir.path().join("out.unknown")).unwrap();
        assert!(dir.path().join("out.png").exists());
    }

    #[test]
    fn test_write_image_converts_rgba_for_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 128]));

        let path = dir.path().join("out.jpg");
        write_image(&img, &path).unwrap();
        assert!(path.exists());
    }
}
