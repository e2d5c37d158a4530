//! LumaView
//!
//! A Slint desktop application that loads an image, applies one of a small
//! set of preset filters (grayscale, median blur, Laplacian edge detection),
//! displays the result, optionally saves it, and reports the image's
//! estimated gray level.
//!
//! # Architecture
//! - `config`: TOML configuration persisted under the platform config dir
//! - `logic`: UI callback wiring, one module per concern
//! - `lib/image-filter`: filter dispatch and the gray level estimator

slint::include_modules!();

#[macro_use]
extern crate derivative;

mod config;
mod logic;
mod version;

/// Initializes the logger.
///
/// Uses a custom format with timestamp, log level, file name, line number,
/// and log message. Uses local time format for timestamps.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Performs initialization tasks before UI creation.
///
/// # Tasks
/// - Initializes logger
/// - Loads configuration
/// - Sets XDG app ID on Linux
async fn ui_before() {
    init_logger();
    config::init();

    #[cfg(target_os = "linux")]
    {
        _ = slint::set_xdg_app_id("lumaview".to_string());
    }
}

/// Performs initialization tasks after UI creation.
///
/// # Parameters
/// - `ui`: Reference to the application window
fn ui_after(ui: &AppWindow) {
    logic::init(ui);
}

/// Main entry point for the desktop application.
pub async fn desktop_main() {
    log::debug!("start...");

    ui_before().await;
    let ui = AppWindow::new().unwrap();
    ui_after(&ui);

    global_util!(ui).invoke_update_window_size();

    ui.run().unwrap();

    log::debug!("exit...");
}
