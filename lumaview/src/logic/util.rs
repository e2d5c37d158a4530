//! Utility functions module
//!
//! Provides window management callbacks shared by the logic modules.

use crate::{config, global_util, slint_generatedAppWindow::AppWindow};
use slint::ComponentHandle;

/// Initializes utility functions
pub fn init(ui: &AppWindow) {
    let ui_weak = ui.as_weak();
    global_util!(ui).on_update_window_size(move || {
        let ui = ui_weak.unwrap();
        let preference = config::all().preference;

        let scale = ui.window().scale_factor();
        let psize = slint::PhysicalSize::from_logical(
            slint::LogicalSize {
                width: preference.win_width as f32,
                height: preference.win_height as f32,
            },
            scale,
        );
        ui.window().set_size(psize);
    });
}
