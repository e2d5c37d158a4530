use crate::{
    config, global_logic, global_store,
    slint_generatedAppWindow::{AppWindow, Theme},
    toast_success,
};
use slint::ComponentHandle;

pub fn init(ui: &AppWindow) {
    init_setting(ui);

    let ui_weak = ui.as_weak();
    global_logic!(ui).on_set_setting_preference(move |mut setting| {
        let ui = ui_weak.unwrap();

        let font_size = u32::min(50, u32::max(10, setting.font_size.parse().unwrap_or(16)));
        setting.font_size = slint::format!("{}", font_size);

        let mut all = config::all();
        all.preference.win_width =
            u32::max(500, setting.win_width.to_string().parse().unwrap_or(500));
        all.preference.win_height =
            u32::max(500, setting.win_height.to_string().parse().unwrap_or(500));
        all.preference.font_size = font_size;
        all.preference.font_family = setting.font_family.clone().into();
        all.preference.is_dark = setting.is_dark;
        _ = config::save(all);

        global_store!(ui).set_setting_preference(setting);
        ui.global::<Theme>()
            .invoke_set_dark(config::all().preference.is_dark);
        ui.global::<Theme>().set_default_font_size(font_size as f32);

        if !ui.window().is_maximized() {
            ui.global::<crate::Util>().invoke_update_window_size();
        }

        toast_success!(ui, "save configuration successfully");
    });

    let ui_weak = ui.as_weak();
    global_logic!(ui).on_increase_font_size(move || {
        let ui = ui_weak.unwrap();
        let mut all = config::all();

        let font_size = u32::min(50, u32::max(10, all.preference.font_size + 1));
        all.preference.font_size = font_size;
        _ = config::save(all);

        let mut setting = global_store!(ui).get_setting_preference();
        setting.font_size = slint::format!("{}", font_size);
        global_store!(ui).set_setting_preference(setting);
        ui.global::<Theme>().set_default_font_size(font_size as f32);
    });

    let ui_weak = ui.as_weak();
    global_logic!(ui).on_decrease_font_size(move || {
        let ui = ui_weak.unwrap();
        let mut all = config::all();

        let font_size = u32::min(50, u32::max(10, all.preference.font_size - 1));
        all.preference.font_size = font_size;
        _ = config::save(all);

        let mut setting = global_store!(ui).get_setting_preference();
        setting.font_size = slint::format!("{}", font_size);
        global_store!(ui).set_setting_preference(setting);
        ui.global::<Theme>().set_default_font_size(font_size as f32);
    });
}

fn init_setting(ui: &AppWindow) {
    let config = config::all().preference;
    let mut setting = global_store!(ui).get_setting_preference();

    let font_size = u32::min(50, u32::max(10, config.font_size));
    setting.win_width = slint::format!("{}", u32::max(500, config.win_width));
    setting.win_height = slint::format!("{}", u32::max(500, config.win_height));
    setting.font_size = slint::format!("{}", font_size);
    setting.font_family = config.font_family.into();
    setting.is_dark = config.is_dark;

    ui.global::<Theme>().invoke_set_dark(config.is_dark);
    ui.global::<Theme>().set_default_font_size(font_size as f32);
    global_store!(ui).set_setting_preference(setting);
}
