//! UI logic and callback management module
//!
//! Contains macros and initialization functions for connecting Slint UI callbacks
//! to Rust functions. Provides global access to UI components and utilities.

use crate::slint_generatedAppWindow::AppWindow;

mod about;
mod setting;
mod toast;
mod util;
mod viewer;

/// Macro to access the global Store component
#[macro_export]
macro_rules! global_store {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Store>()
    };
}

/// Macro to access the global Logic component
#[macro_export]
macro_rules! global_logic {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Logic>()
    };
}

/// Macro to access the global Util component
#[macro_export]
macro_rules! global_util {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Util>()
    };
}

/// Macro to connect Slint callbacks to Rust functions
///
/// Creates a callback connection with proper weak reference handling
/// to prevent memory leaks.
#[macro_export]
macro_rules! logic_cb {
    ($callback_name:ident, $ui:expr, $($arg:ident),*) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move |$($arg),*| {
                        $callback_name(&ui_weak.unwrap(), $($arg),*)
                    });
            }
        }}
    };
    ($callback_name:ident, $ui:expr) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move || {
                        $callback_name(&ui_weak.unwrap())
                    });
            }
        }}
    };
}

/// Macro to implement `From` conversions in both directions between a Slint
/// enum and a Rust enum with identical variant names
#[macro_export]
macro_rules! impl_c_like_enum_convert {
    ($ui_ty:ident, $ty:ident, $($arg:ident),+) => {
        impl From<$ui_ty> for $ty {
            fn from(value: $ui_ty) -> Self {
                match value {
                    $(
                        $ui_ty::$arg => $ty::$arg,
                    )+
                }
            }
        }

        impl From<$ty> for $ui_ty {
            fn from(value: $ty) -> Self {
                match value {
                    $(
                        $ty::$arg => $ui_ty::$arg,
                    )+
                }
            }
        }
    };
}

/// Initializes all UI logic modules
///
/// # Parameters
/// - `ui`: Reference to the application window
pub fn init(ui: &AppWindow) {
    util::init(ui);
    toast::init(ui);
    about::init(ui);
    setting::init(ui);
    viewer::init(ui);
}
