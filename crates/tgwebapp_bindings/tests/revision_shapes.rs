//! Signature checks for the revision-specific shapes.
//!
//! These only coerce function items to pointer types, so they compile and
//! run on any target without touching a host object.

use js_sys::Function;
use tgwebapp_bindings::{v6_0, v6_1, BindingResult};
use tgwebapp_core::{
    BackgroundColor, ColorKeyword, EventKindV6_0, EventKindV6_1, HapticImpactStyle,
    HapticNotificationType, MainButtonParams,
};

#[test]
fn initial_main_button_mutators_return_nothing() {
    let _: fn(&v6_0::MainButton, &str) -> BindingResult<()> = v6_0::MainButton::set_text;
    let _: fn(&v6_0::MainButton, &Function) = v6_0::MainButton::on_click;
    let _: fn(&v6_0::MainButton, &Function) = v6_0::MainButton::off_click;
    let _: fn(&v6_0::MainButton) = v6_0::MainButton::show;
    let _: fn(&v6_0::MainButton) = v6_0::MainButton::hide;
    let _: fn(&v6_0::MainButton) = v6_0::MainButton::enable;
    let _: fn(&v6_0::MainButton) = v6_0::MainButton::disable;
    let _: fn(&v6_0::MainButton, Option<bool>) = v6_0::MainButton::show_progress;
    let _: fn(&v6_0::MainButton) = v6_0::MainButton::hide_progress;
    let _: fn(&v6_0::MainButton, &MainButtonParams) -> BindingResult<()> =
        v6_0::MainButton::set_params;
}

#[test]
fn later_main_button_mutators_return_the_button() {
    let _: fn(&v6_1::MainButton, &str) -> BindingResult<v6_1::MainButton> =
        v6_1::MainButton::set_text;
    let _: fn(&v6_1::MainButton, &Function) -> v6_1::MainButton = v6_1::MainButton::on_click;
    let _: fn(&v6_1::MainButton, &Function) -> v6_1::MainButton = v6_1::MainButton::off_click;
    let _: fn(&v6_1::MainButton) -> v6_1::MainButton = v6_1::MainButton::show;
    let _: fn(&v6_1::MainButton) -> v6_1::MainButton = v6_1::MainButton::hide;
    let _: fn(&v6_1::MainButton) -> v6_1::MainButton = v6_1::MainButton::enable;
    let _: fn(&v6_1::MainButton) -> v6_1::MainButton = v6_1::MainButton::disable;
    let _: fn(&v6_1::MainButton, Option<bool>) -> v6_1::MainButton =
        v6_1::MainButton::show_progress;
    let _: fn(&v6_1::MainButton) -> v6_1::MainButton = v6_1::MainButton::hide_progress;
    let _: fn(&v6_1::MainButton, &MainButtonParams) -> BindingResult<v6_1::MainButton> =
        v6_1::MainButton::set_params;
}

#[test]
fn back_button_and_haptics_chain_in_6_1() {
    let _: fn(&v6_1::WebApp) -> v6_1::BackButton = v6_1::WebApp::back_button;
    let _: fn(&v6_1::BackButton) -> v6_1::BackButton = v6_1::BackButton::show;
    let _: fn(&v6_1::BackButton) -> v6_1::BackButton = v6_1::BackButton::hide;
    let _: fn(&v6_1::BackButton, &Function) -> v6_1::BackButton = v6_1::BackButton::on_click;
    let _: fn(&v6_1::BackButton, &Function) -> v6_1::BackButton = v6_1::BackButton::off_click;

    let _: fn(&v6_1::WebApp) -> v6_1::HapticFeedback = v6_1::WebApp::haptic_feedback;
    let _: fn(&v6_1::HapticFeedback, HapticImpactStyle) -> v6_1::HapticFeedback =
        v6_1::HapticFeedback::impact_occurred;
    let _: fn(&v6_1::HapticFeedback, HapticNotificationType) -> v6_1::HapticFeedback =
        v6_1::HapticFeedback::notification_occurred;
    let _: fn(&v6_1::HapticFeedback) -> v6_1::HapticFeedback =
        v6_1::HapticFeedback::selection_changed;
}

#[test]
fn color_overrides_take_typed_arguments() {
    let _: fn(&v6_1::WebApp, ColorKeyword) = v6_1::WebApp::set_header_color;
    let _: fn(&v6_1::WebApp, BackgroundColor) = v6_1::WebApp::set_background_color;
    let _: fn(&v6_1::WebApp, ColorKeyword) = v6_1::WebApp::set_background_color;
}

#[test]
fn event_registration_is_keyed_by_revision_enum() {
    let _: fn(&v6_0::WebApp, EventKindV6_0, &Function) = v6_0::WebApp::on_event;
    let _: fn(&v6_0::WebApp, EventKindV6_0, &Function) = v6_0::WebApp::off_event;
    let _: fn(&v6_1::WebApp, EventKindV6_1, &Function) = v6_1::WebApp::on_event;
    let _: fn(&v6_1::WebApp, EventKindV6_1, &Function) = v6_1::WebApp::off_event;
}

#[test]
fn version_gate_returns_bool() {
    let _: fn(&v6_1::WebApp, f64) -> bool = v6_1::WebApp::is_version_at_least;
    let _: fn(&v6_1::WebApp, &'static str) -> bool = v6_1::WebApp::is_version_at_least;
}

#[test]
fn validating_host_calls_report_failures() {
    let _: fn(&v6_0::WebApp, &str) -> BindingResult<()> = v6_0::WebApp::send_data;
    let _: fn(&v6_1::WebApp, &str) -> BindingResult<()> = v6_1::WebApp::send_data;
    let _: fn(&v6_1::WebApp, &str) -> BindingResult<()> = v6_1::WebApp::open_link;
    let _: fn(&v6_1::WebApp, &str) -> BindingResult<()> = v6_1::WebApp::open_telegram_link;
    let _: fn(&v6_1::WebApp, &str, Option<&Function>) -> BindingResult<()> =
        v6_1::WebApp::open_invoice;
}
