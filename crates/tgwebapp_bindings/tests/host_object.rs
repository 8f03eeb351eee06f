//! Browser tests against a stand-in `Telegram.WebApp` object.
//!
//! Run with `wasm-pack test --headless --chrome crates/tgwebapp_bindings`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Reflect};
use tgwebapp_bindings::{telegram, BindingError, WebAppHandle};
use tgwebapp_core::{
    ColorKeyword, ColorScheme, EventKindV6_1, HapticImpactStyle, MainButtonParams,
    ProtocolRevision,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const STAND_IN: &str = r##"
(function (version) {
    const calls = [];
    const button = {
        text: "CONTINUE", color: "#2481CC", textColor: "#FFFFFF",
        isVisible: false, isActive: true, isProgressVisible: false,
        setText(text) {
            if (!text) { throw new Error("WebAppMainButtonParamInvalid"); }
            this.text = text; calls.push("setText"); return this;
        },
        show() { this.isVisible = true; calls.push("show"); return this; },
        setParams(params) { calls.push("setParams:" + JSON.stringify(params)); return this; },
    };
    const app = {
        initData: "auth_date=1662771648&hash=abc",
        initDataUnsafe: {
            user: { id: 279058397, first_name: "Vladislav", language_code: "ru" },
            auth_date: "1662771648", hash: "abc", start_param: "ref",
        },
        colorScheme: "dark",
        themeParams: { bg_color: "#17212b", secondary_bg_color: "#232e3c" },
        isExpanded: true, viewportHeight: 640, viewportStableHeight: 640,
        headerColor: "#17212B", backgroundColor: "#17212B",
        MainButton: button,
        BackButton: { isVisible: false, show() { this.isVisible = true; return this; } },
        HapticFeedback: { impactOccurred(style) { calls.push("impact:" + style); return this; } },
        onEvent(kind) { calls.push("on:" + kind); },
        offEvent(kind) { calls.push("off:" + kind); },
        isVersionAtLeast(v) { calls.push("gate:" + v); return parseFloat(v) <= 6.1; },
        setHeaderColor(color) { calls.push("header:" + color); },
        setBackgroundColor(color) { calls.push("background:" + color); },
        sendData(data) {
            if (!data.length || data.length > 4096) { throw new Error("WebAppDataInvalid"); }
            calls.push("send:" + data);
        },
        openLink(url) {
            if (!/^https?:\/\//.test(url)) { throw new Error("WebAppTgUrlInvalid"); }
            calls.push("link:" + url);
        },
        calls,
    };
    if (version !== null) { app.version = version; }
    globalThis.Telegram = { WebApp: app };
})
"##;

fn install(version: Option<&str>) {
    let factory = js_sys::eval(STAND_IN).expect("stand-in script evaluates");
    let factory = factory.unchecked_into::<Function>();
    let version = version.map(JsValue::from_str).unwrap_or(JsValue::NULL);
    factory
        .call1(&JsValue::UNDEFINED, &version)
        .expect("stand-in installs");
}

fn recorded_calls() -> Vec<String> {
    let telegram = Reflect::get(&js_sys::global(), &"Telegram".into()).expect("Telegram");
    let app = Reflect::get(&telegram, &"WebApp".into()).expect("WebApp");
    let calls = Reflect::get(&app, &"calls".into())
        .expect("calls")
        .unchecked_into::<Array>();
    calls.iter().filter_map(|value| value.as_string()).collect()
}

#[wasm_bindgen_test]
fn missing_global_is_reported() {
    Reflect::delete_property(&js_sys::global(), &"Telegram".into())
        .expect("delete succeeds");
    let err = telegram().expect_err("no host injected");
    assert!(matches!(err, BindingError::MissingGlobal("Telegram")));
}

#[wasm_bindgen_test]
fn host_without_version_is_tagged_initial() {
    install(None);
    let handle = telegram().expect("host").web_app().expect("web app");
    assert_eq!(handle.revision(), ProtocolRevision::V6_0);
    assert!(handle.as_v6_1().is_none());

    let err = telegram()
        .expect("host")
        .web_app_v6_1()
        .expect_err("6.0 host has no 6.1 shape");
    assert!(matches!(err, BindingError::UnsupportedVersion(_)));
}

#[wasm_bindgen_test]
fn later_host_exposes_typed_state() {
    install(Some("6.1"));
    let handle = telegram().expect("host").web_app().expect("web app");
    let WebAppHandle::V6_1(app) = handle else {
        panic!("expected a 6.1 host");
    };

    assert_eq!(app.color_scheme().expect("scheme"), ColorScheme::Dark);
    assert_eq!(app.header_color().expect("header").as_str(), "#17212b");
    assert!(app.viewport().is_settled());

    let theme = app.theme_params().expect("theme");
    assert!(theme.resolve(ColorKeyword::SecondaryBgColor).is_some());

    let init = app.init_data_unsafe().expect("init data");
    let init = init.peek_unverified();
    assert_eq!(init.auth_date, 1_662_771_648);
    assert_eq!(init.start_param.as_deref(), Some("ref"));
    assert_eq!(init.user.as_ref().map(|user| user.id), Some(279_058_397));

    let state = app.main_button().state().expect("button state");
    assert_eq!(state.color.as_str(), "#2481cc");
    assert!(!state.is_visible);
}

#[wasm_bindgen_test]
fn calls_forward_host_literals() {
    install(Some("6.1"));
    let app = telegram().expect("host").web_app_v6_1().expect("6.1 host");

    app.main_button().set_text("PAY").expect("text accepted").show();
    app.main_button()
        .set_params(&MainButtonParams::new().active(false))
        .expect("params");
    app.haptic_feedback().impact_occurred(HapticImpactStyle::Rigid);
    app.set_header_color(ColorKeyword::SecondaryBgColor);

    let callback = Function::new_no_args("");
    app.on_event(EventKindV6_1::SettingsButtonClicked, &callback);
    app.off_event(EventKindV6_1::SettingsButtonClicked, &callback);
    assert!(app.is_version_at_least(6.1));
    assert!(!app.is_version_at_least("6.2"));

    assert_eq!(
        recorded_calls(),
        vec![
            "setText",
            "show",
            "setParams:{\"is_active\":false}",
            "impact:rigid",
            "header:secondary_bg_color",
            "on:settingsButtonClicked",
            "off:settingsButtonClicked",
            "gate:6.1",
            "gate:6.2",
        ]
    );
}

#[wasm_bindgen_test]
fn host_rejections_become_errors() {
    install(Some("6.1"));
    let app = telegram().expect("host").web_app_v6_1().expect("6.1 host");

    let err = app.send_data("").expect_err("empty data is rejected");
    assert!(matches!(
        &err,
        BindingError::Host { member: "sendData", message } if message == "WebAppDataInvalid"
    ));

    let err = app.main_button().set_text("").expect_err("empty text is rejected");
    assert!(matches!(err, BindingError::Host { member: "setText", .. }));

    let err = app.open_link("ftp://example.org").expect_err("scheme is rejected");
    assert!(matches!(err, BindingError::Host { member: "openLink", .. }));

    app.send_data("order=42").expect("data accepted");
    app.open_link("https://example.org").expect("link accepted");
    assert_eq!(
        recorded_calls(),
        vec!["send:order=42", "link:https://example.org"]
    );
}
