//! Host surface of the initial (6.0) revision.
//!
//! # Invariants
//! - Main button mutators return nothing in this revision.
//! - Members that throw on bad input return `BindingResult`.
//! - No back button, haptics, color overrides or version gate exist here.

use crate::error::{BindingError, BindingResult};
use crate::js_json;
use js_sys::Function;
use tgwebapp_core::{
    ColorScheme, EventKindV6_0, HexColor, JsLiteral, MainButtonParams, MainButtonState,
    ThemeParams, Unverified, ViewportMetrics, WebAppInitData,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `Telegram.WebApp` as documented for Bot API 6.0.
    #[derive(Debug, Clone)]
    pub type WebApp;

    /// Raw init data string, for server-side verification.
    #[wasm_bindgen(method, getter = initData)]
    pub fn init_data(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter = initDataUnsafe)]
    fn init_data_unsafe_raw(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter = colorScheme)]
    fn color_scheme_raw(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter = themeParams)]
    fn theme_params_raw(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter = isExpanded)]
    pub fn is_expanded(this: &WebApp) -> bool;

    #[wasm_bindgen(method, getter = viewportHeight)]
    pub fn viewport_height(this: &WebApp) -> f64;

    #[wasm_bindgen(method, getter = viewportStableHeight)]
    pub fn viewport_stable_height(this: &WebApp) -> f64;

    #[wasm_bindgen(method, getter = MainButton)]
    pub fn main_button(this: &WebApp) -> MainButton;

    #[wasm_bindgen(method, js_name = onEvent)]
    fn on_event_raw(this: &WebApp, event_type: &str, callback: &Function);

    #[wasm_bindgen(method, js_name = offEvent)]
    fn off_event_raw(this: &WebApp, event_type: &str, callback: &Function);

    #[wasm_bindgen(method, catch, js_name = sendData)]
    fn send_data_raw(this: &WebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn ready(this: &WebApp);

    #[wasm_bindgen(method)]
    pub fn expand(this: &WebApp);

    #[wasm_bindgen(method)]
    pub fn close(this: &WebApp);

    /// `Telegram.WebApp.MainButton` as documented for Bot API 6.0.
    #[derive(Debug, Clone)]
    pub type MainButton;

    #[wasm_bindgen(method, getter)]
    pub fn text(this: &MainButton) -> String;

    #[wasm_bindgen(method, getter = color)]
    fn color_raw(this: &MainButton) -> String;

    #[wasm_bindgen(method, getter = textColor)]
    fn text_color_raw(this: &MainButton) -> String;

    #[wasm_bindgen(method, getter = isVisible)]
    pub fn is_visible(this: &MainButton) -> bool;

    #[wasm_bindgen(method, getter = isActive)]
    pub fn is_active(this: &MainButton) -> bool;

    #[wasm_bindgen(method, getter = isProgressVisible)]
    pub fn is_progress_visible(this: &MainButton) -> bool;

    #[wasm_bindgen(method, catch, js_name = setText)]
    fn set_text_raw(this: &MainButton, text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = onClick)]
    pub fn on_click(this: &MainButton, callback: &Function);

    #[wasm_bindgen(method, js_name = offClick)]
    pub fn off_click(this: &MainButton, callback: &Function);

    #[wasm_bindgen(method)]
    pub fn show(this: &MainButton);

    #[wasm_bindgen(method)]
    pub fn hide(this: &MainButton);

    #[wasm_bindgen(method)]
    pub fn enable(this: &MainButton);

    #[wasm_bindgen(method)]
    pub fn disable(this: &MainButton);

    /// `leave_active: Some(true)` keeps the button clickable while loading.
    #[wasm_bindgen(method, js_name = showProgress)]
    pub fn show_progress(this: &MainButton, leave_active: Option<bool>);

    #[wasm_bindgen(method, js_name = hideProgress)]
    pub fn hide_progress(this: &MainButton);

    #[wasm_bindgen(method, catch, js_name = setParams)]
    fn set_params_raw(this: &MainButton, params: &JsValue) -> Result<(), JsValue>;
}

impl WebApp {
    /// Parsed view of `initData`. Not verified; see [`Unverified`].
    pub fn init_data_unsafe(&self) -> BindingResult<Unverified<WebAppInitData>> {
        js_json::from_js::<WebAppInitData>("initDataUnsafe", &self.init_data_unsafe_raw())
            .map(Unverified::new)
    }

    pub fn color_scheme(&self) -> BindingResult<ColorScheme> {
        Ok(ColorScheme::from_js_str(&self.color_scheme_raw())?)
    }

    pub fn theme_params(&self) -> BindingResult<ThemeParams> {
        js_json::from_js("themeParams", &self.theme_params_raw())
    }

    pub fn viewport(&self) -> ViewportMetrics {
        ViewportMetrics {
            height: self.viewport_height(),
            stable_height: self.viewport_stable_height(),
            is_expanded: self.is_expanded(),
        }
    }

    /// Sends `data` (up to 4096 bytes) to the bot and closes the app.
    /// Keyboard-button launches only; the host rejects empty or oversized
    /// data.
    pub fn send_data(&self, data: &str) -> BindingResult<()> {
        self.send_data_raw(data)
            .map_err(|thrown| BindingError::host("sendData", thrown))
    }

    pub fn on_event(&self, kind: EventKindV6_0, callback: &Function) {
        self.on_event_raw(kind.as_js_str(), callback);
    }

    pub fn off_event(&self, kind: EventKindV6_0, callback: &Function) {
        self.off_event_raw(kind.as_js_str(), callback);
    }
}

impl MainButton {
    pub fn color(&self) -> BindingResult<HexColor> {
        Ok(HexColor::parse(&self.color_raw())?)
    }

    pub fn text_color(&self) -> BindingResult<HexColor> {
        Ok(HexColor::parse(&self.text_color_raw())?)
    }

    pub fn state(&self) -> BindingResult<MainButtonState> {
        Ok(MainButtonState {
            text: self.text(),
            color: self.color()?,
            text_color: self.text_color()?,
            is_visible: self.is_visible(),
            is_active: self.is_active(),
            is_progress_visible: self.is_progress_visible(),
        })
    }

    /// Fails when the host rejects `text` (empty or over 64 characters).
    pub fn set_text(&self, text: &str) -> BindingResult<()> {
        self.set_text_raw(text)
            .map_err(|thrown| BindingError::host("setText", thrown))
    }

    pub fn set_params(&self, params: &MainButtonParams) -> BindingResult<()> {
        let value = js_json::to_js("setParams", params)?;
        self.set_params_raw(&value)
            .map_err(|thrown| BindingError::host("setParams", thrown))
    }
}
