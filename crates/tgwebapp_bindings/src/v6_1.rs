//! Host surface of the 6.1 revision.
//!
//! # Invariants
//! - Main button, back button and haptic mutators return the control they
//!   were called on; `setText` and `setParams` wrap it in `BindingResult`
//!   because the host validates their arguments.
//! - Members that throw on bad input return `BindingResult`.
//! - Event subscription takes `EventKindV6_1` in both directions.

use crate::error::{BindingError, BindingResult};
use crate::js_json;
use js_sys::Function;
use log::debug;
use tgwebapp_core::{
    BackButtonState, BackgroundColor, ColorKeyword, ColorScheme, EventKindV6_1,
    HapticImpactStyle, HapticNotificationType, HexColor, HostVersion, JsLiteral,
    MainButtonParams, MainButtonState, ThemeParams, Unverified, VersionToken, ViewportMetrics,
    WebAppInitData,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `Telegram.WebApp` as documented for Bot API 6.1.
    #[derive(Debug, Clone)]
    pub type WebApp;

    /// Raw init data string, for server-side verification.
    #[wasm_bindgen(method, getter = initData)]
    pub fn init_data(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter = initDataUnsafe)]
    fn init_data_unsafe_raw(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter = version)]
    fn version_raw(this: &WebApp) -> String;

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

    #[wasm_bindgen(method, getter = headerColor)]
    fn header_color_raw(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter = backgroundColor)]
    fn background_color_raw(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter = MainButton)]
    pub fn main_button(this: &WebApp) -> MainButton;

    #[wasm_bindgen(method, getter = BackButton)]
    pub fn back_button(this: &WebApp) -> BackButton;

    #[wasm_bindgen(method, getter = HapticFeedback)]
    pub fn haptic_feedback(this: &WebApp) -> HapticFeedback;

    #[wasm_bindgen(method, js_name = isVersionAtLeast)]
    fn is_version_at_least_raw(this: &WebApp, version: &JsValue) -> bool;

    #[wasm_bindgen(method, js_name = setHeaderColor)]
    fn set_header_color_raw(this: &WebApp, color: &str);

    #[wasm_bindgen(method, js_name = setBackgroundColor)]
    fn set_background_color_raw(this: &WebApp, color: &str);

    #[wasm_bindgen(method, js_name = onEvent)]
    fn on_event_raw(this: &WebApp, event_type: &str, callback: &Function);

    #[wasm_bindgen(method, js_name = offEvent)]
    fn off_event_raw(this: &WebApp, event_type: &str, callback: &Function);

    #[wasm_bindgen(method, catch, js_name = sendData)]
    fn send_data_raw(this: &WebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openLink)]
    fn open_link_raw(this: &WebApp, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openTelegramLink)]
    fn open_telegram_link_raw(this: &WebApp, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openInvoice)]
    fn open_invoice_raw(this: &WebApp, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openInvoice)]
    fn open_invoice_with_callback_raw(
        this: &WebApp,
        url: &str,
        callback: &Function,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn ready(this: &WebApp);

    #[wasm_bindgen(method)]
    pub fn expand(this: &WebApp);

    #[wasm_bindgen(method)]
    pub fn close(this: &WebApp);

    /// `Telegram.WebApp.MainButton` as documented for Bot API 6.1.
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
    fn set_text_raw(this: &MainButton, text: &str) -> Result<MainButton, JsValue>;

    #[wasm_bindgen(method, js_name = onClick)]
    pub fn on_click(this: &MainButton, callback: &Function) -> MainButton;

    #[wasm_bindgen(method, js_name = offClick)]
    pub fn off_click(this: &MainButton, callback: &Function) -> MainButton;

    #[wasm_bindgen(method)]
    pub fn show(this: &MainButton) -> MainButton;

    #[wasm_bindgen(method)]
    pub fn hide(this: &MainButton) -> MainButton;

    #[wasm_bindgen(method)]
    pub fn enable(this: &MainButton) -> MainButton;

    #[wasm_bindgen(method)]
    pub fn disable(this: &MainButton) -> MainButton;

    /// `leave_active: Some(true)` keeps the button clickable while loading.
    #[wasm_bindgen(method, js_name = showProgress)]
    pub fn show_progress(this: &MainButton, leave_active: Option<bool>) -> MainButton;

    #[wasm_bindgen(method, js_name = hideProgress)]
    pub fn hide_progress(this: &MainButton) -> MainButton;

    #[wasm_bindgen(method, catch, js_name = setParams)]
    fn set_params_raw(this: &MainButton, params: &JsValue) -> Result<MainButton, JsValue>;

    /// `Telegram.WebApp.BackButton`.
    #[derive(Debug, Clone)]
    pub type BackButton;

    #[wasm_bindgen(method, getter = isVisible)]
    pub fn is_visible(this: &BackButton) -> bool;

    #[wasm_bindgen(method, js_name = onClick)]
    pub fn on_click(this: &BackButton, callback: &Function) -> BackButton;

    #[wasm_bindgen(method, js_name = offClick)]
    pub fn off_click(this: &BackButton, callback: &Function) -> BackButton;

    #[wasm_bindgen(method)]
    pub fn show(this: &BackButton) -> BackButton;

    #[wasm_bindgen(method)]
    pub fn hide(this: &BackButton) -> BackButton;

    /// `Telegram.WebApp.HapticFeedback`.
    #[derive(Debug, Clone)]
    pub type HapticFeedback;

    #[wasm_bindgen(method, js_name = impactOccurred)]
    fn impact_occurred_raw(this: &HapticFeedback, style: &str) -> HapticFeedback;

    #[wasm_bindgen(method, js_name = notificationOccurred)]
    fn notification_occurred_raw(this: &HapticFeedback, kind: &str) -> HapticFeedback;

    #[wasm_bindgen(method, js_name = selectionChanged)]
    pub fn selection_changed(this: &HapticFeedback) -> HapticFeedback;
}

impl WebApp {
    /// Parsed view of `initData`. Not verified; see [`Unverified`].
    pub fn init_data_unsafe(&self) -> BindingResult<Unverified<WebAppInitData>> {
        js_json::from_js::<WebAppInitData>("initDataUnsafe", &self.init_data_unsafe_raw())
            .map(Unverified::new)
    }

    pub fn version(&self) -> BindingResult<HostVersion> {
        Ok(HostVersion::parse(&self.version_raw())?)
    }

    /// Asks the host whether its revision is at least `token`.
    ///
    /// Gate every call to a member newer than 6.1 behind this check; the
    /// types here cannot stop a call that the host does not support.
    pub fn is_version_at_least(&self, token: impl Into<VersionToken>) -> bool {
        let token = token.into();
        let value = match &token {
            VersionToken::Number(number) => JsValue::from_f64(*number),
            VersionToken::Text(text) => JsValue::from_str(text),
        };
        let supported = self.is_version_at_least_raw(&value);
        debug!(
            "event=version_gate module=bindings status=ok token={} supported={}",
            token, supported
        );
        supported
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

    pub fn header_color(&self) -> BindingResult<HexColor> {
        Ok(HexColor::parse(&self.header_color_raw())?)
    }

    pub fn background_color(&self) -> BindingResult<HexColor> {
        Ok(HexColor::parse(&self.background_color_raw())?)
    }

    pub fn set_header_color(&self, keyword: ColorKeyword) {
        self.set_header_color_raw(keyword.as_js_str());
    }

    pub fn set_background_color(&self, color: impl Into<BackgroundColor>) {
        self.set_background_color_raw(color.into().as_js_str());
    }

    pub fn on_event(&self, kind: EventKindV6_1, callback: &Function) {
        self.on_event_raw(kind.as_js_str(), callback);
    }

    pub fn off_event(&self, kind: EventKindV6_1, callback: &Function) {
        self.off_event_raw(kind.as_js_str(), callback);
    }

    /// Sends `data` (up to 4096 bytes) to the bot and closes the app.
    /// Keyboard-button launches only; the host rejects empty or oversized
    /// data.
    pub fn send_data(&self, data: &str) -> BindingResult<()> {
        self.send_data_raw(data)
            .map_err(|thrown| BindingError::host("sendData", thrown))
    }

    /// Opens `url` in an external browser without closing the app.
    pub fn open_link(&self, url: &str) -> BindingResult<()> {
        self.open_link_raw(url)
            .map_err(|thrown| BindingError::host("openLink", thrown))
    }

    /// Opens a `https://t.me/...` link inside Telegram and closes the app.
    pub fn open_telegram_link(&self, url: &str) -> BindingResult<()> {
        self.open_telegram_link_raw(url)
            .map_err(|thrown| BindingError::host("openTelegramLink", thrown))
    }

    /// Opens an invoice link. The callback receives the `InvoiceStatus`
    /// literal once the invoice closes.
    pub fn open_invoice(&self, url: &str, callback: Option<&Function>) -> BindingResult<()> {
        let outcome = match callback {
            Some(callback) => self.open_invoice_with_callback_raw(url, callback),
            None => self.open_invoice_raw(url),
        };
        outcome.map_err(|thrown| BindingError::host("openInvoice", thrown))
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
    pub fn set_text(&self, text: &str) -> BindingResult<MainButton> {
        self.set_text_raw(text)
            .map_err(|thrown| BindingError::host("setText", thrown))
    }

    pub fn set_params(&self, params: &MainButtonParams) -> BindingResult<MainButton> {
        let value = js_json::to_js("setParams", params)?;
        self.set_params_raw(&value)
            .map_err(|thrown| BindingError::host("setParams", thrown))
    }
}

impl BackButton {
    pub fn state(&self) -> BackButtonState {
        BackButtonState {
            is_visible: self.is_visible(),
        }
    }
}

impl HapticFeedback {
    pub fn impact_occurred(&self, style: HapticImpactStyle) -> HapticFeedback {
        self.impact_occurred_raw(style.as_js_str())
    }

    pub fn notification_occurred(&self, kind: HapticNotificationType) -> HapticFeedback {
        self.notification_occurred_raw(kind.as_js_str())
    }
}
