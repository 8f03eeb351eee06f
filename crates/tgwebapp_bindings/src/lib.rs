//! `wasm-bindgen` declarations for the Telegram Mini App host object.
//!
//! # Responsibility
//! - Declare `Telegram.WebApp` and its controls once per protocol revision.
//! - Accept the core's closed enums wherever the host takes a literal.
//!
//! # Invariants
//! - Every `js_name` / `getter` matches the host's member name exactly.
//! - Revision modules never share types: a 6.0 `WebApp` has no 6.1 member.
//! - Nothing here calls the host on its own; each wrapper is one host call.
//!
//! ```no_run
//! use tgwebapp_bindings::{telegram, WebAppHandle};
//! use tgwebapp_core::{EventKindV6_1, HapticImpactStyle};
//! use wasm_bindgen::{closure::Closure, JsCast};
//!
//! # fn main() -> Result<(), tgwebapp_bindings::BindingError> {
//! let app = telegram()?.web_app()?;
//! if let WebAppHandle::V6_1(app) = &app {
//!     app.main_button().set_text("Checkout")?.show();
//!     app.haptic_feedback().impact_occurred(HapticImpactStyle::Light);
//!
//!     let on_back = Closure::<dyn FnMut()>::new(|| {});
//!     app.on_event(EventKindV6_1::BackButtonClicked, on_back.as_ref().unchecked_ref());
//!     on_back.forget();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Members added in 6.1 are absent from the 6.0 shape:
//!
//! ```compile_fail
//! fn check(app: &tgwebapp_bindings::v6_0::WebApp) {
//!     app.back_button().show();
//! }
//! ```
//!
//! ```compile_fail
//! fn check(app: &tgwebapp_bindings::v6_0::WebApp, callback: &js_sys::Function) {
//!     app.on_event(tgwebapp_core::EventKindV6_1::InvoiceClosed, callback);
//! }
//! ```
//!
//! Event kinds are closed; strings are not accepted:
//!
//! ```compile_fail
//! fn check(app: &tgwebapp_bindings::v6_1::WebApp, callback: &js_sys::Function) {
//!     app.on_event("popupClosed", callback);
//! }
//! ```

pub mod error;
pub mod global;
mod js_json;
pub mod v6_0;
pub mod v6_1;

pub use error::{BindingError, BindingResult};
pub use global::{telegram, Telegram, WebAppHandle};
