//! Access to the host-injected `Telegram` global.
//!
//! # Responsibility
//! - Locate `globalThis.Telegram` and its `WebApp` member.
//! - Pick the revision-specific `WebApp` shape from the reported version.
//!
//! # Invariants
//! - Lookups never panic; a missing host yields `BindingError`.
//! - A host without a `version` member is treated as 6.0, the only modeled
//!   revision that lacks it.

use crate::error::{BindingError, BindingResult};
use crate::{v6_0, v6_1};
use js_sys::Reflect;
use log::debug;
use tgwebapp_core::{HostVersion, ProtocolRevision};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const TELEGRAM_GLOBAL: &str = "Telegram";
const WEB_APP_MEMBER: &str = "WebApp";
const VERSION_MEMBER: &str = "version";

#[wasm_bindgen]
extern "C" {
    /// The SDK root object (`window.Telegram`).
    #[derive(Debug, Clone)]
    pub type Telegram;
}

/// Returns the SDK root injected by the Telegram client.
pub fn telegram() -> BindingResult<Telegram> {
    let value = object_member(&js_sys::global(), TELEGRAM_GLOBAL)?;
    debug!("event=host_lookup module=bindings status=ok member={TELEGRAM_GLOBAL}");
    Ok(value.unchecked_into::<Telegram>())
}

/// Revision-tagged `Telegram.WebApp`.
#[derive(Debug, Clone)]
pub enum WebAppHandle {
    V6_0(v6_0::WebApp),
    V6_1(v6_1::WebApp),
}

impl WebAppHandle {
    pub fn revision(&self) -> ProtocolRevision {
        match self {
            Self::V6_0(_) => ProtocolRevision::V6_0,
            Self::V6_1(_) => ProtocolRevision::V6_1,
        }
    }

    /// The 6.0 view; every host exposes at least this surface.
    pub fn as_v6_0(&self) -> v6_0::WebApp {
        match self {
            Self::V6_0(app) => app.clone(),
            Self::V6_1(app) => app.clone().unchecked_into(),
        }
    }

    pub fn as_v6_1(&self) -> Option<&v6_1::WebApp> {
        match self {
            Self::V6_0(_) => None,
            Self::V6_1(app) => Some(app),
        }
    }
}

impl Telegram {
    fn web_app_value(&self) -> BindingResult<JsValue> {
        object_member(self.as_ref(), WEB_APP_MEMBER)
    }

    /// `Telegram.WebApp` typed for 6.0, regardless of the host's version.
    pub fn web_app_v6_0(&self) -> BindingResult<v6_0::WebApp> {
        Ok(self.web_app_value()?.unchecked_into())
    }

    /// `Telegram.WebApp` typed for 6.1.
    ///
    /// # Errors
    /// Fails with `UnsupportedVersion` when the host reports an older
    /// version.
    pub fn web_app_v6_1(&self) -> BindingResult<v6_1::WebApp> {
        match self.web_app()? {
            WebAppHandle::V6_1(app) => Ok(app),
            WebAppHandle::V6_0(app) => Err(BindingError::UnsupportedVersion(
                host_version(app.as_ref())?
                    .map(|version| version.to_string())
                    .unwrap_or_else(|| ProtocolRevision::V6_0.to_string()),
            )),
        }
    }

    /// `Telegram.WebApp` tagged with the newest revision its version supports.
    pub fn web_app(&self) -> BindingResult<WebAppHandle> {
        let value = self.web_app_value()?;
        let revision = match host_version(&value)? {
            None => ProtocolRevision::V6_0,
            Some(version) => ProtocolRevision::from_host_version(&version)
                .ok_or_else(|| BindingError::UnsupportedVersion(version.to_string()))?,
        };
        debug!(
            "event=host_lookup module=bindings status=ok member={WEB_APP_MEMBER} revision={revision}"
        );

        Ok(match revision {
            ProtocolRevision::V6_0 => WebAppHandle::V6_0(value.unchecked_into()),
            ProtocolRevision::V6_1 => WebAppHandle::V6_1(value.unchecked_into()),
        })
    }
}

fn object_member(parent: &JsValue, name: &'static str) -> BindingResult<JsValue> {
    let value = Reflect::get(parent, &JsValue::from_str(name))
        .map_err(|_| BindingError::MissingGlobal(name))?;
    if value.is_undefined() || value.is_null() {
        debug!("event=host_lookup module=bindings status=missing member={name}");
        return Err(BindingError::MissingGlobal(name));
    }
    if !value.is_object() {
        return Err(BindingError::NotAnObject(name));
    }
    Ok(value)
}

fn host_version(web_app: &JsValue) -> BindingResult<Option<HostVersion>> {
    let raw = Reflect::get(web_app, &JsValue::from_str(VERSION_MEMBER))
        .map_err(|_| BindingError::MissingGlobal(VERSION_MEMBER))?;
    match raw.as_string() {
        Some(text) => Ok(Some(HostVersion::parse(&text)?)),
        None => Ok(None),
    }
}
