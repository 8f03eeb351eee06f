//! JSON bridge between host objects and core serde shapes.

use crate::error::{describe_js, BindingError, BindingResult};
use js_sys::JSON;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Reads a plain host object into a serde shape.
pub(crate) fn from_js<T: DeserializeOwned>(member: &'static str, value: &JsValue) -> BindingResult<T> {
    if value.is_undefined() || value.is_null() {
        return Err(BindingError::MissingGlobal(member));
    }
    let text = JSON::stringify(value).map_err(|err| BindingError::Shape {
        member,
        message: describe_js(&err),
    })?;
    serde_json::from_str(&String::from(text)).map_err(|err| BindingError::Shape {
        member,
        message: err.to_string(),
    })
}

/// Builds a plain host object from a serde shape.
pub(crate) fn to_js<T: Serialize>(member: &'static str, value: &T) -> BindingResult<JsValue> {
    let text = serde_json::to_string(value).map_err(|err| BindingError::Shape {
        member,
        message: err.to_string(),
    })?;
    JSON::parse(&text).map_err(|err| BindingError::Shape {
        member,
        message: describe_js(&err),
    })
}
