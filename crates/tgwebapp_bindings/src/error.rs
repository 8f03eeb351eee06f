//! Binding error surface.

use std::error::Error;
use std::fmt::{Display, Formatter};
use tgwebapp_core::{HexColorError, LiteralError, VersionError};
use wasm_bindgen::{JsCast, JsValue};

pub type BindingResult<T> = Result<T, BindingError>;

/// Errors raised while reading the host object or calling into it.
///
/// Members that validate their arguments on the host side (`sendData`,
/// `openLink`, `MainButton.setText`, ...) report a thrown exception as
/// `Host`.
#[derive(Debug)]
pub enum BindingError {
    /// `name` is absent from its parent object.
    MissingGlobal(&'static str),
    /// `name` exists but is not an object.
    NotAnObject(&'static str),
    /// Host reports a version older than every modeled revision.
    UnsupportedVersion(String),
    InvalidVersion(VersionError),
    Literal(LiteralError),
    Color(HexColorError),
    /// A structured member did not match its documented shape.
    Shape {
        member: &'static str,
        message: String,
    },
    /// The host threw while running `member`.
    Host {
        member: &'static str,
        message: String,
    },
}

impl BindingError {
    /// Wraps a value thrown by the host method `member`.
    pub(crate) fn host(member: &'static str, thrown: JsValue) -> Self {
        Self::Host {
            member,
            message: describe_js(&thrown),
        }
    }
}

/// Human-readable text of a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

impl Display for BindingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingGlobal(name) => write!(f, "host object `{name}` is not defined"),
            Self::NotAnObject(name) => write!(f, "host value `{name}` is not an object"),
            Self::UnsupportedVersion(version) => {
                write!(f, "host version {version} predates every supported revision")
            }
            Self::InvalidVersion(err) => write!(f, "{err}"),
            Self::Literal(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Shape { member, message } => {
                write!(f, "host member `{member}` has an unexpected shape: {message}")
            }
            Self::Host { member, message } => write!(f, "host call `{member}` failed: {message}"),
        }
    }
}

impl Error for BindingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidVersion(err) => Some(err),
            Self::Literal(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::MissingGlobal(_)
            | Self::NotAnObject(_)
            | Self::UnsupportedVersion(_)
            | Self::Shape { .. }
            | Self::Host { .. } => None,
        }
    }
}

impl From<VersionError> for BindingError {
    fn from(err: VersionError) -> Self {
        Self::InvalidVersion(err)
    }
}

impl From<LiteralError> for BindingError {
    fn from(err: LiteralError) -> Self {
        Self::Literal(err)
    }
}

impl From<HexColorError> for BindingError {
    fn from(err: HexColorError) -> Self {
        Self::Color(err)
    }
}

impl From<BindingError> for JsValue {
    fn from(err: BindingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::BindingError;
    use std::error::Error;
    use tgwebapp_core::{ColorScheme, JsLiteral};

    #[test]
    fn literal_errors_keep_their_source() {
        let err = BindingError::from(
            ColorScheme::from_js_str("sepia").expect_err("sepia is not a scheme"),
        );
        assert!(err.to_string().contains("sepia"));
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_global_names_the_member() {
        let err = BindingError::MissingGlobal("Telegram");
        assert_eq!(err.to_string(), "host object `Telegram` is not defined");
        assert!(err.source().is_none());
    }

    #[test]
    fn host_failures_name_the_call() {
        let err = BindingError::Host {
            member: "sendData",
            message: "WebAppDataInvalid".to_string(),
        };
        assert_eq!(err.to_string(), "host call `sendData` failed: WebAppDataInvalid");
        assert!(err.source().is_none());
    }
}
