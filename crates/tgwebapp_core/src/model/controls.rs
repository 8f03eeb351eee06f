//! Main button and back button state.

use super::color::HexColor;
use serde::{Deserialize, Serialize};

/// Argument object of `MainButton.setParams`.
///
/// Unset fields are left unchanged by the host, so they are skipped on
/// serialization rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainButtonParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

impl MainButtonParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text_color(mut self, color: HexColor) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = Some(is_visible);
        self
    }

    /// Whether applying these params would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Snapshot of the main button's observable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainButtonState {
    pub text: String,
    pub color: HexColor,
    pub text_color: HexColor,
    pub is_visible: bool,
    pub is_active: bool,
    pub is_progress_visible: bool,
}

/// Snapshot of the back button's observable fields. Bot API 6.1+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackButtonState {
    pub is_visible: bool,
}
