//! Presentation state: theme palette and viewport metrics.
//!
//! # Invariants
//! - Every theme slot is optional; older hosts omit slots added later
//!   (`secondary_bg_color` first appears in 6.1).

use super::color::{ColorKeyword, HexColor};
use serde::{Deserialize, Serialize};

/// Theme palette reported as `Telegram.WebApp.themeParams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<HexColor>,
    /// Bot API 6.1+.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_bg_color: Option<HexColor>,
}

impl ThemeParams {
    /// Resolves a header/background keyword against this palette.
    pub fn resolve(&self, keyword: ColorKeyword) -> Option<&HexColor> {
        match keyword {
            ColorKeyword::BgColor => self.bg_color.as_ref(),
            ColorKeyword::SecondaryBgColor => self.secondary_bg_color.as_ref(),
        }
    }
}

/// Viewport metrics of the Mini App.
///
/// Heights are CSS pixels as floating point numbers; the host may report
/// fractional values during expand animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// `viewportHeight`: current visible height, updated while animating.
    pub height: f64,
    /// `viewportStableHeight`: height in the last stable state.
    pub stable_height: f64,
    /// `isExpanded`.
    pub is_expanded: bool,
}

impl ViewportMetrics {
    /// Whether the viewport is settled (current height equals stable height).
    pub fn is_settled(&self) -> bool {
        self.height == self.stable_height
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeParams, ViewportMetrics};
    use crate::model::color::{ColorKeyword, HexColor};

    #[test]
    fn theme_params_accept_partial_palettes() {
        let params: ThemeParams = serde_json::from_value(serde_json::json!({
            "bg_color": "#ffffff",
            "text_color": "#000000"
        }))
        .expect("partial palette");

        assert_eq!(
            params.bg_color,
            Some(HexColor::parse("#ffffff").expect("valid color"))
        );
        assert_eq!(params.secondary_bg_color, None);
        assert_eq!(params.resolve(ColorKeyword::SecondaryBgColor), None);
    }

    #[test]
    fn theme_params_reject_malformed_colors() {
        let result = serde_json::from_value::<ThemeParams>(serde_json::json!({
            "bg_color": "white"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn theme_params_serialize_only_present_slots() {
        let params = ThemeParams {
            secondary_bg_color: Some(HexColor::parse("#F0F0F0").expect("valid color")),
            ..ThemeParams::default()
        };
        let json = serde_json::to_value(&params).expect("serialize");
        assert_eq!(json, serde_json::json!({ "secondary_bg_color": "#f0f0f0" }));
    }

    #[test]
    fn viewport_reports_settled_state() {
        let moving = ViewportMetrics {
            height: 420.5,
            stable_height: 400.0,
            is_expanded: false,
        };
        assert!(!moving.is_settled());

        let settled = ViewportMetrics {
            height: 640.0,
            stable_height: 640.0,
            is_expanded: true,
        };
        assert!(settled.is_settled());
    }
}
