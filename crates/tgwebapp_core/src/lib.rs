//! Typed description of the Telegram Mini App host object.
//!
//! The host (`window.Telegram.WebApp`) is created by the Telegram client
//! before page scripts run. This crate describes its shape: data values,
//! closed literal sets, protocol revisions, and a catalog of member names.
//! It implements no host behavior.

pub mod decode;
pub mod logging;
pub mod model;
pub mod revision;
pub mod surface;

pub use decode::{decode_init_data, InitDataError, InitDataResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::color::{BackgroundColor, ColorKeyword, ColorScheme, HexColor, HexColorError};
pub use model::controls::{BackButtonState, MainButtonParams, MainButtonState};
pub use model::event::{EventKindV6_0, EventKindV6_1, InvoiceStatus};
pub use model::haptic::{HapticImpactStyle, HapticNotificationType};
pub use model::init_data::{
    ChatType, TelegramId, Unverified, WebAppChat, WebAppInitData, WebAppUser,
};
pub use model::literal::{JsLiteral, LiteralError};
pub use model::theme::{ThemeParams, ViewportMetrics};
pub use revision::{HostVersion, ProtocolRevision, VersionError, VersionToken};
pub use surface::{HostInterface, MemberKind, SurfaceMember};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
