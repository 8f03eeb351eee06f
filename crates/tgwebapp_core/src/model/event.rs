//! Event kinds accepted by `onEvent` / `offEvent`.
//!
//! # Invariants
//! - Each revision has its own closed enum, used for both subscribe and
//!   unsubscribe.
//! - Every 6.0 kind converts losslessly into the 6.1 enum; the reverse is
//!   partial.
//!
//! Kinds introduced in 6.1 do not exist on the 6.0 enum:
//!
//! ```compile_fail
//! use tgwebapp_core::EventKindV6_0;
//!
//! let kind = EventKindV6_0::BackButtonClicked;
//! ```

use super::literal::closed_literal;

closed_literal! {
    /// Event kinds of the initial (6.0) revision.
    pub enum EventKindV6_0 {
        ThemeChanged => "themeChanged",
        /// Payload: `{ isStateStable: boolean }`.
        ViewportChanged => "viewportChanged",
        MainButtonClicked => "mainButtonClicked",
    }
}

closed_literal! {
    /// Event kinds of the 6.1 revision.
    pub enum EventKindV6_1 {
        ThemeChanged => "themeChanged",
        /// Payload: `{ isStateStable: boolean }`.
        ViewportChanged => "viewportChanged",
        MainButtonClicked => "mainButtonClicked",
        BackButtonClicked => "backButtonClicked",
        SettingsButtonClicked => "settingsButtonClicked",
        /// Payload: `{ url: string, status: InvoiceStatus }`.
        InvoiceClosed => "invoiceClosed",
    }
}

closed_literal! {
    /// Status passed to the `openInvoice` callback and `invoiceClosed` event.
    pub enum InvoiceStatus {
        Paid => "paid",
        Cancelled => "cancelled",
        Failed => "failed",
        /// Payment is still being processed.
        Pending => "pending",
    }
}

impl From<EventKindV6_0> for EventKindV6_1 {
    fn from(kind: EventKindV6_0) -> Self {
        match kind {
            EventKindV6_0::ThemeChanged => Self::ThemeChanged,
            EventKindV6_0::ViewportChanged => Self::ViewportChanged,
            EventKindV6_0::MainButtonClicked => Self::MainButtonClicked,
        }
    }
}

impl EventKindV6_1 {
    /// Returns the 6.0 kind when this event already existed there.
    pub fn to_v6_0(self) -> Option<EventKindV6_0> {
        match self {
            Self::ThemeChanged => Some(EventKindV6_0::ThemeChanged),
            Self::ViewportChanged => Some(EventKindV6_0::ViewportChanged),
            Self::MainButtonClicked => Some(EventKindV6_0::MainButtonClicked),
            Self::BackButtonClicked | Self::SettingsButtonClicked | Self::InvoiceClosed => None,
        }
    }
}
