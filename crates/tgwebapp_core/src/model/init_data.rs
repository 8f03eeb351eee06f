//! Session initialization data (`Telegram.WebApp.initDataUnsafe`).
//!
//! # Responsibility
//! - Describe the parsed view of the raw `initData` payload.
//! - Mark that view as untrusted at the type level.
//!
//! # Invariants
//! - `auth_date` and `hash` are present for every session; everything else
//!   depends on the launch context and stays optional.
//! - Nothing here verifies `hash`. A field is only trustworthy after the raw
//!   payload was checked server-side with the bot token.
//!
//! # See also
//! - <https://core.telegram.org/bots/webapps#validating-data-received-via-the-mini-app>

use super::literal::closed_literal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Telegram user or chat identifier.
///
/// Identifiers may exceed 32 bits but have at most 52 significant bits, so
/// a signed 64-bit integer holds them exactly.
pub type TelegramId = i64;

closed_literal! {
    /// Type of the chat a Mini App was launched from.
    pub enum ChatType {
        Group => "group",
        Supergroup => "supergroup",
        Channel => "channel",
    }
}

/// User descriptor (`WebAppUser`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppUser {
    pub id: TelegramId,
    /// Only present for the `receiver` of attachment-menu launches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// IETF language tag of the user's client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// `.jpeg` or `.svg` URL; only for attachment-menu launches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Chat descriptor (`WebAppChat`), Bot API 6.1+.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppChat {
    pub id: TelegramId,
    #[serde(rename = "type")]
    pub kind: ChatType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Parsed view of the raw init data payload.
///
/// Construct with [`WebAppInitData::new`], which takes exactly the fields the
/// host always sends:
///
/// ```
/// use tgwebapp_core::WebAppInitData;
///
/// let data = WebAppInitData::new(1_700_000_000, "c0ffee");
/// assert!(data.user.is_none());
/// ```
///
/// Leaving out a required field does not compile:
///
/// ```compile_fail
/// use tgwebapp_core::WebAppInitData;
///
/// let data = WebAppInitData::new(1_700_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInitData {
    /// Session id for answering inline queries; attachment-menu launches only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<WebAppUser>,
    /// Counterpart of a private-chat attachment-menu launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<WebAppUser>,
    /// Originating group/supergroup/channel. Bot API 6.1+.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<WebAppChat>,
    /// `startattach` / `startapp` deep-link parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_param: Option<String>,
    /// Unix time (seconds) when the form was opened.
    ///
    /// The host copies this straight from the query string, so
    /// `initDataUnsafe.auth_date` arrives as a numeric string.
    #[serde(deserialize_with = "unix_seconds")]
    pub auth_date: i64,
    /// Integrity hash over all other fields.
    pub hash: String,
}

impl WebAppInitData {
    pub fn new(auth_date: i64, hash: impl Into<String>) -> Self {
        Self {
            query_id: None,
            user: None,
            receiver: None,
            chat: None,
            start_param: None,
            auth_date,
            hash: hash.into(),
        }
    }
}

fn unix_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(i64),
        Text(String),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Number(value) => Ok(value),
        Seconds::Text(text) => text
            .parse()
            .map_err(|_| D::Error::custom(format!("`auth_date` is not an integer: {text}"))),
    }
}

/// Value that crossed the page/host boundary without verification.
///
/// Reading goes through [`Unverified::peek_unverified`] so every call site
/// spells out that it is acting on untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unverified<T> {
    value: T,
}

impl<T> Unverified<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn peek_unverified(&self) -> &T {
        &self.value
    }

    /// Unwraps the value.
    ///
    /// Callers take responsibility for having verified the raw payload
    /// through a trusted path first.
    pub fn into_inner_unverified(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Unverified<U> {
        Unverified::new(f(self.value))
    }
}
