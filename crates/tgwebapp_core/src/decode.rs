//! Raw init data decoding.
//!
//! # Responsibility
//! - Turn the URL-encoded `Telegram.WebApp.initData` string into the same
//!   view the host exposes as `initDataUnsafe`.
//!
//! # Invariants
//! - Output is always wrapped in `Unverified`; `hash` is carried, never
//!   checked.
//! - Unknown keys are ignored so newer host payloads still decode.
//! - Repeated keys: the last occurrence wins, as in the host's own parser.
//! - Logs carry key presence only, never values.

use crate::model::init_data::{Unverified, WebAppChat, WebAppInitData, WebAppUser};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::form_urlencoded;

pub type InitDataResult<T> = Result<T, InitDataError>;

/// Raw init data decode errors.
#[derive(Debug)]
pub enum InitDataError {
    MissingField(&'static str),
    InvalidAuthDate(String),
    InvalidJson {
        field: &'static str,
        source: serde_json::Error,
    },
}

impl Display for InitDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "init data is missing `{field}`"),
            Self::InvalidAuthDate(value) => {
                write!(f, "init data `auth_date` is not an integer: {value}")
            }
            Self::InvalidJson { field, source } => {
                write!(f, "init data `{field}` is not a valid object: {source}")
            }
        }
    }
}

impl Error for InitDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson { source, .. } => Some(source),
            Self::MissingField(_) | Self::InvalidAuthDate(_) => None,
        }
    }
}

#[derive(Default)]
struct RawFields {
    query_id: Option<String>,
    user: Option<String>,
    receiver: Option<String>,
    chat: Option<String>,
    start_param: Option<String>,
    auth_date: Option<String>,
    hash: Option<String>,
    ignored: usize,
}

/// Decodes a raw `initData` string into its untrusted parsed view.
///
/// # Errors
/// - `MissingField` when `auth_date` or `hash` is absent.
/// - `InvalidAuthDate` when `auth_date` is not a base-10 integer.
/// - `InvalidJson` when `user`, `receiver` or `chat` is not the documented
///   object shape.
pub fn decode_init_data(raw: &str) -> InitDataResult<Unverified<WebAppInitData>> {
    let fields = collect_fields(raw);
    debug!(
        "event=init_data_decode module=decode status=start query_id={} user={} receiver={} chat={} start_param={} ignored_keys={}",
        fields.query_id.is_some(),
        fields.user.is_some(),
        fields.receiver.is_some(),
        fields.chat.is_some(),
        fields.start_param.is_some(),
        fields.ignored
    );

    match build(fields) {
        Ok(data) => {
            debug!("event=init_data_decode module=decode status=ok");
            Ok(Unverified::new(data))
        }
        Err(err) => {
            warn!(
                "event=init_data_decode module=decode status=error error_code={}",
                error_code(&err)
            );
            Err(err)
        }
    }
}

fn collect_fields(raw: &str) -> RawFields {
    let mut fields = RawFields::default();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        let slot = match key.as_ref() {
            "query_id" => &mut fields.query_id,
            "user" => &mut fields.user,
            "receiver" => &mut fields.receiver,
            "chat" => &mut fields.chat,
            "start_param" => &mut fields.start_param,
            "auth_date" => &mut fields.auth_date,
            "hash" => &mut fields.hash,
            _ => {
                fields.ignored += 1;
                continue;
            }
        };
        *slot = Some(value.into_owned());
    }
    fields
}

fn build(fields: RawFields) -> InitDataResult<WebAppInitData> {
    let auth_date_raw = fields
        .auth_date
        .ok_or(InitDataError::MissingField("auth_date"))?;
    let auth_date = auth_date_raw
        .parse::<i64>()
        .map_err(|_| InitDataError::InvalidAuthDate(auth_date_raw.clone()))?;
    let hash = fields.hash.ok_or(InitDataError::MissingField("hash"))?;

    let mut data = WebAppInitData::new(auth_date, hash);
    data.query_id = fields.query_id;
    data.user = parse_json::<WebAppUser>("user", fields.user)?;
    data.receiver = parse_json::<WebAppUser>("receiver", fields.receiver)?;
    data.chat = parse_json::<WebAppChat>("chat", fields.chat)?;
    data.start_param = fields.start_param;
    Ok(data)
}

fn parse_json<T: DeserializeOwned>(
    field: &'static str,
    raw: Option<String>,
) -> InitDataResult<Option<T>> {
    raw.map(|value| {
        serde_json::from_str::<T>(&value).map_err(|source| InitDataError::InvalidJson {
            field,
            source,
        })
    })
    .transpose()
}

fn error_code(err: &InitDataError) -> &'static str {
    match err {
        InitDataError::MissingField(_) => "missing_field",
        InitDataError::InvalidAuthDate(_) => "invalid_auth_date",
        InitDataError::InvalidJson { .. } => "invalid_json",
    }
}
