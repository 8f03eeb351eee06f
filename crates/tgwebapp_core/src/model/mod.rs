//! Data shapes exchanged with the Telegram Mini App host.
//!
//! # Responsibility
//! - Describe every host value the page can read or pass back.
//! - Keep enumerated host strings as closed enums.
//!
//! # Invariants
//! - Serialized field names match the host's names exactly.
//! - Fields the host may omit are `Option`; fields it always sends are not.

pub mod color;
pub mod controls;
pub mod event;
pub mod haptic;
pub mod init_data;
pub mod literal;
pub mod theme;
