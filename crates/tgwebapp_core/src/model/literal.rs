//! Closed string-literal unions used by the host surface.
//!
//! # Responsibility
//! - Map every enumerated host string (color scheme, chat type, haptic style,
//!   event kind, ...) onto a Rust enum with a fixed literal set.
//! - Keep the JS spelling of each literal in exactly one place.
//!
//! # Invariants
//! - `ALL` lists every variant once, in declaration order.
//! - Literal matching is exact: no trimming, no case folding. The host never
//!   emits variants of its literals, so anything else is a protocol violation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A Rust enum mirroring one closed string union of the host API.
pub trait JsLiteral: Copy + Sized + 'static {
    /// Rust type name, used in error messages.
    const TYPE_NAME: &'static str;
    /// Every permitted value, in declaration order.
    const ALL: &'static [Self];

    /// Exact literal the host uses for this value.
    fn as_js_str(self) -> &'static str;

    /// Parses one host literal.
    fn from_js_str(value: &str) -> Result<Self, LiteralError> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_js_str() == value)
            .ok_or_else(|| LiteralError {
                type_name: Self::TYPE_NAME,
                value: value.to_string(),
            })
    }

    /// Returns the literal strings in declaration order.
    fn js_literals() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_js_str()).collect()
    }
}

/// Rejected literal for a closed union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    pub type_name: &'static str,
    pub value: String,
}

impl Display for LiteralError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` is not a permitted {} literal",
            self.value, self.type_name
        )
    }
}

impl Error for LiteralError {}

/// Declares a closed literal enum together with its `JsLiteral`, `Display`,
/// `FromStr` and serde impls.
macro_rules! closed_literal {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $literal:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::model::literal::JsLiteral for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn as_js_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::model::literal::JsLiteral::as_js_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::literal::LiteralError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <Self as $crate::model::literal::JsLiteral>::from_js_str(value)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::model::literal::JsLiteral::as_js_str(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::model::literal::JsLiteral>::from_js_str(&raw)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use closed_literal;
