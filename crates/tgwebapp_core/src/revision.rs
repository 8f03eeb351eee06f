//! Host protocol revisions and version tokens.
//!
//! # Responsibility
//! - Name the revisions this crate models.
//! - Give `isVersionAtLeast` a typed argument.
//!
//! # Invariants
//! - Versions compare component-wise as integers, missing components count
//!   as zero: `6.10 > 6.9` and `6 == 6.0`.
//! - A host version maps to the newest modeled revision not above it.

use crate::model::literal::{closed_literal, JsLiteral};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

closed_literal! {
    /// Modeled revisions of the host API, oldest first.
    #[derive(PartialOrd, Ord)]
    pub enum ProtocolRevision {
        /// Initial surface: main button, theme, viewport, `sendData`.
        V6_0 => "6.0",
        /// Adds back button, haptics, header/background colors, version gating,
        /// `secondary_bg_color`, chat init data and link/invoice openers.
        V6_1 => "6.1",
    }
}

impl ProtocolRevision {
    pub fn latest() -> Self {
        Self::V6_1
    }

    /// Lowest host version implementing this revision.
    pub fn min_host_version(self) -> HostVersion {
        match self {
            Self::V6_0 => HostVersion::new(vec![6, 0]),
            Self::V6_1 => HostVersion::new(vec![6, 1]),
        }
    }

    /// Newest modeled revision supported by `version`, or `None` when the
    /// host predates every modeled revision.
    pub fn from_host_version(version: &HostVersion) -> Option<Self> {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|revision| version >= &revision.min_host_version())
    }

    /// Token asking the host for at least this revision.
    pub fn version_token(self) -> VersionToken {
        VersionToken::Text(self.as_js_str().to_string())
    }
}

/// Version string reported by the host (`Telegram.WebApp.version`).
#[derive(Debug, Clone)]
pub struct HostVersion {
    components: Vec<u32>,
}

impl HostVersion {
    fn new(components: Vec<u32>) -> Self {
        Self { components }
    }

    pub fn parse(value: &str) -> Result<Self, VersionError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let components = trimmed
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                    return Err(VersionError::InvalidComponent {
                        version: trimmed.to_string(),
                        component: part.to_string(),
                    });
                }
                part.parse::<u32>()
                    .map_err(|_| VersionError::InvalidComponent {
                        version: trimmed.to_string(),
                        component: part.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(components))
    }

    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Local evaluation of the host's `isVersionAtLeast` rule.
    pub fn is_at_least(&self, token: &VersionToken) -> Result<bool, VersionError> {
        let other = HostVersion::parse(&token.to_string())?;
        Ok(self >= &other)
    }
}

impl PartialEq for HostVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HostVersion {}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|index| {
                let left = self.components.get(index).copied().unwrap_or(0);
                let right = other.components.get(index).copied().unwrap_or(0);
                left.cmp(&right)
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl Display for HostVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .components
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&rendered)
    }
}

impl FromStr for HostVersion {
    type Err = VersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for HostVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HostVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Argument of `isVersionAtLeast`: the host accepts a string or a number.
///
/// Numbers are stringified by the host before comparison, so `6.1` and
/// `"6.1"` are equivalent while `6.10` (the number) collapses to `"6.1"`.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionToken {
    Number(f64),
    Text(String),
}

impl Display for VersionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<f64> for VersionToken {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for VersionToken {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for VersionToken {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&HostVersion> for VersionToken {
    fn from(value: &HostVersion) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<ProtocolRevision> for VersionToken {
    fn from(revision: ProtocolRevision) -> Self {
        revision.version_token()
    }
}

/// Version parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    Empty,
    InvalidComponent { version: String, component: String },
}

impl Display for VersionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "version must not be empty"),
            Self::InvalidComponent { version, component } => write!(
                f,
                "version `{version}` has a non-numeric component `{component}`"
            ),
        }
    }
}

impl Error for VersionError {}

#[cfg(test)]
mod tests {
    use super::{HostVersion, ProtocolRevision, VersionError, VersionToken};
    use crate::model::literal::JsLiteral;

    fn version(value: &str) -> HostVersion {
        HostVersion::parse(value).expect("valid version")
    }

    #[test]
    fn compares_components_numerically() {
        assert!(version("6.10") > version("6.9"));
        assert!(version("7.0") > version("6.99"));
        assert_eq!(version("6"), version("6.0"));
        assert_eq!(version("6.1.0"), version("6.1"));
    }

    #[test]
    fn rejects_malformed_versions() {
        assert_eq!(HostVersion::parse("  ").expect_err("empty"), VersionError::Empty);
        assert!(matches!(
            HostVersion::parse("6.x"),
            Err(VersionError::InvalidComponent { .. })
        ));
        assert!(HostVersion::parse("6..1").is_err());
        assert!(HostVersion::parse("-6").is_err());
    }

    #[test]
    fn maps_host_versions_to_revisions() {
        assert_eq!(ProtocolRevision::from_host_version(&version("5.9")), None);
        assert_eq!(
            ProtocolRevision::from_host_version(&version("6.0")),
            Some(ProtocolRevision::V6_0)
        );
        assert_eq!(
            ProtocolRevision::from_host_version(&version("6.1")),
            Some(ProtocolRevision::V6_1)
        );
        assert_eq!(
            ProtocolRevision::from_host_version(&version("7.10")),
            Some(ProtocolRevision::latest())
        );
    }

    #[test]
    fn evaluates_version_gate_like_the_host() {
        let host = version("6.1");
        assert!(host.is_at_least(&VersionToken::from(6.0)).expect("numeric"));
        assert!(host.is_at_least(&VersionToken::from("6.1")).expect("text"));
        assert!(host
            .is_at_least(&ProtocolRevision::V6_1.into())
            .expect("revision token"));
        assert!(!host.is_at_least(&VersionToken::from("6.2")).expect("text"));
        assert!(host.is_at_least(&VersionToken::from("six")).is_err());
    }

    #[test]
    fn numeric_tokens_render_like_javascript_numbers() {
        assert_eq!(VersionToken::from(6.1).to_string(), "6.1");
        assert_eq!(VersionToken::from(6.0).to_string(), "6");
        assert_eq!(VersionToken::from(6.10).to_string(), "6.1");
    }

    #[test]
    fn revision_literals_are_host_versions() {
        assert_eq!(ProtocolRevision::js_literals(), vec!["6.0", "6.1"]);
        for revision in ProtocolRevision::ALL {
            assert_eq!(
                revision.min_host_version().to_string(),
                revision.as_js_str()
            );
        }
    }
}
