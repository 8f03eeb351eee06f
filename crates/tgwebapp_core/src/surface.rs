//! Conformance catalog of host member names per revision.
//!
//! # Responsibility
//! - List every documented member of every host interface with its exact JS
//!   name, its kind, and the revision that introduced it.
//! - Record which control methods return the control for chaining.
//!
//! # Invariants
//! - `(interface, js_name)` pairs are unique.
//! - Revisions are additive: a member listed for 6.0 is listed for 6.1.
//! - Interfaces with no member in a revision do not exist in that revision.

use crate::model::literal::{closed_literal, JsLiteral};
use crate::revision::ProtocolRevision;

closed_literal! {
    /// Interfaces of the host namespace.
    #[derive(PartialOrd, Ord)]
    pub enum HostInterface {
        WebApp => "WebApp",
        WebAppInitData => "WebAppInitData",
        WebAppUser => "WebAppUser",
        WebAppChat => "WebAppChat",
        ThemeParams => "ThemeParams",
        MainButton => "MainButton",
        MainButtonParams => "MainButtonParams",
        BackButton => "BackButton",
        HapticFeedback => "HapticFeedback",
    }
}

/// Shape category of one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Always present once the interface exists.
    RequiredField,
    /// Present only for some launch contexts or host builds.
    OptionalField,
    Method,
}

/// One documented member of a host interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceMember {
    pub interface: HostInterface,
    pub js_name: &'static str,
    pub kind: MemberKind,
    pub since: ProtocolRevision,
    /// Revision from which the method returns its receiver.
    pub chains_since: Option<ProtocolRevision>,
}

impl SurfaceMember {
    pub fn is_available_in(&self, revision: ProtocolRevision) -> bool {
        self.since <= revision
    }

    /// Whether calling this method in `revision` yields the invoking control.
    pub fn returns_control(&self, revision: ProtocolRevision) -> bool {
        self.is_available_in(revision)
            && matches!(self.chains_since, Some(since) if since <= revision)
    }
}

const fn required(
    interface: HostInterface,
    js_name: &'static str,
    since: ProtocolRevision,
) -> SurfaceMember {
    SurfaceMember {
        interface,
        js_name,
        kind: MemberKind::RequiredField,
        since,
        chains_since: None,
    }
}

const fn optional(
    interface: HostInterface,
    js_name: &'static str,
    since: ProtocolRevision,
) -> SurfaceMember {
    SurfaceMember {
        interface,
        js_name,
        kind: MemberKind::OptionalField,
        since,
        chains_since: None,
    }
}

const fn method(
    interface: HostInterface,
    js_name: &'static str,
    since: ProtocolRevision,
) -> SurfaceMember {
    SurfaceMember {
        interface,
        js_name,
        kind: MemberKind::Method,
        since,
        chains_since: None,
    }
}

const fn chaining(
    interface: HostInterface,
    js_name: &'static str,
    since: ProtocolRevision,
    chains_since: ProtocolRevision,
) -> SurfaceMember {
    SurfaceMember {
        interface,
        js_name,
        kind: MemberKind::Method,
        since,
        chains_since: Some(chains_since),
    }
}

use HostInterface as I;
use ProtocolRevision::{V6_0, V6_1};

const SURFACE: &[SurfaceMember] = &[
    // WebApp
    required(I::WebApp, "initData", V6_0),
    required(I::WebApp, "initDataUnsafe", V6_0),
    required(I::WebApp, "colorScheme", V6_0),
    required(I::WebApp, "themeParams", V6_0),
    required(I::WebApp, "isExpanded", V6_0),
    required(I::WebApp, "viewportHeight", V6_0),
    required(I::WebApp, "viewportStableHeight", V6_0),
    required(I::WebApp, "MainButton", V6_0),
    method(I::WebApp, "onEvent", V6_0),
    method(I::WebApp, "offEvent", V6_0),
    method(I::WebApp, "sendData", V6_0),
    method(I::WebApp, "ready", V6_0),
    method(I::WebApp, "expand", V6_0),
    method(I::WebApp, "close", V6_0),
    required(I::WebApp, "version", V6_1),
    required(I::WebApp, "headerColor", V6_1),
    required(I::WebApp, "backgroundColor", V6_1),
    required(I::WebApp, "BackButton", V6_1),
    required(I::WebApp, "HapticFeedback", V6_1),
    method(I::WebApp, "isVersionAtLeast", V6_1),
    method(I::WebApp, "setHeaderColor", V6_1),
    method(I::WebApp, "setBackgroundColor", V6_1),
    method(I::WebApp, "openLink", V6_1),
    method(I::WebApp, "openTelegramLink", V6_1),
    method(I::WebApp, "openInvoice", V6_1),
    // WebAppInitData
    optional(I::WebAppInitData, "query_id", V6_0),
    optional(I::WebAppInitData, "user", V6_0),
    optional(I::WebAppInitData, "receiver", V6_0),
    optional(I::WebAppInitData, "start_param", V6_0),
    required(I::WebAppInitData, "auth_date", V6_0),
    required(I::WebAppInitData, "hash", V6_0),
    optional(I::WebAppInitData, "chat", V6_1),
    // WebAppUser
    required(I::WebAppUser, "id", V6_0),
    optional(I::WebAppUser, "is_bot", V6_0),
    required(I::WebAppUser, "first_name", V6_0),
    optional(I::WebAppUser, "last_name", V6_0),
    optional(I::WebAppUser, "username", V6_0),
    optional(I::WebAppUser, "language_code", V6_0),
    optional(I::WebAppUser, "photo_url", V6_0),
    // WebAppChat
    required(I::WebAppChat, "id", V6_1),
    required(I::WebAppChat, "type", V6_1),
    required(I::WebAppChat, "title", V6_1),
    optional(I::WebAppChat, "username", V6_1),
    optional(I::WebAppChat, "photo_url", V6_1),
    // ThemeParams
    optional(I::ThemeParams, "bg_color", V6_0),
    optional(I::ThemeParams, "text_color", V6_0),
    optional(I::ThemeParams, "hint_color", V6_0),
    optional(I::ThemeParams, "link_color", V6_0),
    optional(I::ThemeParams, "button_color", V6_0),
    optional(I::ThemeParams, "button_text_color", V6_0),
    optional(I::ThemeParams, "secondary_bg_color", V6_1),
    // MainButton
    required(I::MainButton, "text", V6_0),
    required(I::MainButton, "color", V6_0),
    required(I::MainButton, "textColor", V6_0),
    required(I::MainButton, "isVisible", V6_0),
    required(I::MainButton, "isActive", V6_0),
    required(I::MainButton, "isProgressVisible", V6_0),
    chaining(I::MainButton, "setText", V6_0, V6_1),
    chaining(I::MainButton, "onClick", V6_0, V6_1),
    chaining(I::MainButton, "offClick", V6_0, V6_1),
    chaining(I::MainButton, "show", V6_0, V6_1),
    chaining(I::MainButton, "hide", V6_0, V6_1),
    chaining(I::MainButton, "enable", V6_0, V6_1),
    chaining(I::MainButton, "disable", V6_0, V6_1),
    chaining(I::MainButton, "showProgress", V6_0, V6_1),
    chaining(I::MainButton, "hideProgress", V6_0, V6_1),
    chaining(I::MainButton, "setParams", V6_0, V6_1),
    // MainButtonParams
    optional(I::MainButtonParams, "text", V6_0),
    optional(I::MainButtonParams, "color", V6_0),
    optional(I::MainButtonParams, "text_color", V6_0),
    optional(I::MainButtonParams, "is_active", V6_0),
    optional(I::MainButtonParams, "is_visible", V6_0),
    // BackButton
    required(I::BackButton, "isVisible", V6_1),
    chaining(I::BackButton, "onClick", V6_1, V6_1),
    chaining(I::BackButton, "offClick", V6_1, V6_1),
    chaining(I::BackButton, "show", V6_1, V6_1),
    chaining(I::BackButton, "hide", V6_1, V6_1),
    // HapticFeedback
    chaining(I::HapticFeedback, "impactOccurred", V6_1, V6_1),
    chaining(I::HapticFeedback, "notificationOccurred", V6_1, V6_1),
    chaining(I::HapticFeedback, "selectionChanged", V6_1, V6_1),
];

/// Every member available in `revision`.
pub fn members(revision: ProtocolRevision) -> impl Iterator<Item = &'static SurfaceMember> {
    SURFACE
        .iter()
        .filter(move |member| member.is_available_in(revision))
}

/// Members of one interface available in `revision`, in catalog order.
pub fn interface_members(
    interface: HostInterface,
    revision: ProtocolRevision,
) -> Vec<&'static SurfaceMember> {
    members(revision)
        .filter(|member| member.interface == interface)
        .collect()
}

/// JS names of one interface's members available in `revision`.
pub fn member_names(interface: HostInterface, revision: ProtocolRevision) -> Vec<&'static str> {
    interface_members(interface, revision)
        .into_iter()
        .map(|member| member.js_name)
        .collect()
}

/// Looks up one member by exact JS name.
pub fn lookup(
    interface: HostInterface,
    js_name: &str,
    revision: ProtocolRevision,
) -> Option<&'static SurfaceMember> {
    members(revision).find(|member| member.interface == interface && member.js_name == js_name)
}

/// Interfaces that exist in `revision`.
pub fn interfaces(revision: ProtocolRevision) -> Vec<HostInterface> {
    HostInterface::ALL
        .iter()
        .copied()
        .filter(|interface| !interface_members(*interface, revision).is_empty())
        .collect()
}

/// Members introduced exactly in `revision`.
pub fn introduced_in(revision: ProtocolRevision) -> Vec<&'static SurfaceMember> {
    SURFACE
        .iter()
        .filter(|member| member.since == revision)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        interfaces, lookup, member_names, members, HostInterface, MemberKind, SURFACE,
    };
    use crate::model::literal::JsLiteral;
    use crate::revision::ProtocolRevision;
    use std::collections::BTreeSet;

    #[test]
    fn member_pairs_are_unique() {
        let mut seen = BTreeSet::new();
        for member in SURFACE {
            assert!(
                seen.insert((member.interface, member.js_name)),
                "duplicate member {}.{}",
                member.interface,
                member.js_name
            );
        }
    }

    #[test]
    fn chaining_never_predates_the_member() {
        for member in SURFACE {
            if let Some(since) = member.chains_since {
                assert_eq!(member.kind, MemberKind::Method);
                assert!(since >= member.since);
            }
        }
    }

    #[test]
    fn later_revision_is_a_superset() {
        let initial = members(ProtocolRevision::V6_0).collect::<Vec<_>>();
        let later = members(ProtocolRevision::V6_1).collect::<Vec<_>>();
        assert!(initial.len() < later.len());
        for member in initial {
            assert!(later.contains(&member));
        }
    }

    #[test]
    fn back_button_and_haptics_only_exist_in_6_1() {
        let initial = interfaces(ProtocolRevision::V6_0);
        assert!(!initial.contains(&HostInterface::BackButton));
        assert!(!initial.contains(&HostInterface::HapticFeedback));
        assert!(!initial.contains(&HostInterface::WebAppChat));

        let later = interfaces(ProtocolRevision::V6_1);
        assert_eq!(later.len(), HostInterface::ALL.len());
    }

    #[test]
    fn main_button_chains_only_from_6_1() {
        let set_text = lookup(HostInterface::MainButton, "setText", ProtocolRevision::V6_0)
            .expect("setText exists in 6.0");
        assert!(!set_text.returns_control(ProtocolRevision::V6_0));
        assert!(set_text.returns_control(ProtocolRevision::V6_1));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup(HostInterface::WebApp, "mainButton", ProtocolRevision::V6_1).is_none());
        assert!(lookup(HostInterface::WebApp, "MainButton", ProtocolRevision::V6_1).is_some());
        assert!(lookup(HostInterface::WebApp, "setHeaderColor", ProtocolRevision::V6_0).is_none());
    }

    #[test]
    fn theme_slots_are_all_optional() {
        assert_eq!(
            member_names(HostInterface::ThemeParams, ProtocolRevision::V6_0).len(),
            6
        );
        for member in super::interface_members(HostInterface::ThemeParams, ProtocolRevision::V6_1)
        {
            assert_eq!(member.kind, MemberKind::OptionalField);
        }
    }
}
