//! The ordered classification tables.
//!
//! Substring heuristics are deliberately kept as static data: priority is the
//! table order, and tests pin it. Patterns match against a lower-cased,
//! trimmed header.

use connprep_model::Mode;

use crate::types::Role;

/// A single pattern over a normalized header.
#[derive(Debug, Clone, Copy)]
pub enum HeaderPattern {
    /// Header equals the value exactly.
    Exact(&'static str),
    /// Header contains any of the listed fragments.
    ContainsAny(&'static [&'static str]),
    /// Header contains every listed fragment.
    ContainsAll(&'static [&'static str]),
}

impl HeaderPattern {
    fn matches(self, header: &str) -> bool {
        match self {
            Self::Exact(value) => header == value,
            Self::ContainsAny(fragments) => fragments.iter().any(|f| header.contains(f)),
            Self::ContainsAll(fragments) => fragments.iter().all(|f| header.contains(f)),
        }
    }
}

/// One entry of the ordered classification table.
///
/// A rule matches when any pattern in `any_of` matches and no pattern in
/// `none_of` does.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRule {
    pub role: Role,
    any_of: &'static [HeaderPattern],
    none_of: &'static [HeaderPattern],
}

impl HeaderRule {
    #[must_use]
    pub fn matches(&self, header: &str) -> bool {
        self.any_of.iter().any(|pattern| pattern.matches(header))
            && !self.none_of.iter().any(|pattern| pattern.matches(header))
    }
}

const NONE: &[HeaderPattern] = &[];

const ENDPOINT_RULES: [HeaderRule; 6] = [
    HeaderRule {
        role: Role::EndpointType,
        any_of: &[HeaderPattern::ContainsAny(&["type", "endpoint"])],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::Hostname,
        any_of: &[HeaderPattern::ContainsAny(&["host", "server", "address"])],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::Port,
        any_of: &[HeaderPattern::ContainsAny(&["port"])],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::Description,
        any_of: &[HeaderPattern::ContainsAny(&["desc", "name", "detail"])],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::ResourceGroup,
        any_of: &[HeaderPattern::ContainsAny(&["group", "rg"])],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::SubscriptionId,
        any_of: &[HeaderPattern::ContainsAny(&["sub", "subscription"])],
        none_of: NONE,
    },
];

const TEST_RULES: [HeaderRule; 6] = [
    HeaderRule {
        role: Role::TestId,
        any_of: &[
            HeaderPattern::ContainsAll(&["test", "id"]),
            HeaderPattern::ContainsAll(&["test", "name"]),
        ],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::SourceType,
        any_of: &[HeaderPattern::ContainsAll(&["source", "type"])],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::Source,
        any_of: &[
            HeaderPattern::Exact("source"),
            HeaderPattern::ContainsAll(&["source", "name"]),
        ],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::DestinationType,
        any_of: &[HeaderPattern::ContainsAll(&["dest", "type"])],
        none_of: NONE,
    },
    HeaderRule {
        role: Role::Destination,
        any_of: &[
            HeaderPattern::Exact("destination"),
            HeaderPattern::ContainsAny(&["dest"]),
        ],
        none_of: &[HeaderPattern::ContainsAny(&["type"])],
    },
    HeaderRule {
        role: Role::Enabled,
        any_of: &[HeaderPattern::ContainsAny(&["enable", "run", "active"])],
        none_of: NONE,
    },
];

/// The ordered rule table for a conversion mode.
///
/// Earlier rules take priority when a header satisfies more than one.
#[must_use]
pub fn rules_for(mode: Mode) -> &'static [HeaderRule] {
    match mode {
        Mode::Endpoints => &ENDPOINT_RULES,
        Mode::Tests => &TEST_RULES,
    }
}

/// Roles that must be assigned for a mode's conversion to proceed.
#[must_use]
pub fn required_roles(mode: Mode) -> &'static [Role] {
    match mode {
        Mode::Endpoints => &[Role::Hostname, Role::Port],
        Mode::Tests => &[Role::Source, Role::Destination],
    }
}
