//! Role and header-map types for column classification.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed semantic field that an input column can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    EndpointType,
    Hostname,
    Port,
    Description,
    ResourceGroup,
    SubscriptionId,
    TestId,
    SourceType,
    Source,
    DestinationType,
    Destination,
    Enabled,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EndpointType => "endpoint_type",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Description => "description",
            Self::ResourceGroup => "resource_group",
            Self::SubscriptionId => "subscription_id",
            Self::TestId => "test_id",
            Self::SourceType => "source_type",
            Self::Source => "source",
            Self::DestinationType => "destination_type",
            Self::Destination => "destination",
            Self::Enabled => "enabled",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from role to the zero-based input column that satisfies it.
///
/// The first matching header column wins per role; later columns matching an
/// already-assigned role are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMap {
    indices: BTreeMap<Role, usize>,
}

impl HeaderMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `column` for `role` unless the role is already assigned.
    ///
    /// Returns true when the assignment was recorded.
    pub fn assign(&mut self, role: Role, column: usize) -> bool {
        if self.indices.contains_key(&role) {
            return false;
        }
        self.indices.insert(role, column);
        true
    }

    /// The column assigned to `role`, if any.
    #[must_use]
    pub fn column(&self, role: Role) -> Option<usize> {
        self.indices.get(&role).copied()
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.indices.contains_key(&role)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Roles in `required` that have no assigned column.
    #[must_use]
    pub fn missing_from(&self, required: &[Role]) -> Vec<Role> {
        required
            .iter()
            .copied()
            .filter(|role| !self.contains(*role))
            .collect()
    }
}
