//! Error types for header classification.

use thiserror::Error;

use connprep_model::Mode;

use crate::types::Role;

/// Errors from header classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The input has no column for one or more required roles.
    #[error("{mode} input must have columns for {}", format_roles(.missing))]
    MissingRequired { mode: Mode, missing: Vec<Role> },
}

fn format_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}
