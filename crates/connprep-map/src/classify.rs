//! Header classification over the ordered rule tables.

use connprep_model::Mode;

use crate::error::ClassifyError;
use crate::rules::{required_roles, rules_for};
use crate::types::HeaderMap;

fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classifies a header row into a [`HeaderMap`] for `mode`.
///
/// Each header is matched against the mode's rule table in priority order.
/// The first matching rule claims the header, and the first header claims
/// the role; a later header matching an already-assigned role is consumed
/// but ignored. Headers matching no rule are left unmapped.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingRequired`] when the mode's required
/// roles remain unassigned.
pub fn classify_headers(mode: Mode, headers: &[String]) -> Result<HeaderMap, ClassifyError> {
    let mut map = HeaderMap::new();
    for (column, raw) in headers.iter().enumerate() {
        let header = normalize_header(raw);
        if let Some(rule) = rules_for(mode).iter().find(|rule| rule.matches(&header)) {
            map.assign(rule.role, column);
        }
    }
    let missing = map.missing_from(required_roles(mode));
    if missing.is_empty() {
        Ok(map)
    } else {
        Err(ClassifyError::MissingRequired { mode, missing })
    }
}
