pub mod classify;
pub mod error;
pub mod rules;
pub mod types;

pub use classify::classify_headers;
pub use error::ClassifyError;
pub use rules::{HeaderRule, required_roles, rules_for};
pub use types::{HeaderMap, Role};
