pub mod normalize;

pub use normalize::{Normalized, normalize_enabled, normalize_endpoints, normalize_tests};
