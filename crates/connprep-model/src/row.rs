//! Normalized output records.
//!
//! Field declaration order is the output column order; the `FIELDS`
//! constants carry the same order for writers that need an explicit header.

use serde::{Deserialize, Serialize};

/// A normalized endpoint record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRow {
    pub endpoint_type: String,
    pub hostname: String,
    pub port: String,
    pub description: String,
    pub resource_group: String,
    pub subscription_id: String,
}

impl EndpointRow {
    /// Output header, in serialization order.
    pub const FIELDS: [&'static str; 6] = [
        "endpoint_type",
        "hostname",
        "port",
        "description",
        "resource_group",
        "subscription_id",
    ];
}

/// A normalized connectivity-test record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRow {
    pub test_id: String,
    pub source_type: String,
    pub source: String,
    pub destination_type: String,
    pub destination: String,
    pub enabled: String,
}

impl TestRow {
    /// Output header, in serialization order.
    pub const FIELDS: [&'static str; 6] = [
        "test_id",
        "source_type",
        "source",
        "destination_type",
        "destination",
        "enabled",
    ];
}
