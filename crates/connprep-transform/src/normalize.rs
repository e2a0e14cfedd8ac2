//! Row normalization for both conversion modes.
//!
//! Defaults apply only when a source column is absent from the header map;
//! a mapped-but-empty cell keeps its empty value. Rows missing a required
//! field are dropped, never errors.

use tracing::debug;

use connprep_ingest::CsvTable;
use connprep_map::{HeaderMap, Role};
use connprep_model::{EndpointRow, TestRow};

/// Fallback endpoint type when the input has no type column.
const DEFAULT_ENDPOINT_TYPE: &str = "custom";
/// Fallback for absent resource-group and subscription columns.
const UNKNOWN: &str = "unknown";
/// Fallback source/destination type when the input has no type columns.
const DEFAULT_PEER_TYPE: &str = "auto";
/// Values (case-insensitive) treated as an affirmative enabled flag.
const ENABLED_VALUES: [&str; 6] = ["yes", "y", "true", "1", "enabled", "active"];

/// Outcome of normalizing a table: emitted rows plus row accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub rows: Vec<T>,
    /// Data rows inspected, including skipped ones.
    pub scanned: usize,
    /// Rows dropped for being blank or missing a required field.
    pub skipped: usize,
}

impl<T> Normalized<T> {
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.rows.len()
    }
}

fn mapped<'a>(row: &'a [String], map: &HeaderMap, role: Role) -> Option<&'a str> {
    map.column(role)
        .and_then(|idx| row.get(idx))
        .map(String::as_str)
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|value| value.is_empty())
}

/// Collapses an enabled flag to the literal `yes` / `no`.
#[must_use]
pub fn normalize_enabled(value: &str) -> &'static str {
    let lowered = value.to_lowercase();
    if ENABLED_VALUES.contains(&lowered.as_str()) {
        "yes"
    } else {
        "no"
    }
}

/// Normalizes data rows into [`EndpointRow`] records.
///
/// Rows with an empty hostname or port after mapping are dropped; drops are
/// visible in the returned counts and at `debug` level.
#[must_use]
pub fn normalize_endpoints(table: &CsvTable, map: &HeaderMap) -> Normalized<EndpointRow> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        if is_blank(row) {
            skipped += 1;
            continue;
        }
        let hostname = mapped(row, map, Role::Hostname).unwrap_or("");
        let port = mapped(row, map, Role::Port).unwrap_or("");
        if hostname.is_empty() || port.is_empty() {
            skipped += 1;
            debug!(row = index + 1, "skipping row without hostname and port");
            continue;
        }
        let description = match mapped(row, map, Role::Description) {
            Some(value) => value.to_string(),
            None => hostname.to_string(),
        };
        rows.push(EndpointRow {
            endpoint_type: mapped(row, map, Role::EndpointType)
                .unwrap_or(DEFAULT_ENDPOINT_TYPE)
                .to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
            description,
            resource_group: mapped(row, map, Role::ResourceGroup)
                .unwrap_or(UNKNOWN)
                .to_string(),
            subscription_id: mapped(row, map, Role::SubscriptionId)
                .unwrap_or(UNKNOWN)
                .to_string(),
        });
    }
    Normalized {
        rows,
        scanned: table.rows.len(),
        skipped,
    }
}

/// Normalizes data rows into [`TestRow`] records.
///
/// `test_id` defaults count every scanned row, so generated identifiers stay
/// stable when neighbouring rows are skipped.
#[must_use]
pub fn normalize_tests(table: &CsvTable, map: &HeaderMap) -> Normalized<TestRow> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        if is_blank(row) {
            skipped += 1;
            continue;
        }
        let source = mapped(row, map, Role::Source).unwrap_or("");
        let destination = mapped(row, map, Role::Destination).unwrap_or("");
        if source.is_empty() || destination.is_empty() {
            skipped += 1;
            debug!(row = index + 1, "skipping row without source and destination");
            continue;
        }
        let test_id = match mapped(row, map, Role::TestId) {
            Some(value) => value.to_string(),
            None => format!("test_{}", index + 1),
        };
        let enabled = match mapped(row, map, Role::Enabled) {
            Some(value) => normalize_enabled(value).to_string(),
            None => "yes".to_string(),
        };
        rows.push(TestRow {
            test_id,
            source_type: mapped(row, map, Role::SourceType)
                .unwrap_or(DEFAULT_PEER_TYPE)
                .to_string(),
            source: source.to_string(),
            destination_type: mapped(row, map, Role::DestinationType)
                .unwrap_or(DEFAULT_PEER_TYPE)
                .to_string(),
            destination: destination.to_string(),
            enabled,
        });
    }
    Normalized {
        rows,
        scanned: table.rows.len(),
        skipped,
    }
}
