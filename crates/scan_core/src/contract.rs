//! Self-describing scan metadata contract.
//!
//! A scan's `describe()` output is a fixed, versionable shape per kind so
//! that downstream schedulers and visualization consumers can switch on the
//! `kind` tag without materializing any points. The same shape doubles as
//! the upstream configuration surface: feeding a described scan back through
//! [`ScanObject::from_spec`](crate::scan::ScanObject::from_spec) reproduces
//! an equivalent scan.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const SCAN_SCHEMA_VERSION: &str = "v1";

/// Discriminated scan configuration and `describe()` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanSpec {
    NoScan {
        value: f64,
        repetitions: usize,
    },
    Range {
        start: f64,
        stop: f64,
        npoints: usize,
        randomize: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    Center {
        center: f64,
        span: f64,
        step: f64,
        randomize: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    Explicit {
        points: Vec<f64>,
        #[serde(default)]
        randomize: bool,
    },
}

/// The archival form of a scan description: the metadata record stamped
/// with the schema version it was written under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub schema_version: String,
    pub scan: ScanSpec,
}

impl ScanRecord {
    pub fn new(scan: ScanSpec) -> Self {
        Self {
            schema_version: SCAN_SCHEMA_VERSION.to_string(),
            scan,
        }
    }
}

/// Stable JSON text for scan metadata, used for archival and fingerprinting.
pub fn stable_spec_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of scan metadata should not fail")
}

/// Content fingerprint of a scan plan.
///
/// Hashes the versioned [`ScanRecord`] form, so two scans with identical
/// defining parameters fingerprint identically under one schema version and
/// a schema revision invalidates archived fingerprints.
pub fn scan_fingerprint(spec: &ScanSpec) -> String {
    let record = ScanRecord::new(spec.clone());
    let mut hasher = Sha256::new();
    hasher.update(stable_spec_json(&record));
    format!("{:x}", hasher.finalize())
}
