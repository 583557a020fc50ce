//! Deterministic scan value generation for automated experiment sweeps.
//!
//! This crate generates parameter-sweep value sequences: given a description
//! of how a control variable should vary (fixed value, linear range, centered
//! range, explicit list), it produces a finite, restartable sequence of
//! values together with structural metadata (point count, kind, defining
//! parameters) that downstream schedulers and visualization layers consume
//! before execution starts.
//!
//! # Quick Start
//!
//! ```
//! use scan_core::{RangeScan, ScanObject};
//!
//! let scan: ScanObject = RangeScan::new(0.0, 10.0, 5).into();
//!
//! // Pre-flight: count and metadata are available without materializing.
//! assert_eq!(scan.count(), 5);
//!
//! // Execution: one value per experiment step.
//! let values: Vec<f64> = scan.points().collect();
//! assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
//! ```
//!
//! # Architecture
//!
//! - [`scan`]: the closed set of scan generation policies and the pass
//!   iterator
//! - [`scannable`]: parameter-level adapter applying default, scaling, and
//!   bounds policy
//! - [`contract`]: the self-describing metadata record and scan-plan
//!   fingerprinting
//! - [`error`]: configuration and range errors
//!
//! Multi-axis composition (Cartesian products, chaining, sweep driving)
//! lives in the `scan_experiments` crate.

pub mod contract;
pub mod error;
pub mod scan;
pub mod scannable;

pub use contract::{scan_fingerprint, stable_spec_json, ScanRecord, ScanSpec, SCAN_SCHEMA_VERSION};
pub use error::ScanError;
pub use scan::{CenterScan, ExplicitScan, NoScan, RangeScan, ScanObject, ScanPoints};
pub use scannable::{Scannable, ScannablePoints, ScannableSpec};
