//! Multi-axis sweep composition on top of `scan_core`.
//!
//! This crate combines several named scans into a single Cartesian-product
//! enumeration, chains disparate ranges into one linear scan, and drives a
//! sweep pass with progress reporting sized from the pre-flight point count.
//!
//! # Quick Start
//!
//! ```
//! use scan_core::{CenterScan, RangeScan};
//! use scan_experiments::MultiScanManager;
//!
//! let mut sweep = MultiScanManager::new();
//! sweep.add("frequency", RangeScan::new(0.0, 10.0, 5).into()).unwrap();
//! sweep.add("amplitude", CenterScan::new(1.0, 4.0, 1.0).unwrap().into()).unwrap();
//!
//! // Pre-flight: total combined length for progress-bar sizing.
//! assert_eq!(sweep.total_points(), 25);
//!
//! // Execution: the last registered axis ("amplitude") varies fastest.
//! for point in sweep.points() {
//!     let _frequency = point.get("frequency").unwrap();
//!     let _amplitude = point.get("amplitude").unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! - [`multiscan`]: Cartesian-product enumeration over named axes
//! - [`chain`]: linear chaining of scan ranges into a single scan
//! - [`runner`]: pull-based sweep driver with an optional progress bar

pub mod chain;
pub mod multiscan;
pub mod runner;

pub use chain::ScanChain;
pub use multiscan::{AxisSpec, MultiScanManager, MultiScanPoints, ScanPoint};
pub use runner::{run_sweep, run_sweep_with_progress};
