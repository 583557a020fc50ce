//! Linear chaining of scan ranges into a single scan.
//!
//! A chain sweeps its members end to end: the first added scan is swept
//! first, then the second, and so on. The chain materializes into a single
//! explicit scan so that disparate ranges behave like any other axis.

use scan_core::{ExplicitScan, ScanObject};

/// Chains multiple scans into one linear scan.
#[derive(Debug, Clone, Default)]
pub struct ScanChain {
    scans: Vec<ScanObject>,
}

impl ScanChain {
    pub fn new() -> Self {
        Self { scans: Vec::new() }
    }

    /// Append a scan to the chain.
    pub fn add(&mut self, scan: ScanObject) {
        self.scans.push(scan);
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    /// Total chained length: the sum of member counts.
    pub fn count(&self) -> usize {
        self.scans.iter().map(ScanObject::count).sum()
    }

    /// Materialize one pass of every member, concatenated in registration
    /// order, as a single explicit scan.
    ///
    /// Randomized members contribute the ordering drawn for this
    /// materialization; the resulting explicit scan is then fixed.
    pub fn into_scan(self) -> ScanObject {
        let points: Vec<f64> = self.scans.iter().flat_map(ScanObject::points).collect();
        ExplicitScan::new(points).into()
    }
}
