//! Cartesian-product enumeration over multiple named scan axes.
//!
//! Axis registration order defines enumeration precedence: the first
//! registered axis varies slowest (outermost loop) and the last registered
//! axis varies fastest (innermost loop). Downstream progress reporting
//! relies on this order staying stable.

use std::collections::BTreeMap;

use scan_core::{ExplicitScan, ScanError, ScanObject, ScanSpec};
use serde::{Deserialize, Serialize};

/// `describe()` record for one named axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub name: String,
    pub scan: ScanSpec,
}

/// Combines named scans into a single Cartesian-product enumeration.
///
/// Each combined step yields one [`ScanPoint`] mapping axis name to the
/// current value. Total combined length is the product of each axis's
/// count; any axis with zero points short-circuits the whole enumeration
/// to empty.
#[derive(Debug, Clone, Default)]
pub struct MultiScanManager {
    axes: Vec<(String, ScanObject)>,
}

impl MultiScanManager {
    pub fn new() -> Self {
        Self { axes: Vec::new() }
    }

    /// Register a named axis. Names must be unique within one manager.
    pub fn add(&mut self, name: impl Into<String>, scan: ScanObject) -> Result<(), ScanError> {
        let name = name.into();
        if self.axes.iter().any(|(existing, _)| existing == &name) {
            return Err(ScanError::invalid(format!(
                "duplicate axis name '{name}'"
            )));
        }
        self.axes.push((name, scan));
        Ok(())
    }

    /// Register a plain point list as an axis.
    pub fn add_static(
        &mut self,
        name: impl Into<String>,
        points: Vec<f64>,
    ) -> Result<(), ScanError> {
        self.add(name, ExplicitScan::new(points).into())
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axis names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.axes.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Total combined enumeration length: the product of axis counts.
    pub fn total_points(&self) -> usize {
        self.axes
            .iter()
            .fold(1usize, |total, (_, scan)| total.saturating_mul(scan.count()))
    }

    /// Per-axis metadata in registration order, for pre-flight validation
    /// and visualization.
    pub fn describe(&self) -> Vec<AxisSpec> {
        self.axes
            .iter()
            .map(|(name, scan)| AxisSpec {
                name: name.clone(),
                scan: scan.describe(),
            })
            .collect()
    }

    /// Start one independent enumeration pass.
    ///
    /// Each pass materializes one fresh pass per axis, so randomized axes
    /// re-draw their permutation per pass unless seeded.
    pub fn points(&self) -> MultiScanPoints {
        MultiScanPoints::new(self)
    }
}

/// One step of a combined enumeration: the named current values plus the
/// per-axis indices (registration order) that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPoint {
    pub values: BTreeMap<String, f64>,
    pub indices: Vec<usize>,
}

impl ScanPoint {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

/// Index-based odometer over the Cartesian product.
///
/// Explicit per-axis cursors keep iteration memory-bounded regardless of
/// axis count; the cursor over the last registered axis increments first.
#[derive(Debug, Clone)]
pub struct MultiScanPoints {
    names: Vec<String>,
    axes: Vec<Vec<f64>>,
    cursors: Vec<usize>,
    exhausted: bool,
}

impl MultiScanPoints {
    fn new(manager: &MultiScanManager) -> Self {
        let names: Vec<String> = manager.axes.iter().map(|(name, _)| name.clone()).collect();
        let axes: Vec<Vec<f64>> = manager
            .axes
            .iter()
            .map(|(_, scan)| scan.points().collect())
            .collect();
        let exhausted = axes.iter().any(|axis| axis.is_empty());
        let cursors = vec![0; axes.len()];
        Self {
            names,
            axes,
            cursors,
            exhausted,
        }
    }

    fn advance(&mut self) {
        for position in (0..self.cursors.len()).rev() {
            self.cursors[position] += 1;
            if self.cursors[position] < self.axes[position].len() {
                return;
            }
            self.cursors[position] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for MultiScanPoints {
    type Item = ScanPoint;

    fn next(&mut self) -> Option<ScanPoint> {
        if self.exhausted {
            return None;
        }
        let values: BTreeMap<String, f64> = self
            .names
            .iter()
            .zip(self.cursors.iter().zip(&self.axes))
            .map(|(name, (&cursor, axis))| (name.clone(), axis[cursor]))
            .collect();
        let indices = self.cursors.clone();
        self.advance();
        Some(ScanPoint { values, indices })
    }
}
