//! Parameter-level adapter applying default, scaling, and bounds policy.
//!
//! A [`Scannable`] resolves a discriminated configuration record into one
//! concrete scan at construction time, then applies `scale` and the global
//! bounds to every produced value before it reaches the caller. No silent
//! clamping: a scaled value outside `[global_min, global_max]` surfaces as
//! [`ScanError::OutOfRange`] at the point it is produced.

use serde::{Deserialize, Serialize};

use crate::contract::ScanSpec;
use crate::error::ScanError;
use crate::scan::{NoScan, ScanObject, ScanPoints};

/// A scan wrapped with unit, scaling, and validation policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Scannable {
    scan: ScanObject,
    unit: Option<String>,
    scale: f64,
    global_step: Option<f64>,
    global_min: Option<f64>,
    global_max: Option<f64>,
}

impl Scannable {
    /// Resolve a configuration record into a concrete scan with default
    /// policy (scale 1.0, no bounds).
    pub fn new(spec: ScanSpec) -> Result<Self, ScanError> {
        Ok(Self::from_scan(ScanObject::from_spec(spec)?))
    }

    /// Wrap an already constructed scan.
    pub fn from_scan(scan: ScanObject) -> Self {
        Self {
            scan,
            unit: None,
            scale: 1.0,
            global_step: None,
            global_min: None,
            global_max: None,
        }
    }

    /// Caller-supplied default when no scan is configured: the constant
    /// produced exactly once.
    pub fn constant(value: f64) -> Self {
        Self::from_scan(NoScan::new(value, 1).into())
    }

    /// Set the display unit carried in `describe()` metadata.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the multiplicative scale applied to every produced value.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the step granularity hint carried in `describe()` metadata.
    pub fn global_step(mut self, step: f64) -> Result<Self, ScanError> {
        if step <= 0.0 {
            return Err(ScanError::invalid(format!(
                "global_step must be positive, got {step}"
            )));
        }
        self.global_step = Some(step);
        Ok(self)
    }

    /// Set the lower bound checked after scaling.
    pub fn global_min(mut self, min: f64) -> Self {
        self.global_min = Some(min);
        self
    }

    /// Set the upper bound checked after scaling.
    pub fn global_max(mut self, max: f64) -> Self {
        self.global_max = Some(max);
        self
    }

    pub fn scan(&self) -> &ScanObject {
        &self.scan
    }

    pub fn count(&self) -> usize {
        self.scan.count()
    }

    /// Apply scale then bounds to one raw scan value.
    pub fn process(&self, value: f64) -> Result<f64, ScanError> {
        let scaled = value * self.scale;
        let min = self.global_min.unwrap_or(f64::NEG_INFINITY);
        let max = self.global_max.unwrap_or(f64::INFINITY);
        if scaled < min || scaled > max {
            return Err(ScanError::OutOfRange {
                value: scaled,
                min,
                max,
            });
        }
        Ok(scaled)
    }

    /// Start one independent pass over the processed value stream.
    pub fn points(&self) -> ScannablePoints<'_> {
        ScannablePoints {
            scannable: self,
            inner: self.scan.points(),
        }
    }

    /// Delegates to the wrapped scan, annotated with unit and scale.
    pub fn describe(&self) -> ScannableSpec {
        ScannableSpec {
            unit: self.unit.clone(),
            scale: self.scale,
            global_step: self.global_step,
            scan: self.scan.describe(),
        }
    }
}

/// One pass over a scannable's processed values.
///
/// Each element is checked against the global bounds as it is produced, so
/// an offending value surfaces exactly where the raw scan yields it.
#[derive(Debug, Clone)]
pub struct ScannablePoints<'a> {
    scannable: &'a Scannable,
    inner: ScanPoints<'a>,
}

impl Iterator for ScannablePoints<'_> {
    type Item = Result<f64, ScanError>;

    fn next(&mut self) -> Option<Result<f64, ScanError>> {
        self.inner.next().map(|value| self.scannable.process(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ScannablePoints<'_> {}

/// `describe()` record of a scannable: the wrapped scan's metadata plus the
/// unit/scale annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannableSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_step: Option<f64>,
    pub scan: ScanSpec,
}
