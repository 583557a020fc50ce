//! Scan generation policies and the per-pass value iterator.
//!
//! The variant set is closed: every scan is one of [`NoScan`], [`RangeScan`],
//! [`CenterScan`], or [`ExplicitScan`], wrapped in the [`ScanObject`] sum
//! type. A scan is an immutable value object; `count()` always equals the
//! number of values one full pass of [`ScanObject::points`] yields.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::contract::ScanSpec;
use crate::error::ScanError;

/// Repeats a single value a fixed number of times.
///
/// Used when a parameter is held constant while the experiment itself is
/// repeated for statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct NoScan {
    pub(crate) value: f64,
    pub(crate) repetitions: usize,
}

impl NoScan {
    pub fn new(value: f64, repetitions: usize) -> Self {
        Self { value, repetitions }
    }
}

/// Evenly spaced values inclusive of both endpoints.
///
/// `npoints == 1` yields `[start]`; `npoints == 0` yields nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeScan {
    pub(crate) start: f64,
    pub(crate) stop: f64,
    pub(crate) npoints: usize,
    pub(crate) randomize: bool,
    pub(crate) seed: Option<u64>,
}

impl RangeScan {
    pub fn new(start: f64, stop: f64, npoints: usize) -> Self {
        Self {
            start,
            stop,
            npoints,
            randomize: false,
            seed: None,
        }
    }

    /// Shuffle the point order. A seed pins the permutation so every pass
    /// reproduces the identical ordering; without one each pass draws fresh.
    pub fn randomized(mut self, seed: Option<u64>) -> Self {
        self.randomize = true;
        self.seed = seed;
        self
    }
}

/// Symmetric expansion around a center at fixed step resolution.
///
/// Covers `[center - span/2, center + span/2]` with
/// `floor(span/step) + 1` points.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterScan {
    pub(crate) center: f64,
    pub(crate) span: f64,
    pub(crate) step: f64,
    pub(crate) randomize: bool,
    pub(crate) seed: Option<u64>,
}

impl CenterScan {
    pub fn new(center: f64, span: f64, step: f64) -> Result<Self, ScanError> {
        if span <= 0.0 {
            return Err(ScanError::invalid(format!(
                "span must be positive, got {span}"
            )));
        }
        if step <= 0.0 {
            return Err(ScanError::invalid(format!(
                "step must be positive, got {step}"
            )));
        }
        Ok(Self {
            center,
            span,
            step,
            randomize: false,
            seed: None,
        })
    }

    /// Same semantics as [`RangeScan::randomized`].
    pub fn randomized(mut self, seed: Option<u64>) -> Self {
        self.randomize = true;
        self.seed = seed;
        self
    }

    fn count(&self) -> usize {
        (self.span / self.step).floor() as usize + 1
    }
}

/// A caller-provided sequence, passed through exactly as given.
///
/// Randomization is not permitted for this variant; requesting it through
/// the configuration surface fails with
/// [`ScanError::InvalidConfiguration`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitScan {
    pub(crate) points: Vec<f64>,
}

impl ExplicitScan {
    pub fn new(points: Vec<f64>) -> Self {
        Self { points }
    }
}

/// Closed set of scan generation policies.
///
/// Identity is structural: a scan is fully determined by its constructor
/// parameters and never mutated after construction, so independently
/// constructed scans can be iterated concurrently without shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanObject {
    No(NoScan),
    Range(RangeScan),
    Center(CenterScan),
    Explicit(ExplicitScan),
}

impl ScanObject {
    /// Resolve a discriminated configuration record into a concrete scan.
    ///
    /// This is the single upstream configuration surface; all parameter
    /// validation happens here or in the variant constructors, never during
    /// iteration.
    pub fn from_spec(spec: ScanSpec) -> Result<Self, ScanError> {
        match spec {
            ScanSpec::NoScan { value, repetitions } => Ok(NoScan::new(value, repetitions).into()),
            ScanSpec::Range {
                start,
                stop,
                npoints,
                randomize,
                seed,
            } => {
                let mut scan = RangeScan::new(start, stop, npoints);
                if randomize {
                    scan = scan.randomized(seed);
                }
                Ok(scan.into())
            }
            ScanSpec::Center {
                center,
                span,
                step,
                randomize,
                seed,
            } => {
                let mut scan = CenterScan::new(center, span, step)?;
                if randomize {
                    scan = scan.randomized(seed);
                }
                Ok(scan.into())
            }
            ScanSpec::Explicit { points, randomize } => {
                if randomize {
                    return Err(ScanError::invalid(
                        "explicit scans produce their sequence exactly as given and cannot be randomized",
                    ));
                }
                Ok(ExplicitScan::new(points).into())
            }
        }
    }

    /// Number of values one full iteration pass produces.
    pub fn count(&self) -> usize {
        match self {
            ScanObject::No(scan) => scan.repetitions,
            ScanObject::Range(scan) => scan.npoints,
            ScanObject::Center(scan) => scan.count(),
            ScanObject::Explicit(scan) => scan.points.len(),
        }
    }

    /// Structural metadata: kind tag plus the defining parameters, enough
    /// for a consumer to reconstruct or render the scan without iterating.
    pub fn describe(&self) -> ScanSpec {
        match self {
            ScanObject::No(scan) => ScanSpec::NoScan {
                value: scan.value,
                repetitions: scan.repetitions,
            },
            ScanObject::Range(scan) => ScanSpec::Range {
                start: scan.start,
                stop: scan.stop,
                npoints: scan.npoints,
                randomize: scan.randomize,
                seed: scan.seed,
            },
            ScanObject::Center(scan) => ScanSpec::Center {
                center: scan.center,
                span: scan.span,
                step: scan.step,
                randomize: scan.randomize,
                seed: scan.seed,
            },
            ScanObject::Explicit(scan) => ScanSpec::Explicit {
                points: scan.points.clone(),
                randomize: false,
            },
        }
    }

    /// Start one independent iteration pass.
    pub fn points(&self) -> ScanPoints<'_> {
        ScanPoints::new(self)
    }

    /// Value at logical (unshuffled) position `index`.
    fn value_at(&self, index: usize) -> f64 {
        match self {
            ScanObject::No(scan) => scan.value,
            ScanObject::Range(scan) => {
                if scan.npoints == 1 {
                    scan.start
                } else {
                    scan.start
                        + index as f64 * (scan.stop - scan.start) / (scan.npoints - 1) as f64
                }
            }
            ScanObject::Center(scan) => {
                (scan.center - scan.span / 2.0) + index as f64 * scan.step
            }
            ScanObject::Explicit(scan) => scan.points[index],
        }
    }

    fn shuffle(&self) -> Option<(bool, Option<u64>)> {
        match self {
            ScanObject::Range(scan) => Some((scan.randomize, scan.seed)),
            ScanObject::Center(scan) => Some((scan.randomize, scan.seed)),
            ScanObject::No(_) | ScanObject::Explicit(_) => None,
        }
    }
}

impl From<NoScan> for ScanObject {
    fn from(scan: NoScan) -> Self {
        ScanObject::No(scan)
    }
}

impl From<RangeScan> for ScanObject {
    fn from(scan: RangeScan) -> Self {
        ScanObject::Range(scan)
    }
}

impl From<CenterScan> for ScanObject {
    fn from(scan: CenterScan) -> Self {
        ScanObject::Center(scan)
    }
}

impl From<ExplicitScan> for ScanObject {
    fn from(scan: ExplicitScan) -> Self {
        ScanObject::Explicit(scan)
    }
}

/// One iteration pass over a scan.
///
/// Values are computed on demand from the generation formula; a randomized
/// pass draws its index permutation once at pass start, so RNG state is
/// local to the pass and unaffected by unrelated concurrent scans.
#[derive(Debug, Clone)]
pub struct ScanPoints<'a> {
    scan: &'a ScanObject,
    order: Option<Vec<usize>>,
    cursor: usize,
    len: usize,
}

impl<'a> ScanPoints<'a> {
    fn new(scan: &'a ScanObject) -> Self {
        let len = scan.count();
        let order = match scan.shuffle() {
            Some((true, seed)) => {
                let mut indices: Vec<usize> = (0..len).collect();
                match seed {
                    Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed)),
                    None => indices.shuffle(&mut rand::thread_rng()),
                }
                Some(indices)
            }
            _ => None,
        };
        Self {
            scan,
            order,
            cursor: 0,
            len,
        }
    }
}

impl Iterator for ScanPoints<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.cursor >= self.len {
            return None;
        }
        let index = match &self.order {
            Some(order) => order[self.cursor],
            None => self.cursor,
        };
        self.cursor += 1;
        Some(self.scan.value_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanPoints<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_scan_values() {
        let scan: ScanObject = RangeScan::new(0.0, 10.0, 5).into();
        let values: Vec<f64> = scan.points().collect();
        assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_range_scan_endpoints_and_length() {
        for npoints in [2, 3, 7, 100] {
            let scan: ScanObject = RangeScan::new(-3.5, 12.25, npoints).into();
            let values: Vec<f64> = scan.points().collect();
            assert_eq!(values.len(), npoints);
            assert_eq!(scan.count(), npoints);
            assert_eq!(values[0], -3.5);
            assert!((values[npoints - 1] - 12.25).abs() < 1e-9);
            assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn test_range_scan_degenerate_cases() {
        let single: ScanObject = RangeScan::new(4.0, 9.0, 1).into();
        assert_eq!(single.points().collect::<Vec<f64>>(), vec![4.0]);

        let empty: ScanObject = RangeScan::new(4.0, 9.0, 0).into();
        assert_eq!(empty.count(), 0);
        assert_eq!(empty.points().next(), None);
    }

    #[test]
    fn test_range_scan_seeded_shuffle_is_reproducible() {
        let scan: ScanObject = RangeScan::new(0.0, 10.0, 11).randomized(Some(42)).into();
        let first_pass: Vec<f64> = scan.points().collect();
        let second_pass: Vec<f64> = scan.points().collect();
        assert_eq!(first_pass, second_pass);

        // Shuffling permutes but never changes the value set.
        let mut sorted = first_pass.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let ordered: Vec<f64> = ScanObject::from(RangeScan::new(0.0, 10.0, 11))
            .points()
            .collect();
        assert_eq!(sorted, ordered);
    }

    #[test]
    fn test_range_scan_unseeded_shuffle_varies_per_pass() {
        // 64! orderings; two identical independent passes would mean a
        // broken shuffle, not bad luck.
        let scan: ScanObject = RangeScan::new(0.0, 1.0, 64).randomized(None).into();
        let first_pass: Vec<f64> = scan.points().collect();
        let second_pass: Vec<f64> = scan.points().collect();
        assert_ne!(first_pass, second_pass);
    }

    #[test]
    fn test_center_scan_values() {
        let scan: ScanObject = CenterScan::new(5.0, 4.0, 1.0).unwrap().into();
        assert_eq!(scan.count(), 5);
        let values: Vec<f64> = scan.points().collect();
        assert_eq!(values, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_center_scan_with_non_divisible_span_stops_short_of_the_far_edge() {
        // floor(4.0 / 1.5) + 1 = 3 points, advancing by step from
        // center - span/2; the last point falls short of center + span/2.
        let scan: ScanObject = CenterScan::new(5.0, 4.0, 1.5).unwrap().into();
        assert_eq!(scan.count(), 3);
        let values: Vec<f64> = scan.points().collect();
        assert_eq!(values, vec![3.0, 4.5, 6.0]);
        assert!(values[2] < 7.0);
    }

    #[test]
    fn test_center_scan_matches_equivalent_range_scan() {
        let center: ScanObject = CenterScan::new(2.0, 3.0, 0.5).unwrap().into();
        let range: ScanObject = RangeScan::new(0.5, 3.5, 7).into();
        assert_eq!(center.count(), range.count());
        let center_values: Vec<f64> = center.points().collect();
        let range_values: Vec<f64> = range.points().collect();
        for (a, b) in center_values.iter().zip(&range_values) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_center_scan_rejects_non_positive_span_and_step() {
        assert!(matches!(
            CenterScan::new(5.0, 0.0, 1.0),
            Err(ScanError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            CenterScan::new(5.0, -4.0, 1.0),
            Err(ScanError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            CenterScan::new(5.0, 4.0, 0.0),
            Err(ScanError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            CenterScan::new(5.0, 4.0, -1.0),
            Err(ScanError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_no_scan_repeats_value() {
        let scan: ScanObject = NoScan::new(7.0, 3).into();
        assert_eq!(scan.points().collect::<Vec<f64>>(), vec![7.0, 7.0, 7.0]);

        let empty: ScanObject = NoScan::new(7.0, 0).into();
        assert_eq!(empty.count(), 0);
        assert_eq!(empty.points().collect::<Vec<f64>>(), Vec::<f64>::new());
    }

    #[test]
    fn test_explicit_scan_passes_sequence_through() {
        let scan: ScanObject = ExplicitScan::new(vec![1.0, 2.0, 3.0]).into();
        assert_eq!(scan.count(), 3);
        assert_eq!(scan.points().collect::<Vec<f64>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_count_matches_materialized_length_for_every_variant() {
        let scans: Vec<ScanObject> = vec![
            NoScan::new(1.0, 4).into(),
            RangeScan::new(0.0, 1.0, 9).into(),
            RangeScan::new(0.0, 1.0, 9).randomized(Some(1)).into(),
            CenterScan::new(0.0, 2.0, 0.25).unwrap().into(),
            ExplicitScan::new(vec![5.0, 1.0, 5.0]).into(),
        ];
        for scan in scans {
            assert_eq!(scan.count(), scan.points().count());
        }
    }
}
