//! Pull-based sweep driver with progress reporting.
//!
//! The driver performs the downstream scheduler's pre-flight (`total_points`
//! for progress-bar sizing) and then drives exactly one enumeration pass,
//! invoking the caller's callback once per combined step. Cancellation is
//! cooperative: returning an error from the callback stops the pass.

use indicatif::{ProgressBar, ProgressStyle};

use crate::multiscan::{MultiScanManager, ScanPoint};

/// Drive one pass over the combined enumeration without a progress bar.
///
/// Returns the number of points processed.
pub fn run_sweep<F>(manager: &MultiScanManager, run_point: F) -> Result<usize, String>
where
    F: FnMut(&ScanPoint) -> Result<(), String>,
{
    run_sweep_with_progress(manager, run_point, false)
}

/// Drive one pass over the combined enumeration with an optional progress
/// bar sized from the pre-flight total.
pub fn run_sweep_with_progress<F>(
    manager: &MultiScanManager,
    mut run_point: F,
    show_progress: bool,
) -> Result<usize, String>
where
    F: FnMut(&ScanPoint) -> Result<(), String>,
{
    let total = manager.total_points();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut processed = 0usize;
    for point in manager.points() {
        if let Err(error) = run_point(&point) {
            if let Some(ref bar) = pb {
                bar.abandon();
            }
            return Err(error);
        }
        processed += 1;
        if let Some(ref bar) = pb {
            bar.inc(1);
        }
    }

    if let Some(ref bar) = pb {
        bar.finish_with_message("Completed");
    }

    Ok(processed)
}
