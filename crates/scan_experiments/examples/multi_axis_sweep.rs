//! Example: two-axis frequency/amplitude sweep.
//!
//! This example demonstrates how to:
//! 1. Configure scan axes (linear range and centered range)
//! 2. Inspect pre-flight metadata (counts, kinds, fingerprint)
//! 3. Drive the combined enumeration with a progress bar

use scan_core::{scan_fingerprint, CenterScan, RangeScan, Scannable};
use scan_experiments::{run_sweep_with_progress, MultiScanManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Frequency axis in MHz, scaled to Hz and bounded to the synthesizer
    // range before values reach the experiment.
    let frequency = Scannable::from_scan(RangeScan::new(10.0, 20.0, 11).into())
        .unit("MHz")
        .scale(1e6)
        .global_min(0.0)
        .global_max(400e6);

    println!("Frequency axis: {} points", frequency.count());
    println!(
        "Frequency metadata: {}",
        serde_json::to_string_pretty(&frequency.describe())?
    );

    let mut sweep = MultiScanManager::new();
    sweep.add("frequency", frequency.scan().clone())?;
    sweep.add("amplitude", CenterScan::new(0.5, 0.4, 0.1)?.into())?;

    println!(
        "Combined sweep over [{}]: {} points",
        sweep.names().join(", "),
        sweep.total_points()
    );
    for axis in sweep.describe() {
        println!("  axis '{}': fingerprint {}", axis.name, scan_fingerprint(&axis.scan));
    }

    let processed = run_sweep_with_progress(
        &sweep,
        |point| {
            // One experiment step per combined point; a real consumer would
            // program hardware here.
            let _frequency = point.get("frequency").unwrap();
            let _amplitude = point.get("amplitude").unwrap();
            Ok(())
        },
        true,
    )?;

    println!("Processed {processed} points");
    Ok(())
}
