// File: crates/sine-plot/src/main.rs
// Summary: Prints the sine wave plot as a base64-encoded PNG on stdout.

use anyhow::{Context, Result};
use tracing::debug;

fn main() -> Result<()> {
    if !plot_core::telemetry::init_default_tracing() {
        eprintln!("sine-plot: tracing subscriber not installed; diagnostics disabled");
    }

    let encoded = plot_core::generate_plot().context("failed to generate sine plot")?;
    debug!(chars = encoded.len(), "writing base64 PNG to stdout");
    println!("{encoded}");
    Ok(())
}
