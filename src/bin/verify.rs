//! Portal frame verification - eigen and lateral load analysis of the
//! seven-story, two-bay steel moment frame
//!
//! Usage: `portal-frame-verify [config.json]`. Without an argument the
//! reference frame is analyzed. Set `RUST_LOG=debug` for solver details.

use anyhow::{Context, Result};
use log::info;

use portal_frame2d::frame::{run_verification, FrameConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading frame configuration from {path}");
            FrameConfig::from_json_file(&path)
                .with_context(|| format!("failed to load frame configuration from {path}"))?
        }
        None => FrameConfig::default(),
    };

    let report = run_verification(&config).context("verification analysis failed")?;
    println!("{report}");

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
