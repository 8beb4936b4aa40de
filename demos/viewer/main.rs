//! # GroupScope Viewer
//!
//! Opens a window and drives the gesture controller from touch or mouse input.
//! Hold still to mark a hit, drag to pan, pinch (touch screens) to zoom,
//! double-tap to reset the view.
//!
//! ## Usage:
//! ```bash
//! cargo run --example viewer
//! cargo run --example viewer -- presets/range.toml
//! RUST_LOG=groupscope=debug cargo run --example viewer
//! ```

use std::path::PathBuf;

use anyhow::Context;
use groupscope::{config::GestureConfig, GroupScopeApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => GestureConfig::load(&path)
            .with_context(|| format!("loading gesture config {}", path.display()))?,
        None => GestureConfig::default(),
    };

    log::info!(
        "Starting viewer: zoom {} within ({:.2}, {:.2})",
        config.initial_zoom,
        config.initial_zoom / config.min_zoom_factor,
        config.initial_zoom * config.max_zoom_factor
    );

    let app = GroupScopeApp::new(config).context("creating viewer")?;
    app.run()?;
    Ok(())
}
