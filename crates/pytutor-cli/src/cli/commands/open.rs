//! `--tab` – open the visualizer URL in the system browser.

use anyhow::{Context, Result};
use pytutor_core::embed::build_url;
use pytutor_core::options::EmbedOptions;

pub fn run_open(cell_text: &str, opts: &EmbedOptions) -> Result<()> {
    let url = build_url(cell_text, opts);
    tracing::info!("opening visualizer in the system browser");
    webbrowser::open(&url).context("open system browser")?;
    Ok(())
}
