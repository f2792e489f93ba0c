//! `iconplate preview`: render the rounded preview icon.

use anyhow::{Context, Result};

use crate::config::IconConfig;
use crate::image::preview::generate_preview;
use crate::log;
use crate::utils::path::normalize_path;

/// Render `[preview].input` into `[preview].output`.
pub fn run_preview(config: &IconConfig) -> Result<()> {
    let preview = &config.preview;
    let opts = preview.options();
    log!(
        "preview";
        "{} -> {} ({}px canvas, {}px icon)",
        preview.input.display(),
        preview.output.display(),
        opts.size,
        opts.icon_size()
    );

    let written = generate_preview(&preview.input, &preview.output, &opts)
        .with_context(|| format!("Failed to create preview from {}", preview.input.display()))?;

    log!("preview"; "Preview icon created: {}", normalize_path(&written).display());
    Ok(())
}
