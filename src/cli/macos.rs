//! `iconplate macos`: export a full macOS icon set.

use anyhow::{Context, Result};

use crate::cli::MacosArgs;
use crate::config::IconConfig;
use crate::image::macos::{CANVAS_SIZE, export_icon_set};
use crate::log;
use crate::utils::plural_count;

/// Export the icon set for `args.source` using the resolved `[macos]` settings.
pub fn run_macos(args: &MacosArgs, config: &IconConfig) -> Result<()> {
    if !args.source.exists() {
        log!("error"; "Source file not found: {}", args.source.display());
        std::process::exit(1);
    }

    let macos = &config.macos;
    let inset = macos.inset;
    log!("macos"; "settings:");
    log!("macos"; "  canvas: {CANVAS_SIZE}x{CANVAS_SIZE}");
    log!(
        "macos";
        "  inset: {}px ({:.1}%)",
        inset,
        inset as f64 / f64::from(CANVAS_SIZE) * 100.0
    );
    log!("macos"; "  plate: {}px", i64::from(CANVAS_SIZE) - inset * 2);

    let report = export_icon_set(&args.source, &macos.output_dir, &macos.options())
        .with_context(|| format!("Failed to export icon set from {}", args.source.display()))?;

    log!("macos"; "Generated {}", plural_count(report.files.len(), "icon"));
    Ok(())
}
