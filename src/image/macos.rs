//! macOS icon set export.
//!
//! Layout of every exported size:
//! - 1024×1024 transparent canvas
//! - inset plate (default 128px per side -> 768×768)
//! - squircle corners on the plate, not on the outer margin

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};

use crate::image::color::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_SAMPLE_SIZE, average_corner_color};
use crate::image::error::{IconError, IconResult};
use crate::image::io::{load_rgba, save_png};
use crate::image::mask::{apply_alpha_mask, squircle_mask};
use crate::image::resample::{crop_center_square, resize_rgba};
use crate::{debug, log};

/// Side of the reference canvas.
pub const CANVAS_SIZE: u32 = 1024;
/// Default plate inset per side, 12.5% of the canvas.
pub const DEFAULT_INSET: i64 = 128;
pub const PLATE_RADIUS_FACTOR: f32 = 0.22;
pub const DEFAULT_SUPERSAMPLE: u32 = 4;

/// File name of the full-size canonical icon.
pub const MAIN_ICON_NAME: &str = "icon.png";

/// One entry of the icon bundle naming table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    /// File name suffix, e.g. `512x512@2x`.
    pub label: &'static str,
    /// Pixel side of the written image.
    pub px: u32,
}

impl IconSize {
    const fn new(label: &'static str, px: u32) -> Self {
        Self { label, px }
    }

    pub fn file_name(&self) -> String {
        format!("icon_{}.png", self.label)
    }
}

/// Sizes required by a macOS `.iconset`. `1024x1024` and `512x512@2x` are
/// both 1024px and both are kept.
pub const MACOS_SIZES: [IconSize; 13] = [
    IconSize::new("1024x1024", 1024),
    IconSize::new("512x512@2x", 1024),
    IconSize::new("512x512", 512),
    IconSize::new("256x256@2x", 512),
    IconSize::new("256x256", 256),
    IconSize::new("128x128@2x", 256),
    IconSize::new("128x128", 128),
    IconSize::new("64x64@2x", 128),
    IconSize::new("64x64", 64),
    IconSize::new("32x32@2x", 64),
    IconSize::new("32x32", 32),
    IconSize::new("16x16@2x", 32),
    IconSize::new("16x16", 16),
];

/// Tunables of the macOS export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacosOptions {
    /// Transparent margin per side at canvas scale.
    pub inset: i64,
    /// Plate corner radius relative to the plate side.
    pub radius_factor: f32,
    /// Resolution multiplier for drawing the plate mask.
    pub supersample: u32,
    /// Side of each corner square sampled for the plate backdrop.
    pub corner_sample: u32,
    /// Minimum alpha for a corner pixel to count toward the backdrop.
    pub alpha_threshold: u8,
}

impl Default for MacosOptions {
    fn default() -> Self {
        Self {
            inset: DEFAULT_INSET,
            radius_factor: PLATE_RADIUS_FACTOR,
            supersample: DEFAULT_SUPERSAMPLE,
            corner_sample: DEFAULT_SAMPLE_SIZE,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

/// Plate side for `inset`, which must satisfy `0 <= inset` and `2 * inset < 1024`.
pub fn plate_size(inset: i64) -> IconResult<u32> {
    if inset < 0 || inset * 2 >= i64::from(CANVAS_SIZE) {
        return Err(IconError::InvalidInset {
            inset,
            max: CANVAS_SIZE / 2 - 1,
        });
    }
    Ok(CANVAS_SIZE - (inset as u32) * 2)
}

/// Build the full-size canvas: backdrop-filled, squircle-masked plate at the inset.
pub fn compose_icon_canvas(source: &RgbaImage, opts: &MacosOptions) -> IconResult<RgbaImage> {
    let plate_side = plate_size(opts.inset)?;
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::EmptyImage { width, height });
    }

    let art = resize_rgba(&crop_center_square(source), plate_side, plate_side);

    let backdrop = average_corner_color(&art, opts.corner_sample, opts.alpha_threshold);
    debug!("macos"; "plate backdrop rgb({}, {}, {})", backdrop[0], backdrop[1], backdrop[2]);
    let mut plate = RgbaImage::from_pixel(plate_side, plate_side, backdrop);
    imageops::overlay(&mut plate, &art, 0, 0);

    let mask = squircle_mask(plate_side, opts.radius_factor, opts.supersample);
    apply_alpha_mask(&mut plate, &mask)?;

    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgba([0, 0, 0, 0]));
    imageops::overlay(&mut canvas, &plate, opts.inset, opts.inset);
    Ok(canvas)
}

/// Files written by [`export_icon_set`].
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Sized variants in table order, followed by the main icon.
    pub files: Vec<PathBuf>,
}

/// Render `source` into `output_dir` as a complete macOS icon set.
///
/// The inset is validated before anything is read or written.
pub fn export_icon_set(
    source: &Path,
    output_dir: &Path,
    opts: &MacosOptions,
) -> IconResult<ExportReport> {
    plate_size(opts.inset)?;

    log!("macos"; "loading source: {}", source.display());
    let img = load_rgba(source)?;
    let canvas = compose_icon_canvas(&img, opts)?;

    fs::create_dir_all(output_dir).map_err(|e| IconError::Io(output_dir.to_path_buf(), e))?;

    log!("macos"; "generating icons in: {}", output_dir.display());
    let mut report = ExportReport::default();
    for size in MACOS_SIZES {
        let path = output_dir.join(size.file_name());
        let icon = resize_rgba(&canvas, size.px, size.px);
        save_png(&icon, &path)?;
        log!("macos"; "  {}: {}", size.label, size.file_name());
        report.files.push(path);
    }

    let main_path = output_dir.join(MAIN_ICON_NAME);
    save_png(&canvas, &main_path)?;
    log!("macos"; "  main icon: {}", MAIN_ICON_NAME);
    report.files.push(main_path);

    Ok(report)
}
