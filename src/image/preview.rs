//! Single rounded-corner preview icon.
//!
//! The artwork is cropped to its content box, scaled into an opaque white
//! rounded square, and centered on a transparent canvas.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};

use crate::debug;
use crate::image::bounds::detect_content_bounds;
use crate::image::error::{IconError, IconResult};
use crate::image::io::{load_rgba, save_png};
use crate::image::mask::{apply_alpha_mask, rounded_rect_mask};
use crate::image::resample::{crop_to_bounds, resize_rgba};

pub const DEFAULT_SIZE: u32 = 1024;
pub const DEFAULT_ICON_SCALE: f32 = 0.847;
pub const DEFAULT_CONTENT_SCALE: f32 = 0.72;
pub const DEFAULT_CORNER_RADIUS: f32 = 0.225;

/// Geometry of the preview icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    /// Side of the output canvas in pixels.
    pub size: u32,
    /// Rounded square side relative to the canvas.
    pub icon_scale: f32,
    /// Longest content side relative to the rounded square.
    pub content_scale: f32,
    /// Corner radius relative to the rounded square.
    pub corner_radius: f32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            icon_scale: DEFAULT_ICON_SCALE,
            content_scale: DEFAULT_CONTENT_SCALE,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl PreviewOptions {
    #[inline]
    pub fn icon_size(&self) -> u32 {
        (self.size as f32 * self.icon_scale) as u32
    }

    #[inline]
    pub fn margin(&self) -> u32 {
        (self.size - self.icon_size()) / 2
    }
}

/// Compose the preview icon from decoded artwork.
pub fn compose_preview(source: &RgbaImage, opts: &PreviewOptions) -> IconResult<RgbaImage> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::EmptyImage { width, height });
    }

    let bounds = detect_content_bounds(source);
    debug!(
        "preview";
        "content bounds {:?}{}",
        bounds,
        if bounds.is_full(width, height) { " (full image)" } else { "" }
    );
    let content = crop_to_bounds(source, bounds);
    let (content_w, content_h) = content.dimensions();

    let icon_size = opts.icon_size();
    let margin = opts.margin();
    let target = (icon_size as f32 * opts.content_scale) as u32;

    let (new_w, new_h) = fit_longest_side(content_w, content_h, target);
    debug!("preview"; "target {}: {}x{} -> {}x{}", target, content_w, content_h, new_w, new_h);
    let resized = resize_rgba(&content, new_w, new_h);

    let mut icon = RgbaImage::from_pixel(icon_size, icon_size, Rgba([255, 255, 255, 255]));
    let paste_x = (i64::from(icon_size) - i64::from(new_w)) / 2;
    let paste_y = (i64::from(icon_size) - i64::from(new_h)) / 2;
    imageops::overlay(&mut icon, &resized, paste_x, paste_y);

    let radius = (icon_size as f32 * opts.corner_radius) as u32;
    apply_alpha_mask(&mut icon, &rounded_rect_mask(icon_size, radius))?;

    let mut canvas = RgbaImage::new(opts.size, opts.size);
    imageops::overlay(&mut canvas, &icon, i64::from(margin), i64::from(margin));
    Ok(canvas)
}

/// Scale `(width, height)` so the longer side is exactly `target`.
///
/// The shorter side is floored in integer math. Both sides are at least 1.
pub fn fit_longest_side(width: u32, height: u32, target: u32) -> (u32, u32) {
    let target = target.max(1);
    let long = u64::from(width.max(height).max(1));
    let scaled = |side: u32| (u64::from(side) * u64::from(target) / long).max(1) as u32;
    if width >= height {
        (target, scaled(height))
    } else {
        (scaled(width), target)
    }
}

/// Load `input`, compose the preview and write it to `output` as PNG.
pub fn generate_preview(input: &Path, output: &Path, opts: &PreviewOptions) -> IconResult<PathBuf> {
    let source = load_rgba(input)?;
    let canvas = compose_preview(&source, opts)?;
    save_png(&canvas, output)?;
    Ok(output.to_path_buf())
}
