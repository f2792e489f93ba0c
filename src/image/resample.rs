//! Cropping and alpha-aware resizing.
//!
//! Resizing straight-alpha RGBA lets the color of fully transparent pixels
//! (usually black) bleed into neighbouring edges. Every RGBA resize here
//! goes through premultiplied `f32` color instead.

use image::imageops::{self, FilterType};
use image::{GrayImage, Rgba, Rgba32FImage, RgbaImage};

use crate::image::bounds::ContentBounds;

/// High-quality filter used for every resize in the pipeline.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Crop the largest centered square out of `img`.
pub fn crop_center_square(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == height {
        return img.clone();
    }
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    imageops::crop_imm(img, left, top, side, side).to_image()
}

/// Crop `img` to `bounds`.
pub fn crop_to_bounds(img: &RgbaImage, bounds: ContentBounds) -> RgbaImage {
    imageops::crop_imm(
        img,
        bounds.min_x,
        bounds.min_y,
        bounds.width(),
        bounds.height(),
    )
    .to_image()
}

/// Resize an RGBA image with premultiplied alpha.
pub fn resize_rgba(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }

    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = f32::from(a) / 255.0;
        Rgba([
            f32::from(r) / 255.0 * alpha,
            f32::from(g) / 255.0 * alpha,
            f32::from(b) / 255.0 * alpha,
            alpha,
        ])
    });

    let resized = imageops::resize(&premultiplied, width, height, FILTER);

    RgbaImage::from_fn(width, height, |x, y| unpremultiply(resized.get_pixel(x, y).0))
}

/// Resize a single-channel mask.
pub fn resize_gray(img: &GrayImage, width: u32, height: u32) -> GrayImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, FILTER)
}

#[inline]
fn unpremultiply([r, g, b, a]: [f32; 4]) -> Rgba<u8> {
    let alpha = a.clamp(0.0, 1.0);
    let alpha_u8 = to_u8(alpha);
    if alpha_u8 == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    Rgba([
        to_u8(r / alpha),
        to_u8(g / alpha),
        to_u8(b / alpha),
        alpha_u8,
    ])
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
