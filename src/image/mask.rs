//! Rounded-rectangle and squircle alpha masks.

use image::{GrayImage, Luma, RgbaImage};
use rayon::prelude::*;

use crate::image::error::{IconError, IconResult};
use crate::image::resample::resize_gray;

const OPAQUE: u8 = 255;
const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Rasterize a hard-edged rounded square covering `[0, size - 1]` on both axes.
///
/// Corners are quarter circles of `radius` pixels (clamped to half the side).
pub fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    if size == 0 {
        return GrayImage::new(0, 0);
    }

    let last = (size - 1) as f32;
    let r = (radius as f32).min(last / 2.0);
    if r <= 0.0 {
        return GrayImage::from_pixel(size, size, Luma([OPAQUE]));
    }
    let r_sq = r * r;

    GrayImage::from_fn(size, size, |x, y| {
        let (px, py) = (x as f32, y as f32);
        // Distance past the straight edges, zero inside the cross-shaped body.
        let dx = (r - px).max(px - (last - r)).max(0.0);
        let dy = (r - py).max(py - (last - r)).max(0.0);
        if dx * dx + dy * dy <= r_sq {
            Luma([OPAQUE])
        } else {
            Luma([0])
        }
    })
}

/// Approximate a continuous-curvature icon corner.
///
/// Draws the rounded square at `supersample`× resolution and downsamples it
/// with the pipeline filter, which leaves an antialiased edge.
pub fn squircle_mask(size: u32, radius_factor: f32, supersample: u32) -> GrayImage {
    let supersample = supersample.max(1);
    let large = size * supersample;
    let radius = (large as f32 * radius_factor) as u32;
    let mask = rounded_rect_mask(large, radius);
    resize_gray(&mask, size, size)
}

/// Multiply an image's alpha channel by `mask`.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) -> IconResult<()> {
    if img.dimensions() != mask.dimensions() {
        return Err(IconError::MaskSize {
            mask_width: mask.width(),
            mask_height: mask.height(),
            width: img.width(),
            height: img.height(),
        });
    }

    let multiply = |(pixel, m): (&mut [u8], &u8)| {
        pixel[3] = multiply_channel(pixel[3], *m);
    };

    let len = img.width() as usize * img.height() as usize;
    let raw: &mut [u8] = img;
    if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(4)
            .zip(mask.as_raw().par_iter())
            .for_each(multiply);
    } else {
        raw.chunks_exact_mut(4)
            .zip(mask.as_raw().iter())
            .for_each(multiply);
    }
    Ok(())
}

/// `a * b / 255`, truncating.
#[inline]
pub fn multiply_channel(a: u8, b: u8) -> u8 {
    (u16::from(a) * u16::from(b) / 255) as u8
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn rounded_rect_corners_are_cut() {
        let mask = rounded_rect_mask(100, 20);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(99, 0)[0], 0);
        assert_eq!(mask.get_pixel(0, 99)[0], 0);
        assert_eq!(mask.get_pixel(99, 99)[0], 0);
        assert_eq!(mask.get_pixel(50, 50)[0], 255);
        // Edge midpoints lie on the straight sides.
        assert_eq!(mask.get_pixel(50, 0)[0], 255);
        assert_eq!(mask.get_pixel(0, 50)[0], 255);
        assert_eq!(mask.get_pixel(99, 50)[0], 255);
        // Corner circle center.
        assert_eq!(mask.get_pixel(20, 20)[0], 255);
    }

    #[test]
    fn rounded_rect_is_symmetric() {
        let mask = rounded_rect_mask(37, 9);
        for y in 0..37 {
            for x in 0..37 {
                let v = mask.get_pixel(x, y)[0];
                assert_eq!(v, mask.get_pixel(36 - x, y)[0]);
                assert_eq!(v, mask.get_pixel(x, 36 - y)[0]);
                assert_eq!(v, mask.get_pixel(y, x)[0]);
            }
        }
    }

    #[test]
    fn zero_radius_is_full_square() {
        let mask = rounded_rect_mask(8, 0);
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn squircle_edge_is_antialiased() {
        let mask = squircle_mask(64, 0.22, 4);
        assert_eq!(mask.dimensions(), (64, 64));
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(32, 32)[0], 255);

        let partial = mask.pixels().filter(|p| p[0] > 0 && p[0] < 255).count();
        assert!(partial > 0, "expected intermediate coverage along the curve");
    }

    #[test]
    fn apply_mask_multiplies_alpha() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 200]));
        let mask = GrayImage::from_raw(2, 1, vec![255, 128]).unwrap();

        apply_alpha_mask(&mut img, &mask).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgba([10, 20, 30, 200]));
        // 200 * 128 / 255 = 100.39 -> 100
        assert_eq!(img.get_pixel(1, 0), &Rgba([10, 20, 30, 100]));
    }

    #[test]
    fn apply_mask_rejects_size_mismatch() {
        let mut img = RgbaImage::new(3, 3);
        let mask = GrayImage::new(2, 2);
        assert!(matches!(
            apply_alpha_mask(&mut img, &mask),
            Err(IconError::MaskSize { .. })
        ));
    }

    #[test]
    fn multiply_channel_bounds() {
        assert_eq!(multiply_channel(255, 255), 255);
        assert_eq!(multiply_channel(0, 255), 0);
        assert_eq!(multiply_channel(255, 0), 0);
    }
}
