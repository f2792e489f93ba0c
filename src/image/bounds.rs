//! Content bounding box of non-white, non-transparent pixels.

use image::RgbaImage;
use rayon::prelude::*;

/// Channel value above which R, G and B together count as white background.
pub const WHITE_THRESHOLD: u8 = 250;
/// Alpha below which a pixel counts as transparent background.
pub const TRANSPARENT_THRESHOLD: u8 = 10;

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Axis-aligned box in pixel coordinates, `max_*` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl ContentBounds {
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: width,
            max_y: height,
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    pub const fn is_full(&self, width: u32, height: u32) -> bool {
        self.min_x == 0 && self.min_y == 0 && self.max_x == width && self.max_y == height
    }
}

/// Running min/max over foreground pixels, inclusive coordinates.
#[derive(Clone, Copy)]
struct Extent {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl Extent {
    const EMPTY: Self = Self {
        min_x: u32::MAX,
        min_y: u32::MAX,
        max_x: 0,
        max_y: 0,
    };

    #[inline]
    fn is_empty(self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    #[inline]
    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Whether a pixel belongs to the artwork rather than the white/transparent backdrop.
#[inline]
pub fn is_foreground(pixel: &[u8]) -> bool {
    let is_white =
        pixel[0] > WHITE_THRESHOLD && pixel[1] > WHITE_THRESHOLD && pixel[2] > WHITE_THRESHOLD;
    let is_transparent = pixel[3] < TRANSPARENT_THRESHOLD;
    !is_white && !is_transparent
}

/// Find the tightest box around all foreground pixels.
///
/// Falls back to the full image extent when nothing but background is found.
pub fn detect_content_bounds(img: &RgbaImage) -> ContentBounds {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return ContentBounds::full(width, height);
    }

    let row_len = width as usize * 4;
    let raw = img.as_raw();
    let scan_row = |(y, row): (usize, &[u8])| {
        let mut extent = Extent::EMPTY;
        for (x, pixel) in row.chunks_exact(4).enumerate() {
            if is_foreground(pixel) {
                extent.include(x as u32, y as u32);
            }
        }
        extent
    };

    let extent = if width as usize * height as usize >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact(row_len)
            .enumerate()
            .map(scan_row)
            .reduce(|| Extent::EMPTY, Extent::merge)
    } else {
        raw.chunks_exact(row_len)
            .enumerate()
            .map(scan_row)
            .fold(Extent::EMPTY, Extent::merge)
    };

    if extent.is_empty() {
        return ContentBounds::full(width, height);
    }

    ContentBounds {
        min_x: extent.min_x,
        min_y: extent.min_y,
        max_x: extent.max_x + 1,
        max_y: extent.max_y + 1,
    }
}
