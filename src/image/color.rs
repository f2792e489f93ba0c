//! Backdrop color sampled from the image corners.

use image::{Rgba, RgbaImage};

/// Side length of each corner sample square.
pub const DEFAULT_SAMPLE_SIZE: u32 = 16;
/// Minimum alpha for a sampled pixel to contribute to the average.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 12;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Average the visible color in the four corner squares of `img`.
///
/// Returns an opaque color suitable as a plate backdrop, or opaque white
/// when every sampled pixel is below `alpha_threshold`.
pub fn average_corner_color(img: &RgbaImage, sample_size: u32, alpha_threshold: u8) -> Rgba<u8> {
    let (width, height) = img.dimensions();
    let s = sample_size.min(width).min(height);
    if s == 0 {
        return WHITE;
    }

    let corners = [
        (0, 0),
        (width - s, 0),
        (0, height - s),
        (width - s, height - s),
    ];

    let mut sum = [0_u64; 3];
    let mut count = 0_u64;
    for (cx, cy) in corners {
        for y in cy..cy + s {
            for x in cx..cx + s {
                let pixel = img.get_pixel(x, y);
                if pixel[3] < alpha_threshold {
                    continue;
                }
                sum[0] += u64::from(pixel[0]);
                sum[1] += u64::from(pixel[1]);
                sum[2] += u64::from(pixel[2]);
                count += 1;
            }
        }
    }

    if count == 0 {
        return WHITE;
    }

    Rgba([
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn uniform_opaque_image_yields_its_color() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([12, 200, 99, 255]));
        assert_eq!(
            average_corner_color(&img, DEFAULT_SAMPLE_SIZE, DEFAULT_ALPHA_THRESHOLD),
            Rgba([12, 200, 99, 255])
        );
    }

    #[test]
    fn transparent_corners_fall_back_to_white() {
        let mut img = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 11]));
        img.put_pixel(20, 20, Rgba([0, 0, 0, 255]));
        assert_eq!(average_corner_color(&img, 16, 12), WHITE);
    }

    #[test]
    fn only_visible_pixels_are_averaged() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
        // One visible pixel in the top-left corner, one in the bottom-right.
        img.put_pixel(1, 1, Rgba([100, 50, 0, 12]));
        img.put_pixel(30, 30, Rgba([200, 150, 101, 255]));

        assert_eq!(average_corner_color(&img, 16, 12), Rgba([150, 100, 50, 255]));
    }

    #[test]
    fn sample_shrinks_to_image() {
        let img = RgbaImage::from_pixel(3, 5, Rgba([7, 8, 9, 255]));
        assert_eq!(average_corner_color(&img, 16, 12), Rgba([7, 8, 9, 255]));
    }

    #[test]
    fn empty_image_is_white() {
        let img = RgbaImage::new(0, 0);
        assert_eq!(average_corner_color(&img, 16, 12), WHITE);
    }
}
