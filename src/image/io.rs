//! Decoding source artwork and writing PNG output.

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::image::error::{IconError, IconResult};

/// Decode any supported raster file into 8-bit RGBA.
pub fn load_rgba(path: &Path) -> IconResult<RgbaImage> {
    if !path.is_file() {
        return Err(IconError::SourceNotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|e| IconError::Decode(path.to_path_buf(), e))?;
    Ok(img.to_rgba8())
}

/// Write `img` as PNG, creating parent directories as needed.
pub fn save_png(img: &RgbaImage, path: &Path) -> IconResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| IconError::Io(parent.to_path_buf(), e))?;
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Encode(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn round_trips_through_nested_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/out.png");
        let img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 128]));

        save_png(&img, &path).unwrap();
        assert_eq!(load_rgba(&path).unwrap(), img);
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");
        assert!(matches!(load_rgba(&path), Err(IconError::SourceNotFound(p)) if p == path));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.png");
        fs::write(&path, b"not a png").unwrap();
        assert!(matches!(load_rgba(&path), Err(IconError::Decode(..))));
    }
}
