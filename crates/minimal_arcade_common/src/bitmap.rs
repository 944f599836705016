use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Index into the image table an `App` exposes to its frontend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// A decoded sprite image, tightly packed RGBA8 rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageData {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Buffer length for a `width` x `height` image, computed in `usize`.
    pub fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * Self::BYTES_PER_PIXEL
    }

    pub fn new(name: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height);
        if pixels.len() != expected {
            return Err(anyhow!(
                "image {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            ));
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            pixels,
        })
    }

    /// A fully transparent image, handy for tests and placeholders.
    pub fn blank(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            pixels: vec![0; Self::byte_len(width, height)],
        }
    }

    /// Decode an image file (PNG, JPEG or BMP) into RGBA8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).with_context(|| format!("failed to load image {}", path.display()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        log::debug!("Loaded image '{}' ({}x{})", name, width, height);

        Self::new(name, width, height, rgba.into_raw())
    }

    /// Row length in bytes, as expected by texture upload APIs.
    pub fn pitch(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatched_buffer() {
        assert!(ImageData::new("bad", 2, 2, vec![0; 15]).is_err());
        let ok = ImageData::new("ok", 2, 2, vec![0; 16]).unwrap();
        assert_eq!(ok.pitch(), 8);
    }

    #[test]
    fn byte_len_does_not_overflow_u32() {
        // 40000 * 40000 * 4 exceeds u32::MAX.
        assert_eq!(ImageData::byte_len(40_000, 40_000) as u64, 6_400_000_000u64);
        assert_eq!(ImageData::byte_len(3, 2), 24);
    }

    #[test]
    fn load_decodes_png_dimensions() {
        let dir = std::env::temp_dir().join(format!("minimal_arcade_bitmap_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ship.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let loaded = ImageData::load(&path).unwrap();
        assert_eq!(loaded.name, "ship");
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(&loaded.pixels[..4], &[255, 0, 0, 255]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = ImageData::load("definitely/not/here.png").unwrap_err();
        assert!(err.to_string().contains("not/here.png"));
    }
}
