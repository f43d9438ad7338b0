//! Media transcoding for the sticker pipeline
//!
//! Transcodes an arbitrary inbound image to the fixed sticker format:
//! 512x512, contain-fit on a transparent canvas, lossless webp. Encoding is
//! staged through a scoped temp file that is removed on drop, so the success
//! and failure paths release it alike.

use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{RgbaImage, imageops};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use crate::error::MediaError;

/// Fixed square edge of the sticker format.
pub const STICKER_SIZE: u32 = 512;

pub trait MediaTranscoder: Send + Sync {
    /// Transcodes raw image bytes into sticker-format bytes.
    fn to_sticker(&self, input: &[u8]) -> Result<Vec<u8>, MediaError>;
}

pub struct ImageTranscoder {
    size: u32,
    staging_dir: Option<PathBuf>,
}

impl ImageTranscoder {
    pub fn new() -> Self {
        Self {
            size: STICKER_SIZE,
            staging_dir: None,
        }
    }

    /// Stage temp files in a specific directory instead of the system one.
    pub fn with_staging_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            size: STICKER_SIZE,
            staging_dir: Some(dir.into()),
        }
    }
}

impl Default for ImageTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaTranscoder for ImageTranscoder {
    fn to_sticker(&self, input: &[u8]) -> Result<Vec<u8>, MediaError> {
        let source = image::load_from_memory(input).map_err(MediaError::Decode)?;

        // Aspect-preserving fit within the square, centered on a
        // transparent canvas.
        let fitted = source.resize(self.size, self.size, FilterType::Lanczos3);
        let mut canvas = RgbaImage::new(self.size, self.size);
        let x = i64::from((self.size - fitted.width()) / 2);
        let y = i64::from((self.size - fitted.height()) / 2);
        imageops::overlay(&mut canvas, &fitted.to_rgba8(), x, y);

        let mut staging = match &self.staging_dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }?;

        let encoder = WebPEncoder::new_lossless(&mut staging);
        canvas
            .write_with_encoder(encoder)
            .map_err(MediaError::Encode)?;
        staging.flush()?;

        let bytes = std::fs::read(staging.path())?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba};
    use std::io::Cursor;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([200, 30, 30, 255]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn staging_is_empty(dir: &tempfile::TempDir) -> bool {
        std::fs::read_dir(dir.path()).unwrap().next().is_none()
    }

    #[test]
    fn test_transcode_produces_square_webp() {
        let staging = tempfile::tempdir().unwrap();
        let transcoder = ImageTranscoder::with_staging_dir(staging.path());

        let sticker = transcoder.to_sticker(&sample_png(640, 200)).unwrap();

        // RIFF....WEBP container magic.
        assert_eq!(&sticker[0..4], b"RIFF");
        assert_eq!(&sticker[8..12], b"WEBP");

        let decoded = image::load_from_memory(&sticker).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (512, 512));
    }

    #[test]
    fn test_staging_file_removed_on_success() {
        let staging = tempfile::tempdir().unwrap();
        let transcoder = ImageTranscoder::with_staging_dir(staging.path());

        transcoder.to_sticker(&sample_png(64, 64)).unwrap();
        assert!(staging_is_empty(&staging));
    }

    #[test]
    fn test_staging_removed_and_error_on_bad_input() {
        let staging = tempfile::tempdir().unwrap();
        let transcoder = ImageTranscoder::with_staging_dir(staging.path());

        let result = transcoder.to_sticker(b"definitely not an image");
        assert!(matches!(result, Err(MediaError::Decode(_))));
        assert!(staging_is_empty(&staging));
    }
}
