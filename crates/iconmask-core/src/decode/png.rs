//! PNG decoding into RGBA buffers.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};
use tracing::debug;

use super::{DecodeError, DecodedImage};

/// Decode a PNG image from bytes.
///
/// Any PNG colour type (gray, gray+alpha, RGB, palette, 16-bit) is converted
/// to RGBA8. Images without an alpha channel come out fully opaque.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a PNG.
/// Returns `DecodeError::CorruptedFile` if the PNG cannot be decoded.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format() != Some(ImageFormat::Png) {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}

/// Read a PNG file from disk and decode it.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, otherwise the
/// errors of [`decode_png`].
pub fn read_png(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::Io(format!("{}: {}", path.display(), e)))?;
    let image = decode_png(&bytes)?;
    debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "decoded PNG"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn png_bytes(pixels: &[u8], width: u32, height: u32, color: ExtendedColorType) -> Vec<u8> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(pixels, width, height, color)
            .unwrap();
        out
    }

    #[test]
    fn test_decode_rgba_png() {
        let pixels: Vec<u8> = [255, 0, 0, 128].repeat(4);
        let bytes = png_bytes(&pixels, 2, 2, ExtendedColorType::Rgba8);

        let img = decode_png(&bytes).unwrap();
        assert_eq!((img.width, img.height), (2, 2));
        assert_eq!(img.pixel(1, 1), [255, 0, 0, 128]);
    }

    #[test]
    fn test_decode_rgb_png_is_opaque() {
        let pixels: Vec<u8> = [10, 20, 30].repeat(6);
        let bytes = png_bytes(&pixels, 3, 2, ExtendedColorType::Rgb8);

        let img = decode_png(&bytes).unwrap();
        assert_eq!(img.pixels.len(), 3 * 2 * 4);
        assert_eq!(img.pixel(2, 1), [10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_grayscale_png() {
        let bytes = png_bytes(&[0, 128, 255, 64], 2, 2, ExtendedColorType::L8);

        let img = decode_png(&bytes).unwrap();
        assert_eq!(img.pixel(1, 0), [128, 128, 128, 255]);
    }

    #[test]
    fn test_decode_rejects_non_png() {
        // JPEG SOI marker followed by junk
        let result = decode_png(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_png(&[0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let pixels: Vec<u8> = [1, 2, 3, 4].repeat(64);
        let bytes = png_bytes(&pixels, 8, 8, ExtendedColorType::Rgba8);

        let result = decode_png(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_read_png_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_png(dir.path().join("missing.png"));
        assert!(matches!(result, Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_read_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        let pixels: Vec<u8> = [9, 8, 7, 255].repeat(9);
        std::fs::write(&path, png_bytes(&pixels, 3, 3, ExtendedColorType::Rgba8)).unwrap();

        let img = read_png(&path).unwrap();
        assert_eq!((img.width, img.height), (3, 3));
        assert_eq!(img.pixel(0, 0), [9, 8, 7, 255]);
    }
}
