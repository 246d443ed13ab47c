//
// Loading glyph strips from disk. BMP is the native input; PNG goes
// through the png crate directly so palette and grayscale images work.
//

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::RgbImage;

use crate::error::InputError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Read-only pixel access to a decoded image.
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Returns `[r, g, b]` for `x < width()`, `y < height()`.
    fn pixel(&self, x: u32, y: u32) -> [u8; 3];
}

impl Raster for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

pub fn load(path: &Path) -> Result<RgbImage, InputError> {
    decode(&fs::read(path)?)
}

pub fn decode(bytes: &[u8]) -> Result<RgbImage, InputError> {
    if bytes.is_empty() {
        return Err(InputError::Empty);
    }
    if bytes.starts_with(&PNG_SIGNATURE) {
        decode_png(bytes)
    } else {
        Ok(image::load_from_memory(bytes)?.to_rgb8())
    }
}

fn rgb_len(w: u32, h: u32) -> usize {
    w as usize * h as usize * 3
}

fn decode_png(bytes: &[u8]) -> Result<RgbImage, InputError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    // Palettes and sub-byte depths come out as 8-bit samples.
    decoder.set_transformations(png::Transformations::EXPAND);
    let (info, mut reader) = decoder.read_info()?;
    let mut buf = vec![0; info.buffer_size()];
    reader.next_frame(&mut buf)?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(InputError::UnsupportedPng(info.color_type, info.bit_depth));
    }

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::RGB => 3,
        png::ColorType::RGBA => 4,
        other => return Err(InputError::UnsupportedPng(other, info.bit_depth)),
    };

    let (w, h) = (info.width, info.height);
    let mut rgb = Vec::with_capacity(rgb_len(w, h));
    for y in 0..h {
        let row = &buf[y as usize * info.line_size..][..w as usize * channels];
        for px in row.chunks_exact(channels) {
            if channels < 3 {
                rgb.extend_from_slice(&[px[0], px[0], px[0]]);
            } else {
                rgb.extend_from_slice(&px[..3]);
            }
        }
    }

    RgbImage::from_raw(w, h, rgb).ok_or(InputError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::bmp::BmpEncoder;
    use image::{ColorType, Rgb};

    fn png_bytes(w: u32, h: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, w, h);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn decodes_rgb_bmp() {
        let mut img = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([0, 0, 0]));
        img.put_pixel(2, 1, Rgb([1, 2, 3]));

        let mut bytes = Vec::new();
        BmpEncoder::new(&mut bytes)
            .encode(img.as_raw(), 3, 2, ColorType::Rgb8)
            .unwrap();

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.pixel(1, 0), [0, 0, 0]);
        assert_eq!(decoded.pixel(2, 1), [1, 2, 3]);
        assert_eq!(decoded.pixel(0, 1), [255, 255, 255]);
    }

    #[test]
    fn decodes_grayscale_png() {
        let bytes = png_bytes(2, 2, png::ColorType::Grayscale, &[0, 255, 7, 0]);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.pixel(0, 0), [0, 0, 0]);
        assert_eq!(decoded.pixel(1, 0), [255, 255, 255]);
        assert_eq!(decoded.pixel(0, 1), [7, 7, 7]);
    }

    #[test]
    fn rgba_png_drops_alpha() {
        let data = [0, 0, 0, 0, 10, 20, 30, 255];
        let bytes = png_bytes(2, 1, png::ColorType::RGBA, &data);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.pixel(0, 0), [0, 0, 0]);
        assert_eq!(decoded.pixel(1, 0), [10, 20, 30]);
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(decode(&[]), Err(InputError::Empty)));
        assert!(matches!(
            decode(b"definitely not an image"),
            Err(InputError::Image(_))
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn rgb_len_does_not_wrap() {
        assert_eq!(rgb_len(70_000, 70_000), 14_700_000_000);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/nonexistent/glyphs.bmp");
        assert!(matches!(load(path), Err(InputError::Io(_))));
    }
}
