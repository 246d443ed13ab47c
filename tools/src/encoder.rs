//
// Packing a strip of glyphs into the LCD font table.
//
// The table starts with four metadata bytes (char width, height, short
// char width, spacing). Each glyph then follows as `row_blocks` pages of
// `char_width` bytes; bit k of a page byte is pixel row `page * 8 + k`.
//

use crate::error::Error;
use crate::raster::Raster;

pub const MAX_CHAR_WIDTH: u32 = 128;
pub const MAX_HEIGHT: u32 = 64;
pub const METADATA_LEN: usize = 4;

/// Character geometry supplied by the user. Only `char_width` affects the
/// packing; the other two are copied into the table verbatim and may be
/// anything, including negative or wider than `char_width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontGeometry {
    pub char_width: u32,
    pub short_char_width: i32,
    pub char_spacing: i32,
}

/// Sizes derived from the geometry and the raster dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontLayout {
    pub width: u32,
    pub char_width: u32,
    pub height: u32,
    pub row_blocks: u32,
    pub glyph_count: u32,
}

impl FontLayout {
    pub fn new(char_width: u32, width: u32, height: u32) -> Result<FontLayout, Error> {
        if char_width == 0 || char_width > MAX_CHAR_WIDTH || height > MAX_HEIGHT {
            return Err(Error::Geometry { char_width, height });
        }
        Ok(FontLayout {
            width,
            char_width,
            height,
            row_blocks: (height + 7) / 8,
            glyph_count: width / char_width,
        })
    }

    /// Columns past the last whole glyph, which are not encoded.
    pub fn trailing_columns(&self) -> u32 {
        self.width % self.char_width
    }

    pub fn bytes_per_glyph(&self) -> usize {
        (self.row_blocks * self.char_width) as usize
    }

    pub fn data_size(&self) -> usize {
        self.bytes_per_glyph() * self.glyph_count as usize
    }

    /// Element count declared for the emitted array.
    pub fn table_size(&self) -> usize {
        self.data_size() + METADATA_LEN
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontTable {
    layout: FontLayout,
    bytes: Vec<u8>,
}

impl FontTable {
    pub fn layout(&self) -> &FontLayout {
        &self.layout
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn metadata(&self) -> &[u8] {
        &self.bytes[..METADATA_LEN]
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes[METADATA_LEN..]
    }

    /// One slice per glyph, left to right.
    /// Glyphs of a zero-height raster are empty slices.
    pub fn glyphs(&self) -> impl Iterator<Item = &[u8]> {
        let data = self.data();
        let n = self.layout.bytes_per_glyph();
        (0..self.layout.glyph_count as usize).map(move |i| &data[i * n..(i + 1) * n])
    }

    pub fn declared_size(&self) -> usize {
        self.layout.table_size()
    }
}

/// A pixel is set only when it is pure black.
fn is_set([r, g, b]: [u8; 3]) -> bool {
    u16::from(r) + u16::from(g) + u16::from(b) == 0
}

pub fn encode<R: Raster + ?Sized>(raster: &R, geometry: &FontGeometry) -> Result<FontTable, Error> {
    let h = raster.height();
    let layout = FontLayout::new(geometry.char_width, raster.width(), h)?;
    let w = layout.char_width;

    let mut bytes = Vec::with_capacity(layout.table_size());
    // Values outside 0..=255 wrap.
    bytes.push(w as u8);
    bytes.push(h as u8);
    bytes.push(geometry.short_char_width as u8);
    bytes.push(geometry.char_spacing as u8);

    for glyph in 0..layout.glyph_count {
        let x_base = glyph * w;
        for page in 0..layout.row_blocks {
            let mut buf = vec![0u8; w as usize];
            for (x, c) in buf.iter_mut().enumerate() {
                for y in 0..8 {
                    let y_total = page * 8 + y;
                    if y_total < h && is_set(raster.pixel(x_base + x as u32, y_total)) {
                        *c |= 1 << y;
                    }
                }
            }
            bytes.extend_from_slice(&buf);
        }
    }

    Ok(FontTable { layout, bytes })
}
