//
// bmp2font: Turn a strip of glyph images into a font table for the
// serial graphic LCD firmware.
//

use std::path::Path;

pub mod encoder;
pub mod error;
pub mod raster;
pub mod table;

pub use encoder::{encode, FontGeometry, FontLayout, FontTable};
pub use error::{Error, InputError};
pub use raster::Raster;

/// Loads the image at `path` and packs it.
pub fn convert(path: &Path, geometry: &FontGeometry) -> Result<FontTable, Error> {
    let image = raster::load(path)?;
    encode(&image, geometry)
}
