#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "invalid character size {char_width}x{height}; width must be 1 to 128 and height at most 64"
    )]
    Geometry { char_width: u32, height: u32 },
    #[error("could not load raster: {0}")]
    Input(#[from] InputError),
}

/// Failures from the image-loading side. These are passed through
/// unmodified from the decoders.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("input file is empty")]
    Empty,
    #[error("unsupported PNG format: {0:?} at {1:?} bit depth")]
    UnsupportedPng(png::ColorType, png::BitDepth),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Png(#[from] png::DecodingError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
