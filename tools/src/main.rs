//
// bmp2font: Convert a bitmap holding a row of characters into the font
// array used by the serial graphic LCD firmware.
//
// The image should be as tall as the characters and N character widths
// wide. Any pixel that is exactly black is set in the font.
//

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use bmp2font::table::{self, DEFAULT_NAME};
use bmp2font::{convert, FontGeometry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// C array declaration
    Header,
    /// Raw table bytes
    Binary,
}

/// Converts a 24bpp bitmap with characters in the x direction into a C
/// array definition. Character width defines how the input image is
/// divided; any trailing partial character is ignored.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Character width in pixels (at most 128)
    char_width: u32,

    /// Short character width in pixels, for ` ' ; : , .
    #[arg(allow_negative_numbers = true)]
    short_width: i32,

    /// Spacing in pixels between characters when printed
    #[arg(allow_negative_numbers = true)]
    spacing: i32,

    /// Input image, at most 64 pixels tall
    input: PathBuf,

    /// Name of the generated array
    #[arg(long, default_value = DEFAULT_NAME, value_parser = parse_name)]
    name: String,

    #[arg(long, value_enum, default_value_t = Format::Header)]
    format: Format,

    /// Write here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_name(s: &str) -> Result<String, String> {
    if table::is_identifier(s) {
        Ok(s.to_owned())
    } else {
        Err(format!("'{}' is not a valid C identifier", s))
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let geometry = FontGeometry {
        char_width: args.char_width,
        short_char_width: args.short_width,
        char_spacing: args.spacing,
    };

    let font = convert(&args.input, &geometry)
        .with_context(|| format!("could not convert {}", args.input.display()))?;
    let layout = font.layout();
    info!(
        "{}: {}x{} pixels, {} characters, {} rows, {} bytes each, {} bytes total",
        args.input.display(),
        layout.width,
        layout.height,
        layout.glyph_count,
        layout.row_blocks,
        layout.bytes_per_glyph(),
        layout.table_size()
    );
    if layout.trailing_columns() != 0 {
        debug!("ignoring {} trailing columns", layout.trailing_columns());
    }
    for (what, value) in [("short width", args.short_width), ("spacing", args.spacing)].iter() {
        if !(0..=255).contains(value) {
            warn!("{} {} does not fit in a byte, stored as {}", what, value, *value as u8);
        }
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    match args.format {
        Format::Header => table::write_header(&font, &args.name, &mut out)?,
        Format::Binary => table::write_binary(&font, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
