//
// Serialising a font table for the firmware build.
//

use std::io::{self, Write};

use crate::encoder::FontTable;

pub const DEFAULT_NAME: &str = "Font";

/// True if `name` can be used as the C array identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Writes the table as a C array declaration. The metadata goes on the
/// first line and each glyph's data on a line of its own.
pub fn write_header<W: Write>(table: &FontTable, name: &str, out: &mut W) -> io::Result<()> {
    let m = table.metadata();
    writeln!(
        out,
        "const unsigned int {}[{}] = {{0x{:02x}, 0x{:02x}, 0x{:02x}, 0x{:02x},",
        name,
        table.declared_size(),
        m[0],
        m[1],
        m[2],
        m[3]
    )?;

    let mut first = true;
    for glyph in table.glyphs() {
        for b in glyph {
            if first {
                write!(out, "0x{:02x}", b)?;
                first = false;
            } else {
                write!(out, ", 0x{:02x}", b)?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "}};")
}

pub fn write_binary<W: Write>(table: &FontTable, out: &mut W) -> io::Result<()> {
    out.write_all(table.as_bytes())
}
