//! The C array literal that carries hex pixels to the Poi firmware.
//!
//! ```text
//!
//! const unsigned int array1[] = {0xff0000, 0x00ff00, }; //end of array
//! ```
//!
//! The text starts with a newline, every entry is followed by `, ` and alpha is never stored.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

pub const LEADER: &str = "\n";
pub const PREFIX: &str = "const unsigned int array1[] = {";
pub const SEPARATOR: &str = ", ";
pub const TRAILER: &str = ", }; //end of array ";

const DECLARATION: &str = "const unsigned int array1[] =";
const END_COMMENT: &str = "//end of array";
const PUNCTUATION: [&str; 3] = ["{", "}", ";"];

/// Renders `entries` as an array literal, leading newline included.
pub fn to_literal<S: AsRef<str>>(entries: &[S]) -> String {
    let body_len: usize = entries.iter().map(|e| e.as_ref().len() + SEPARATOR.len()).sum();
    let mut out = String::with_capacity(LEADER.len() + PREFIX.len() + body_len + TRAILER.len());

    out.push_str(LEADER);
    out.push_str(PREFIX);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(entry.as_ref());
    }
    out.push_str(TRAILER);
    out
}

/// Writes the array literal for `entries` to `path`, replacing anything already there.
pub fn write<S: AsRef<str>>(entries: &[S], path: &Path) -> Result<()> {
    let wrap = |source: io::Error| Error::Write {
        path: path.to_owned(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_literal(entries).as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Reads the array literal at `path` back into its entries.
pub fn read(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(parse_literal(&text))
}

/// Extracts the entries of an array literal. Parsing is lenient: whitespace and the literal's
/// fixed tokens are dropped wherever they appear, and empty entries are skipped. Entries are not
/// validated here.
pub fn parse_literal(text: &str) -> Vec<String> {
    let mut compact: String = text.chars().filter(|c| !is_layout(*c)).collect();

    for token in [DECLARATION, END_COMMENT].into_iter().chain(PUNCTUATION) {
        let token: String = token.chars().filter(|c| !is_layout(*c)).collect();
        compact = compact.replace(&token, "");
    }

    compact
        .split(',')
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_layout(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
