//! FPGA package pin table rewriting
//!
//! Reads vendor pinout exports (e.g. Xilinx `xc7k325tfbg676pkg.txt`), appends `_<PIN>` to
//! every pin name and optionally reduces the table to `Pin Pin_Name Bank [Direction]`.

pub mod emit;
pub mod mapping;
pub mod parser;
pub mod text;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use emit::{emit_full, emit_minimal, Mode, Transformed};
pub use mapping::{append_pin_suffix, infer_direction, is_pin_number, Direction};
pub use parser::{classify_line, split_lines, tokenize, LineKind};
pub use text::{decode, encode, lookup_encoding, TextEncoding};

/// Domain errors callers may want to match on
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),
}

/// Settings for a single file pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Which writer to use
    pub mode: Mode,
    /// Encoding label for both reading and writing
    pub encoding: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Full,
            encoding: "utf-8".to_string(),
        }
    }
}

/// Run the selected writer over already-decoded text
pub fn transform(input: &str, mode: Mode) -> Transformed {
    match mode {
        Mode::Full => emit_full(input),
        Mode::Minimal { direction } => emit_minimal(input, direction),
    }
}

/// Rewrite `input` into `output`, returning the number of pin names that changed.
///
/// The input is read completely before the output is created, so `input` and `output`
/// may be the same path.
pub fn process_file(input: &Path, output: &Path, options: &Options) -> Result<usize> {
    let encoding = lookup_encoding(&options.encoding)?;

    log::info!(
        "Processing {} -> {} ({:?}, {})",
        input.display(),
        output.display(),
        options.mode,
        encoding.name()
    );

    let bytes = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let content = decode(&bytes, encoding);

    let transformed = transform(&content, options.mode);

    let encoded = encode(&transformed.text, encoding);
    fs::write(output, encoded)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    Ok(transformed.modified)
}
