//! Byte ↔ text conversion for pin files

use encoding_rs::{DecoderResult, Encoding, UTF_16BE, UTF_16LE};

use crate::Error;

/// Label that sniffs the byte order on read and writes a BOM
const UTF_16_BOM_LABEL: &str = "utf-16";

/// A resolved `--encoding` label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
    /// Bare `utf-16`: BOM is consumed on read and written on output
    bom: bool,
}

impl TextEncoding {
    /// Canonical WHATWG name
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    fn is_utf16(&self) -> bool {
        self.encoding == UTF_16LE || self.encoding == UTF_16BE
    }
}

/// Resolve a WHATWG encoding label such as `utf-8`, `latin1`, `gbk` or `utf-16le`
pub fn lookup_encoding(label: &str) -> Result<TextEncoding, Error> {
    let trimmed = label.trim();
    let encoding = Encoding::for_label(trimmed.as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;

    Ok(TextEncoding {
        encoding,
        bom: trimmed.eq_ignore_ascii_case(UTF_16_BOM_LABEL),
    })
}

/// Decode `bytes`, dropping malformed sequences instead of failing or substituting U+FFFD.
///
/// Only the bare `utf-16` label looks at a leading BOM; everywhere else it stays part of the
/// first line.
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> String {
    let mut decoder = if encoding.bom {
        encoding.encoding.new_decoder()
    } else {
        encoding.encoding.new_decoder_without_bom_handling()
    };
    let mut out = String::with_capacity(
        decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .unwrap_or(bytes.len()),
    );

    let mut src = bytes;
    let mut dropped = 0usize;
    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(src, &mut out, true);
        src = &src[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => {
                let needed = decoder
                    .max_utf8_buffer_length_without_replacement(src.len())
                    .unwrap_or(src.len());
                out.reserve(needed.max(4));
            }
            DecoderResult::Malformed(_, _) => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!(
            "Dropped {} malformed {} sequence(s)",
            dropped,
            encoding.name()
        );
    }

    out
}

/// Encode `text` for writing, in the same encoding it was read with
pub fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    if encoding.is_utf16() {
        return encode_utf16(text, encoding);
    }

    let (bytes, used, had_errors) = encoding.encoding.encode(text);
    if had_errors {
        log::warn!(
            "Some characters are not representable in {}; wrote numeric character references",
            used.name()
        );
    }
    bytes.into_owned()
}

/// encoding_rs only encodes to UTF-8 for the UTF-16 family
fn encode_utf16(text: &str, encoding: TextEncoding) -> Vec<u8> {
    let big_endian = encoding.encoding == UTF_16BE;
    let mut out = Vec::with_capacity(2 * (text.len() + 1));

    let bom = encoding.bom.then_some(0xFEFF_u16);
    for unit in bom.into_iter().chain(text.encode_utf16()) {
        let bytes = if big_endian {
            unit.to_be_bytes()
        } else {
            unit.to_le_bytes()
        };
        out.extend_from_slice(&bytes);
    }
    out
}
