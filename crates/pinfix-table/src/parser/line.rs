//! Classification of individual pin table lines

/// First token of the column header row
const HEADER_PIN_TOKEN: &str = "Pin";
/// Second token of the column header row
const HEADER_NAME_TOKEN: &str = "Name";
/// Lowercased prefix of the trailing pin count line
const SUMMARY_PREFIX: &str = "total number of pins";

/// What a single line of the pin table represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// First line of the file (device, package and timestamp)
    Banner,
    /// Empty or whitespace-only line
    Blank,
    /// Column header row (`Pin Name ...`)
    Header,
    /// Trailing `Total Number of Pins` line
    Summary,
    /// Anything else; may or may not be a well-formed pin row
    Data,
}

/// Split text into lines, accepting `\n`, `\r\n` and lone `\r` as terminators.
///
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Split a line into whitespace-separated columns
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Classify a line. `is_first` marks the first line of the file.
pub fn classify_line(line: &str, is_first: bool) -> LineKind {
    if is_first {
        return LineKind::Banner;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    let mut tokens = trimmed.split_whitespace();
    if let (Some(HEADER_PIN_TOKEN), Some(HEADER_NAME_TOKEN)) = (tokens.next(), tokens.next()) {
        return LineKind::Header;
    }

    if is_summary(trimmed) {
        return LineKind::Summary;
    }

    LineKind::Data
}

fn is_summary(trimmed: &str) -> bool {
    trimmed
        .get(..SUMMARY_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(SUMMARY_PREFIX))
}
