//! Full table rewrite: one output line per input line

use crate::mapping::append_pin_suffix;
use crate::parser::{classify_line, split_lines, tokenize, LineKind};

use super::Transformed;

/// Suffix every pin name, keeping all other lines and columns.
///
/// The banner and header lines are copied verbatim. Data lines are re-joined with single
/// spaces, so column alignment is not preserved.
pub fn emit_full(input: &str) -> Transformed {
    let mut out = Transformed::default();

    for (index, line) in split_lines(input).enumerate() {
        match classify_line(line, index == 0) {
            LineKind::Banner | LineKind::Header => out.push_line(line),
            LineKind::Blank => out.push_line(""),
            LineKind::Summary | LineKind::Data => {
                let mut columns = tokenize(line);
                if append_pin_suffix(&mut columns) {
                    out.modified += 1;
                }
                out.push_line(&columns.join(" "));
            }
        }
    }

    out
}
