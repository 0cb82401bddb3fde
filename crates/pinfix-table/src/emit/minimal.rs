//! Reduced table: `Pin Pin_Name Bank [Direction]`

use crate::mapping::{append_pin_suffix, infer_direction, is_pin_number};
use crate::parser::{classify_line, split_lines, tokenize, LineKind};

use super::Transformed;

/// Pin rows in vendor exports carry at least pin, name, byte group, bank and one more column
pub const MIN_PIN_COLUMNS: usize = 5;

const BANK_COLUMN: usize = 3;

/// Reduce the table to pin rows only, with suffixed names.
///
/// The banner, blank lines, header rows, the pin count summary and any row that is not a
/// well-formed pin row are dropped. When `direction` is set, a column inferred from the
/// original pin name is appended.
pub fn emit_minimal(input: &str, direction: bool) -> Transformed {
    let mut out = Transformed::default();

    out.push_line(if direction {
        "Pin Pin_Name Bank Direction"
    } else {
        "Pin Pin_Name Bank"
    });

    for (index, line) in split_lines(input).enumerate() {
        match classify_line(line, index == 0) {
            LineKind::Data => {}
            kind => {
                log::debug!("line {}: dropping {:?} line", index + 1, kind);
                continue;
            }
        }

        let original = tokenize(line);
        if original.len() < MIN_PIN_COLUMNS {
            log::debug!(
                "line {}: dropping row with {} column(s)",
                index + 1,
                original.len()
            );
            continue;
        }
        if !is_pin_number(&original[0]) {
            log::debug!("line {}: dropping row, {:?} is not a pin", index + 1, original[0]);
            continue;
        }

        let mut columns = original.clone();
        if append_pin_suffix(&mut columns) {
            out.modified += 1;
        }

        let mut row = format!("{} {} {}", columns[0], columns[1], columns[BANK_COLUMN]);
        if direction {
            row.push(' ');
            row.push_str(infer_direction(&original[1]).as_str());
        }
        out.push_line(&row);
    }

    out
}
