//! Line splitting and classification for pin table exports

mod line;

pub use line::{classify_line, split_lines, tokenize, LineKind};
