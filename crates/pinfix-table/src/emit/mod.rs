//! Pin table writers

mod full;
mod minimal;

pub use full::emit_full;
pub use minimal::{emit_minimal, MIN_PIN_COLUMNS};

/// Which writer to run over the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keep every line and column, only suffix pin names
    #[default]
    Full,
    /// Keep only pin rows, reduced to `Pin Pin_Name Bank [Direction]`
    Minimal {
        /// Append an inferred `Direction` column
        direction: bool,
    },
}

impl Mode {
    /// Tag used in the CLI summary line
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Mode::Full => None,
            Mode::Minimal { direction: false } => Some("minimal"),
            Mode::Minimal { direction: true } => Some("minimal +direction"),
        }
    }
}

/// Output of a single pass over a pin table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformed {
    /// Rewritten table, every line terminated by `\n`
    pub text: String,
    /// Number of rows whose pin name gained a suffix
    pub modified: usize,
}

impl Transformed {
    fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }
}
