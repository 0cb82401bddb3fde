//! Pin table rewrite command

use anyhow::{Context, Result};
use clap::Args;
use pinfix_table::{Mode, Options};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit status when the input file does not exist
const EXIT_MISSING_INPUT: u8 = 2;

/// Arguments for rewriting a pin table
#[derive(Args, Debug)]
pub struct ModifyArgs {
    /// Vendor pin table export (e.g. xc7k325tfbg676pkg.txt)
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file path (defaults to <input-stem>_modified.txt next to the input)
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the input file (takes precedence over --output)
    #[arg(long)]
    pub inplace: bool,

    /// Text encoding used for reading and writing
    #[arg(long, value_name = "NAME", default_value = "utf-8")]
    pub encoding: String,

    /// Only keep pin rows, reduced to: Pin Pin_Name Bank
    #[arg(long)]
    pub minimal: bool,

    /// With --minimal, add a Direction column inferred from the pin name (POWER/CONFIG/IO/UNKNOWN)
    #[arg(long)]
    pub direction: bool,
}

impl ModifyArgs {
    fn mode(&self) -> Mode {
        if self.minimal {
            Mode::Minimal {
                direction: self.direction,
            }
        } else {
            Mode::Full
        }
    }

    fn output_path(&self) -> PathBuf {
        if self.inplace {
            return self.input.clone();
        }
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// `<dir>/<stem>_modified.txt` for `<dir>/<stem>.<ext>`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_modified.txt"))
}

/// Execute the rewrite
pub fn execute(args: ModifyArgs) -> Result<ExitCode> {
    if !args.input.exists() {
        eprintln!("Error: input file does not exist: {}", args.input.display());
        return Ok(ExitCode::from(EXIT_MISSING_INPUT));
    }

    if args.direction && !args.minimal {
        log::warn!("--direction has no effect without --minimal");
    }

    let mode = args.mode();
    let output = args.output_path();
    let options = Options {
        mode,
        encoding: args.encoding.clone(),
    };

    let modified = pinfix_table::process_file(&args.input, &output, &options)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    match mode.label() {
        Some(label) => println!(
            "[{label}] Done: modified {modified} rows. Output file: {}",
            output.display()
        ),
        None => println!(
            "Done: modified {modified} rows. Output file: {}",
            output.display()
        ),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> ModifyArgs {
        ModifyArgs {
            input: PathBuf::from(input),
            output: None,
            inplace: false,
            encoding: "utf-8".to_string(),
            minimal: false,
            direction: false,
        }
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/xc7k325tfbg676pkg.txt")),
            PathBuf::from("data/xc7k325tfbg676pkg_modified.txt")
        );
        assert_eq!(
            default_output_path(Path::new("pins")),
            PathBuf::from("pins_modified.txt")
        );
        assert_eq!(
            default_output_path(Path::new("a.b.txt")),
            PathBuf::from("a.b_modified.txt")
        );
    }

    #[test]
    fn test_inplace_wins_over_output() {
        let mut a = args("pkg.txt");
        a.output = Some(PathBuf::from("other.txt"));
        assert_eq!(a.output_path(), PathBuf::from("other.txt"));

        a.inplace = true;
        assert_eq!(a.output_path(), PathBuf::from("pkg.txt"));
    }

    #[test]
    fn test_mode_selection() {
        let mut a = args("pkg.txt");
        a.direction = true;
        assert_eq!(a.mode(), Mode::Full);

        a.minimal = true;
        assert_eq!(a.mode(), Mode::Minimal { direction: true });

        a.direction = false;
        assert_eq!(a.mode(), Mode::Minimal { direction: false });
    }
}
