use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod modify;

/// Append `_<PIN>` suffixes to FPGA package pin names
#[derive(Parser, Debug)]
#[command(name = "pinfix", version, long_about = None)]
struct Cli {
    #[command(flatten)]
    modify: modify::ModifyArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    modify::execute(cli.modify)
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
