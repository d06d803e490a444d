// crates/vquant-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "vquant-cli")]
#[command(about = "Linear voltage quantizer (ADC/DAC reference model) CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List built-in range profiles
    Profiles(cmd::profiles::ProfilesArgs),

    /// Voltage -> code (ADC model)
    Forward(cmd::convert::ForwardArgs),

    /// Code -> voltage (DAC model)
    Reverse(cmd::convert::ReverseArgs),

    /// Batch-convert a text file of values, one per line
    Convert(cmd::convert::ConvertArgs),

    /// Profile file tools (.vqp)
    Profile(cmd::profile::ProfileArgs),

    /// Run reference-model conformance scenarios
    Check(cmd::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries results only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Profiles(args) => cmd::profiles::run(args),
        Commands::Forward(args) => cmd::convert::run_forward(args),
        Commands::Reverse(args) => cmd::convert::run_reverse(args),
        Commands::Convert(args) => cmd::convert::run_convert(args),
        Commands::Profile(args) => cmd::profile::run(args),
        Commands::Check(args) => cmd::check::run(args),
    }
}
