use anyhow::Context;
use clap::Parser;
use garage::cli::{Cli, Command};
use garage::error::exit_code;
use garage::output::OutputFormat;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(garage_err) = e.downcast_ref::<garage::Error>() {
                ExitCode::from(garage_err.exit_code() as u8)
            } else {
                ExitCode::from(exit_code::GENERAL_ERROR as u8)
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Validate CLI arguments
    cli.validate()
        .map_err(garage::Error::InvalidArgument)
        .context("Invalid arguments")?;

    garage::telemetry::init(cli.verbose, cli.quiet);

    match cli.command {
        Command::Bill {
            file,
            capacity,
            rates,
            format,
            json,
            csv,
        } => {
            garage::commands::bill::run(
                file.as_deref(),
                capacity,
                &rates,
                format,
                OutputFormat::from_flags(json, csv),
            )
            .context("Billing failed")?;
        }
        Command::Fee { minutes, rates } => {
            garage::commands::fee::run(minutes, &rates)?;
        }
        Command::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "garage", &mut std::io::stdout());
        }
    }

    Ok(())
}
