mod args;
mod commands;
mod error;
mod paths;

use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::args::Cli;
use crate::args::Command;
use crate::commands::stats::StatsInput;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs to `latest.log` in the cache directory, rotating the previous one.
fn init_logging(verbose: bool) -> Result<(), CliError> {
    let Some(log_path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(&log_path)?)?;
    log::debug!("Logging to {}", log_path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::List(view) => {
            let config = commands::load_config(cli.config.as_deref(), cli.page_size)?;
            commands::list::run(view, config, &mut out)?;
        }
        Command::Export { view, out: dir } => {
            let config = commands::load_config(cli.config.as_deref(), cli.page_size)?;
            commands::export::run(view, dir, config, &mut out)?;
        }
        Command::Stats {
            essieux,
            travailleurs,
            stock,
            pannes,
        } => {
            let input = StatsInput {
                essieux: essieux.as_path(),
                travailleurs: travailleurs.as_path(),
                stock: stock.as_deref(),
                pannes: pannes.as_deref(),
            };
            commands::stats::run(&input, &mut out)?;
        }
        Command::Validate { entity, data } => {
            if !commands::validate::run(*entity, data, &mut out)? {
                out.flush()?;
                return Ok(ExitCode::from(1));
            }
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
