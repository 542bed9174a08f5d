//! gridsheet - menu-driven grid in the terminal

use anyhow::Context;
use gridsheet::cli::{self, Command, MenuArgs, RecordsArgs, USAGE};
use gridsheet::config::{Config, load_config};
use gridsheet::error::CliError;
use gridsheet::{commands, logging, menu};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let cli = match cli::parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, CliError::Usage(_)) {
                eprintln!("{}", USAGE);
            }
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Menu(args) => run_menu(&args),
        Command::Count(args) => {
            let stdin = io::stdin();
            commands::run_count(&args, stdin.lock(), io::stdout().lock())?;
            Ok(())
        }
        Command::Records(args) => run_records(&args),
    }
}

fn run_menu(args: &MenuArgs) -> anyhow::Result<()> {
    let config = if args.no_config {
        Config::default()
    } else {
        let (config, warnings) = load_config(args.config_file.as_ref());
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }
        config
    };
    let config = args.apply_to(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    menu::run_menu(&config, stdin.lock(), &mut stdout).context("menu session failed")?;
    stdout.flush()?;
    Ok(())
}

fn run_records(args: &RecordsArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    commands::run_records(args, &json, io::stdout().lock())
        .with_context(|| format!("failed to process {}", args.file.display()))?;
    Ok(())
}
