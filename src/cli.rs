//! Command-line argument parsing.

use crate::config::Config;
use crate::error::{CliError, Result};
use gridsheet_query::{Filter, SearchOptions, SortOrder};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: gridsheet [OPTIONS]
       gridsheet count [--ignore-case] [--overlap] <TEXT>
       gridsheet records <FILE> [--filter FIELD OP VALUE]... [--order ASC|DESC]

Without a subcommand, starts the interactive grid menu.

Options:
  --rows <N>                Number of rows (skips the prompt)
  --cols <N>                Number of columns (skips the prompt)
  --width <N>               Cell width used by the preview (default: 12)
  --config <FILE>           Load settings from this TOML file
  --no-config               Do not read any config file
  -v, --verbose             Log debug events to stderr
  -h, --help                Print help

count:
  Reads a paragraph from the first line of stdin and counts occurrences of TEXT.
  -i, --ignore-case         Case-insensitive matching
  --overlap                 Count overlapping matches

records:
  Reads a JSON array of objects, moves records matching every filter to the
  front sorted by their \"priority\" field, and prints the result as JSON.
  --filter FIELD OP VALUE   OP is one of = == != > < >= <= (repeatable)
  --order ASC|DESC          Priority order (default: ASC)";

/// Options for the interactive menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuArgs {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub width: Option<usize>,
    pub config_file: Option<PathBuf>,
    pub no_config: bool,
}

impl MenuArgs {
    /// Command-line values win over the config file.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(rows) = self.rows {
            config.rows = Some(rows);
        }
        if let Some(cols) = self.cols {
            config.cols = Some(cols);
        }
        if let Some(width) = self.width {
            config.cell_width = width;
        }
        config
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountArgs {
    pub text: String,
    pub options: SearchOptions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordsArgs {
    pub file: PathBuf,
    pub filters: Vec<Filter>,
    pub order: SortOrder,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Menu(MenuArgs),
    Count(CountArgs),
    Records(RecordsArgs),
    Help,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cli {
    pub verbose: bool,
    pub command: Command,
}

fn usage_error(message: impl Into<String>) -> CliError {
    CliError::Usage(message.into())
}

/// Take the value following `flag`, advancing `i`.
fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| usage_error(format!("{} requires a value", flag)))
}

fn parse_positive(flag: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(usage_error(format!(
            "{} expects a positive integer, got '{}'",
            flag, value
        ))),
    }
}

/// Parse arguments (without the program name).
///
/// `-v` and `-h` are global only in front of a subcommand name; after it,
/// arguments belong to the subcommand.
pub fn parse_args(args: &[String]) -> Result<Cli> {
    let mut verbose = false;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                return Ok(Cli {
                    verbose,
                    command: Command::Help,
                });
            }
            _ => break,
        }
        i += 1;
    }

    let rest = &args[i..];
    let command = match rest.first().map(String::as_str) {
        Some("count") => parse_count(&rest[1..])?,
        Some("records") => parse_records(&rest[1..])?,
        _ => {
            let (menu, menu_verbose) = parse_menu(rest)?;
            verbose |= menu_verbose;
            match menu {
                Some(menu) => Command::Menu(menu),
                None => Command::Help,
            }
        }
    };
    Ok(Cli { verbose, command })
}

/// Menu flags may appear in any order, `-v` among them. `None` means help.
fn parse_menu(args: &[String]) -> Result<(Option<MenuArgs>, bool)> {
    let mut menu = MenuArgs::default();
    let mut verbose = false;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                menu.rows = Some(parse_positive("--rows", flag_value(args, &mut i, "--rows")?)?)
            }
            "--cols" => {
                menu.cols = Some(parse_positive("--cols", flag_value(args, &mut i, "--cols")?)?)
            }
            "--width" => {
                menu.width = Some(parse_positive("--width", flag_value(args, &mut i, "--width")?)?)
            }
            "--config" => {
                menu.config_file = Some(PathBuf::from(flag_value(args, &mut i, "--config")?))
            }
            "--no-config" => menu.no_config = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok((None, verbose)),
            arg if arg.starts_with('-') => {
                return Err(usage_error(format!("Unknown option: {}", arg)));
            }
            arg => return Err(usage_error(format!("Unexpected argument: {}", arg))),
        }
        i += 1;
    }
    Ok((Some(menu), verbose))
}

fn parse_count(args: &[String]) -> Result<Command> {
    let mut options = SearchOptions::default();
    let mut text: Option<String> = None;
    let mut positional_only = false;
    for arg in args {
        let a = arg.as_str();
        let is_flag = !positional_only && a.len() > 1 && a.starts_with('-');
        match a {
            "--" if !positional_only => {
                positional_only = true;
                continue;
            }
            "-i" | "--ignore-case" if is_flag => options.case_sensitive = false,
            "--overlap" if is_flag => options.allow_overlapping = true,
            "-h" | "--help" if is_flag => return Ok(Command::Help),
            // Negative numbers are text to search for, not options.
            a if is_flag && a.parse::<f64>().is_err() => {
                return Err(usage_error(format!("Unknown option: {}", a)));
            }
            a => {
                if text.is_some() {
                    return Err(usage_error(format!("Unexpected argument: {}", a)));
                }
                text = Some(a.to_string());
            }
        }
    }
    let text = text.ok_or_else(|| usage_error("count requires the TEXT to search for"))?;
    Ok(Command::Count(CountArgs { text, options }))
}

fn parse_records(args: &[String]) -> Result<Command> {
    let mut file: Option<PathBuf> = None;
    let mut filters = Vec::new();
    let mut order = SortOrder::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--filter" => {
                let field = flag_value(args, &mut i, "--filter")?;
                let op = flag_value(args, &mut i, "--filter")?;
                let value = flag_value(args, &mut i, "--filter")?;
                filters.push(Filter::parse(field, op, value)?);
            }
            "--order" => order = SortOrder::from_label(flag_value(args, &mut i, "--order")?),
            "-h" | "--help" => return Ok(Command::Help),
            arg if arg.starts_with('-') => {
                return Err(usage_error(format!("Unknown option: {}", arg)));
            }
            arg => {
                if file.is_some() {
                    return Err(usage_error(format!("Unexpected argument: {}", arg)));
                }
                file = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| usage_error("records requires a JSON FILE"))?;
    Ok(Command::Records(RecordsArgs {
        file,
        filters,
        order,
    }))
}
