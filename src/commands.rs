//! The non-interactive subcommands.

use crate::cli::{CountArgs, RecordsArgs};
use crate::error::Result;
use gridsheet_query::{count_occurrences, parse_records, process_items, records_to_json};
use std::io::{BufRead, Write};

/// Count `args.text` in the first line of `input` and report the total.
pub fn run_count<R: BufRead, W: Write>(
    args: &CountArgs,
    mut input: R,
    mut output: W,
) -> Result<usize> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let paragraph = line.trim();

    let count = count_occurrences(paragraph, &args.text, args.options);
    tracing::debug!(count, text = %args.text, "counted occurrences");
    writeln!(output, "{} occurrences found", count)?;
    Ok(count)
}

/// Filter and sort the JSON records in `json`, writing the result to `output`.
pub fn run_records<W: Write>(args: &RecordsArgs, json: &str, mut output: W) -> Result<()> {
    let items = parse_records(json)?;
    let processed = process_items(items, &args.filters, args.order);
    writeln!(output, "{}", records_to_json(&processed)?)?;
    Ok(())
}
