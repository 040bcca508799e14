use crate::commands::Outcome;
use crate::domain::tag::Tag;
use anyhow::Result;
use console::style;
use std::io::{self, Write};

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the final result of a tagging command.
///
/// "Tagged OLD -> NEW" when the tag was derived from a predecessor,
/// "Tagged NEW" otherwise. Dry runs announce what would have happened.
pub fn display_outcome(outcome: &Outcome) {
    if !outcome.applied {
        display_status(&format!("dry run, would tag {}", outcome.created));
    }

    match &outcome.previous {
        Some(previous) => println!("Tagged {} -> {}", previous, outcome.created),
        None => println!("Tagged {}", outcome.created),
    }
}

/// Print all discovered versions, one per line.
pub fn display_versions(versions: &[Tag]) {
    for version in versions {
        println!("{}", version);
    }
}

/// Advisory for `--hash 1`: legal, but a single character disambiguates
/// almost nothing.
pub fn display_hash_advisory() {
    display_status("just one hash character? This is useless, but here you go...");
}

/// Prompt for a version string on stdin.
pub fn prompt_version() -> Result<String> {
    print!("Version to tag (e.g. v1.2.3): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
