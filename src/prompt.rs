//! Stdin helpers for interactive prompts.

use anyhow::Result;
use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
///
/// Returns `None` once stdin reaches end of input, so piped sessions
/// terminate instead of looping on an exhausted stream.
pub fn read_line(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Ask user for confirmation with a yes/no prompt.
/// Returns true if user confirms (y/yes), false if user declines (n/no).
/// Repeats until user provides valid input; end of input counts as a decline.
pub fn confirm(message: &str) -> Result<bool> {
    loop {
        let Some(input) = read_line(&format!("{} (y/n): ", message))? else {
            return Ok(false);
        };

        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'."),
        }
    }
}
