//! Console read loop
//!
//! Reads one command per line, prints its outcome, and stops on `quit` or end
//! of input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::App;

/// Run the read loop
pub fn run<R: BufRead, W: Write>(app: &mut App, mut input: R, mut output: W) -> Result<()> {
    let mut line = String::new();

    loop {
        app.write_prompt(&mut output)?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            // EOF: end the prompt line so the shell prompt starts clean
            writeln!(output)?;
            tracing::info!("Input closed, leaving");
            break;
        }

        let command = line.trim_end_matches(['\r', '\n']);
        if !app.handle_line(command, &mut output)? {
            tracing::info!("Quit requested");
            break;
        }
    }

    output.flush()?;
    Ok(())
}
