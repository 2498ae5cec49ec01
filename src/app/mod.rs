//! Application shell
//!
//! Ties the command registry to a [`Workspace`] and to the console: commands
//! come in as lines, outcomes go out as text.

mod event_loop;
mod state;

pub use state::Workspace;

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::command::{CommandError, CommandRegistry, Outcome};

/// Prompt shown before each command
pub const PROMPT: &str = "headsmith> ";

/// Main application struct
#[derive(Debug)]
pub struct App {
    /// Settings, config and clipboard
    pub workspace: Workspace,
    /// Command table
    registry: CommandRegistry,
    /// Style errors and prompts with ANSI colors
    color: bool,
}

impl App {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            registry: CommandRegistry::new(),
            color: false,
        }
    }

    /// Enable or disable colored output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run the interactive read loop until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        event_loop::run(self, input, output)
    }

    /// Run a single, already tokenized command (from process arguments)
    ///
    /// Returns an error if the command failed so the process can exit non-zero.
    pub fn run_once<W: Write>(&mut self, tokens: Vec<String>, mut output: W) -> Result<()> {
        let outcome = self
            .registry
            .dispatch_tokens(&mut self.workspace, tokens)
            .map_err(anyhow::Error::from)?;
        self.write_outcome(&mut output, outcome)
    }

    /// Dispatch one typed line and print the result
    ///
    /// Returns `false` once the user asked to quit.
    pub(crate) fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<bool> {
        match self.registry.dispatch(&mut self.workspace, line) {
            Ok(Outcome::Quit) => Ok(false),
            Ok(outcome) => {
                self.write_outcome(output, outcome)?;
                Ok(true)
            }
            Err(e) => {
                self.write_error(output, &e)?;
                Ok(true)
            }
        }
    }

    fn write_outcome<W: Write>(&self, output: &mut W, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Nothing | Outcome::Quit | Outcome::Help(_) => {}
            Outcome::Message(text) => writeln!(output, "{}", text)?,
            Outcome::Heading { text, copied } => {
                if self.workspace.config.print_heading {
                    writeln!(output, "{}", text)?;
                }
                if copied {
                    self.write_note(output, "(copied to clipboard)")?;
                }
            }
        }
        Ok(())
    }

    fn write_note<W: Write>(&self, output: &mut W, note: &str) -> Result<()> {
        if self.color {
            writeln!(output, "{}", note.dark_grey())?;
        } else {
            writeln!(output, "{}", note)?;
        }
        Ok(())
    }

    fn write_error<W: Write>(&self, output: &mut W, error: &CommandError) -> Result<()> {
        tracing::debug!("Command failed: {}", error);
        let text = match error {
            CommandError::Failed(e) => format!("error: {:#}", e),
            other => format!("error: {}", other),
        };
        if self.color {
            writeln!(output, "{}", text.red().bold())?;
        } else {
            writeln!(output, "{}", text)?;
        }
        Ok(())
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.color {
            write!(output, "{}", PROMPT.bold())?;
        } else {
            write!(output, "{}", PROMPT)?;
        }
        output.flush()?;
        Ok(())
    }
}
