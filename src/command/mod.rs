//! Command dispatch
//!
//! Typed lines are mapped onto a static table of commands built at startup.
//! Each entry declares its parameters and their kinds, so argument conversion
//! and arity checks happen here once and handlers receive typed values.
//!
//! Tokenizing (see [`tokenizer`]) is kept apart from dispatch so both can be
//! tested on their own.

pub mod handlers;
pub mod tokenizer;

use std::collections::HashMap;

use thiserror::Error;

use crate::app::Workspace;

pub use tokenizer::tokenize;

/// Errors shown to the user when a command line cannot be run
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: String,
        got: usize,
    },

    #[error("'{command}': {param} must be {expected}, got '{value}'")]
    InvalidArgument {
        command: &'static str,
        param: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Kind of value a parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Any text. A trailing text parameter takes the rest of the line.
    Text,
    /// Signed whole number
    Integer,
    /// true/false, on/off, yes/no, 1/0
    Flag,
}

impl ParamKind {
    fn describe(self) -> &'static str {
        match self {
            ParamKind::Text => "text",
            ParamKind::Integer => "a whole number",
            ParamKind::Flag => "on or off",
        }
    }
}

/// One declared parameter of a command
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub optional: bool,
}

impl Param {
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            optional: true,
        }
    }
}

/// A converted argument value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Text(String),
    Integer(i64),
    Flag(bool),
}

/// Converted arguments handed to a handler, in parameter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(Vec<Arg>);

impl Args {
    pub fn new(values: Vec<Arg>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text argument at `index`, if present
    pub fn get_text(&self, index: usize) -> Option<&str> {
        match self.0.get(index) {
            Some(Arg::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn text(&self, index: usize) -> anyhow::Result<&str> {
        self.get_text(index)
            .ok_or_else(|| anyhow::anyhow!("missing text argument #{}", index + 1))
    }

    pub fn integer(&self, index: usize) -> anyhow::Result<i64> {
        match self.0.get(index) {
            Some(Arg::Integer(value)) => Ok(*value),
            _ => anyhow::bail!("missing number argument #{}", index + 1),
        }
    }

    pub fn flag(&self, index: usize) -> anyhow::Result<bool> {
        match self.0.get(index) {
            Some(Arg::Flag(value)) => Ok(*value),
            _ => anyhow::bail!("missing on/off argument #{}", index + 1),
        }
    }
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report (blank line)
    Nothing,
    /// Informational text for the user
    Message(String),
    /// A rendered heading and whether it reached the clipboard
    Heading { text: String, copied: bool },
    /// Help for all commands, or for one
    Help(Option<String>),
    /// Leave the read loop
    Quit,
}

/// Handler signature shared by every command
pub type Handler = fn(&mut Workspace, &Args) -> anyhow::Result<Outcome>;

/// Static description of one command
#[derive(Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub params: &'static [Param],
    pub summary: &'static str,
    pub handler: Handler,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl CommandSpec {
    /// Usage line, e.g. `fixed-size <size>`
    pub fn usage(&self) -> String {
        let mut usage = self.name.to_string();
        for param in self.params {
            if param.optional {
                usage.push_str(&format!(" [{}]", param.name));
            } else {
                usage.push_str(&format!(" <{}>", param.name));
            }
        }
        usage
    }

    fn takes_rest_of_line(&self) -> bool {
        matches!(self.params.last(), Some(p) if p.kind == ParamKind::Text)
    }

    fn expected_arity(&self) -> String {
        let required = self.params.iter().filter(|p| !p.optional).count();
        if required == self.params.len() {
            required.to_string()
        } else {
            format!("{} to {}", required, self.params.len())
        }
    }

    /// Check arity and convert raw tokens to typed arguments
    fn convert(&self, mut tokens: Vec<String>) -> Result<Args, CommandError> {
        let required = self.params.iter().filter(|p| !p.optional).count();
        let got = tokens.len();
        let too_many = got > self.params.len() && !self.takes_rest_of_line();
        if got < required || too_many {
            return Err(CommandError::WrongArity {
                command: self.name,
                expected: self.expected_arity(),
                got,
            });
        }

        if got > self.params.len() {
            let rest = tokens.split_off(self.params.len() - 1).join(" ");
            tokens.push(rest);
        }

        let values = self
            .params
            .iter()
            .zip(tokens)
            .map(|(param, token)| self.convert_one(param, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Args::new(values))
    }

    fn convert_one(&self, param: &Param, token: String) -> Result<Arg, CommandError> {
        let invalid = |value: String| CommandError::InvalidArgument {
            command: self.name,
            param: param.name,
            expected: param.kind.describe(),
            value,
        };

        match param.kind {
            ParamKind::Text => Ok(Arg::Text(token)),
            ParamKind::Integer => token.parse().map(Arg::Integer).map_err(|_| invalid(token)),
            ParamKind::Flag => parse_flag(&token).map(Arg::Flag).ok_or_else(|| invalid(token)),
        }
    }
}

/// Parse an on/off style value
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Table of commands, looked up by name or alias (case-insensitive)
#[derive(Debug)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    index: HashMap<String, usize>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Registry holding every built-in command
    pub fn new() -> Self {
        Self::from_specs(handlers::builtin_commands())
    }

    /// Build a registry from an explicit table
    pub fn from_specs(commands: Vec<CommandSpec>) -> Self {
        let mut index = HashMap::new();
        for (position, spec) in commands.iter().enumerate() {
            for name in std::iter::once(&spec.name).chain(spec.aliases) {
                if index.insert(name.to_ascii_lowercase(), position).is_some() {
                    tracing::warn!("Command name '{}' registered twice", name);
                }
            }
        }
        Self { commands, index }
    }

    /// All commands in table order
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Find a command by name or alias
    pub fn resolve(&self, name: &str) -> Option<&CommandSpec> {
        self.index
            .get(&name.to_ascii_lowercase())
            .map(|&position| &self.commands[position])
    }

    /// Tokenize and run one typed line
    pub fn dispatch(&self, workspace: &mut Workspace, line: &str) -> Result<Outcome, CommandError> {
        self.dispatch_tokens(workspace, tokenize(line)?)
    }

    /// Run an already tokenized command (e.g. process arguments)
    pub fn dispatch_tokens(
        &self,
        workspace: &mut Workspace,
        mut tokens: Vec<String>,
    ) -> Result<Outcome, CommandError> {
        if tokens.is_empty() {
            return Ok(Outcome::Nothing);
        }

        let name = tokens.remove(0);
        let spec = self
            .resolve(&name)
            .ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;
        let args = spec.convert(tokens)?;

        tracing::debug!(command = spec.name, args = args.len(), "dispatching command");

        match (spec.handler)(workspace, &args)? {
            Outcome::Help(topic) => Ok(Outcome::Message(self.help(topic.as_deref())?)),
            outcome => Ok(outcome),
        }
    }

    /// Help text for every command, or for one named command
    pub fn help(&self, topic: Option<&str>) -> Result<String, CommandError> {
        if let Some(name) = topic {
            let spec = self
                .resolve(name)
                .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
            let mut text = format!("{}\n  {}", spec.usage(), spec.summary);
            if !spec.aliases.is_empty() {
                text.push_str(&format!("\n  aliases: {}", spec.aliases.join(", ")));
            }
            return Ok(text);
        }

        let usages: Vec<String> = self.commands.iter().map(CommandSpec::usage).collect();
        let column = usages.iter().map(String::len).max().unwrap_or(0);
        let lines: Vec<String> = self
            .commands
            .iter()
            .zip(&usages)
            .map(|(spec, usage)| format!("  {:<column$}  {}", usage, spec.summary))
            .collect();

        Ok(format!("Commands:\n{}", lines.join("\n")))
    }
}
