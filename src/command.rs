use std::fmt;

use crate::options::set::OptionSet;
use crate::options::value::OptionValue;

/// One token of a renderer invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    /// A `--name` flag token; rendered unquoted.
    Flag(String),
    /// A literal value token; rendered single-quoted.
    Literal(String),
}

impl Arg {
    /// The raw token handed to the OS when spawning.
    pub fn token(&self) -> String {
        match self {
            Arg::Flag(name) => format!("--{name}"),
            Arg::Literal(value) => value.clone(),
        }
    }
}

/// A fully-resolved renderer invocation: program plus ordered arguments.
///
/// Arguments are stored raw and handed to the OS as an argument vector, so no
/// shell ever interprets them. [`fmt::Display`] renders the shell-quoted
/// diagnostic string that accompanies every execution-related failure; the
/// quoting follows POSIX single-quote rules, so the rendered string is itself
/// safe to paste into a shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<Arg>,
}

impl CommandLine {
    /// The program to spawn.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The ordered argument tokens, unquoted.
    pub fn arg_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.args.iter().map(Arg::token)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            match arg {
                Arg::Flag(name) => write!(f, " --{name}")?,
                Arg::Literal(value) => write!(f, " {}", shell_quote(value))?,
            }
        }
        Ok(())
    }
}

/// Quote `value` so a POSIX shell reads it as a single literal token.
///
/// The value is always wrapped in single quotes; embedded single quotes are
/// rendered as `'\''`.
pub fn shell_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// Serialize `options` into a command line for `binary`.
///
/// Options emit in the iteration order of `options`; the policy per value
/// shape is documented on [`OptionValue`]. The input and output positionals
/// are always appended last, even when no option emits anything. Building is
/// pure and deterministic: identical inputs yield identical command lines.
pub fn build_command_line(
    binary: &str,
    input: &str,
    output: &str,
    options: &OptionSet,
) -> CommandLine {
    let mut args = Vec::new();

    for (name, value) in options.iter() {
        match value {
            OptionValue::Unset | OptionValue::Flag(false) => {}
            OptionValue::Flag(true) => args.push(Arg::Flag(name.to_string())),
            OptionValue::Scalar(v) => {
                args.push(Arg::Flag(name.to_string()));
                args.push(Arg::Literal(v.clone()));
            }
            OptionValue::Seq(items) => {
                for v in items {
                    args.push(Arg::Flag(name.to_string()));
                    args.push(Arg::Literal(v.clone()));
                }
            }
            OptionValue::Map(entries) => {
                for (key, v) in entries {
                    args.push(Arg::Flag(name.to_string()));
                    if let Some(key) = key {
                        args.push(Arg::Literal(key.clone()));
                    }
                    args.push(Arg::Literal(v.clone()));
                }
            }
        }
    }

    args.push(Arg::Literal(input.to_string()));
    args.push(Arg::Literal(output.to_string()));

    CommandLine {
        program: binary.to_string(),
        args,
    }
}

#[cfg(test)]
#[path = "../tests/unit/command.rs"]
mod tests;
