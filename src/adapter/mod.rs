//! Process adapter: exposes a board overlay as the executable the host runs.
//!
//! The host invokes the overlay with a single sub-command and a YAML
//! document on stdin:
//!
//! ```text
//! orangepi5-overlay get-options < extra-options.yaml > options.yaml
//! orangepi5-overlay install     < install-options.yaml
//! ```
//!
//! Only `get-options` writes to stdout. Logs go to stderr.

use crate::contracts::{InstallOptions, Installable};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

/// Usage text for unknown or missing commands.
pub const USAGE: &str =
    "Usage:\n  orangepi5-overlay get-options  < extra-options.yaml\n  orangepi5-overlay install      < install-options.yaml";

/// Sub-commands understood by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetOptions,
    Install,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::GetOptions => "get-options",
            Command::Install => "install",
        }
    }
}

/// Parse the positional arguments (program name already stripped).
pub fn parse_command(args: &[String]) -> Result<Command> {
    match args {
        [cmd] if cmd == "get-options" => Ok(Command::GetOptions),
        [cmd] if cmd == "install" => Ok(Command::Install),
        [] => bail!("missing command\n{}", USAGE),
        [cmd] => bail!("unsupported command '{}'\n{}", cmd, USAGE),
        _ => bail!("expected exactly one command, got {}\n{}", args.len(), USAGE),
    }
}

/// Run `args` against `board`, reading the command input from `input` and
/// writing any reply to `output`.
pub fn execute<B, R, W>(board: &B, args: &[String], mut input: R, mut output: W) -> Result<()>
where
    B: Installable,
    B::Extra: DeserializeOwned,
    R: Read,
    W: Write,
{
    let command = parse_command(args)?;
    log::debug!("dispatching {}", command.as_str());

    let mut document = String::new();
    input
        .read_to_string(&mut document)
        .with_context(|| format!("reading {} input from stdin", command.as_str()))?;

    match command {
        Command::GetOptions => {
            let extra: B::Extra = parse_optional(&document)
                .with_context(|| format!("parsing {} input", command.as_str()))?;
            let options = board.get_options(extra)?;
            log::info!(
                "board {} with {} kernel args",
                options.name,
                options.kernel_args.len()
            );
            serde_yaml::to_writer(&mut output, &options).context("encoding board options")?;
            output.flush().context("flushing stdout")?;
        }
        Command::Install => {
            let options: InstallOptions<B::Extra> = serde_yaml::from_str(&document)
                .with_context(|| format!("parsing {} input", command.as_str()))?;
            board.install(options)?;
        }
    }

    Ok(())
}

/// Empty or `null` documents yield the default value.
fn parse_optional<T>(document: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if document.trim().is_empty() {
        return Ok(T::default());
    }
    let value: Option<T> = serde_yaml::from_str(document)?;
    Ok(value.unwrap_or_default())
}
