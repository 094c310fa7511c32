//! Thin command-line surface over group snapshots stored as JSON.

pub mod output;

use std::{fs, path::Path, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::config::{Config, ConfigError, ConfigManager};
use crate::core::services::{ServiceError, SummaryService};
use crate::currency::Money;
use crate::domain::{ParticipantId, SplitRequest};
use crate::errors::LedgerError;
use crate::ledger::{allocate_with, Group};

pub const USAGE: &str = "\
Usage:
  split_core_cli summary <group.json> [--json]
  split_core_cli settle <group.json> [--json]
  split_core_cli allocate <amount> <equal|exact|percent> <id[=value]>... [--json]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\n{}", USAGE)]
    Usage(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Summary { path: String },
    Settle { path: String },
    Allocate { amount: Money, split: SplitRequest },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub json: bool,
}

/// Parses process arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut json = false;
    let mut positional = Vec::new();
    for arg in args.into_iter().map(Into::into) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }
    let mut positional = positional.into_iter();

    let command = match positional.next().as_deref() {
        None | Some("help") | Some("--help") | Some("-h") => Command::Help,
        Some("summary") => Command::Summary {
            path: required(positional.next(), "missing <group.json>")?,
        },
        Some("settle") => Command::Settle {
            path: required(positional.next(), "missing <group.json>")?,
        },
        Some("allocate") => {
            let amount: Money = required(positional.next(), "missing <amount>")?.parse()?;
            let policy = required(positional.next(), "missing split policy")?;
            let split = parse_split(&policy, positional.by_ref().collect())?;
            Command::Allocate { amount, split }
        }
        Some(other) => return Err(CliError::Usage(format!("unknown command `{other}`"))),
    };
    Ok(Invocation { command, json })
}

fn required(value: Option<String>, message: &str) -> Result<String, CliError> {
    value.ok_or_else(|| CliError::Usage(message.to_string()))
}

fn parse_split(policy: &str, entries: Vec<String>) -> Result<SplitRequest, CliError> {
    match policy.to_ascii_lowercase().as_str() {
        "equal" => Ok(SplitRequest::equal(entries)),
        "exact" => {
            let pairs = entries
                .iter()
                .map(|entry| -> Result<(ParticipantId, Money), CliError> {
                    let (id, value) = split_entry(entry)?;
                    Ok((id, value.parse::<Money>()?))
                })
                .collect::<Result<Vec<_>, CliError>>()?;
            Ok(SplitRequest::exact(pairs))
        }
        "percent" => {
            let pairs = entries
                .iter()
                .map(|entry| -> Result<(ParticipantId, Decimal), CliError> {
                    let (id, value) = split_entry(entry)?;
                    let percent = Decimal::from_str(value).map_err(|err| {
                        CliError::Usage(format!("`{value}` is not a percentage: {err}"))
                    })?;
                    Ok((id, percent))
                })
                .collect::<Result<Vec<_>, CliError>>()?;
            Ok(SplitRequest::percent(pairs))
        }
        other => Err(CliError::Usage(format!("unknown split policy `{other}`"))),
    }
}

fn split_entry(entry: &str) -> Result<(ParticipantId, &str), CliError> {
    entry
        .split_once('=')
        .map(|(id, value)| (ParticipantId::from(id), value))
        .ok_or_else(|| CliError::Usage(format!("expected <id>=<value>, got `{entry}`")))
}

pub fn load_group(path: impl AsRef<Path>) -> Result<Group, LedgerError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|err| LedgerError::from(err).into())
}

/// Executes an invocation and returns the text to print on stdout.
pub fn execute(invocation: &Invocation, config: &Config) -> Result<String, CliError> {
    let currency = &config.currency;
    match &invocation.command {
        Command::Help => Ok(format!("{USAGE}\n")),
        Command::Summary { path } => {
            let group = load_group(path)?;
            let summary = SummaryService::group_summary(&group, &config.tolerances)?;
            if invocation.json {
                to_json(&summary)
            } else {
                Ok(output::render_summary(&group.name, &summary, currency))
            }
        }
        Command::Settle { path } => {
            let group = load_group(path)?;
            let settlements = SummaryService::settlements(&group, &config.tolerances)?;
            if invocation.json {
                to_json(&settlements)
            } else {
                Ok(output::render_settlements(&settlements, currency))
            }
        }
        Command::Allocate { amount, split } => {
            let shares =
                allocate_with(*amount, split, &config.tolerances).map_err(LedgerError::from)?;
            if invocation.json {
                to_json(&shares)
            } else {
                Ok(output::render_shares(&shares, currency))
            }
        }
    }
}

/// Entry point used by the `split_core_cli` binary.
pub fn run_cli<I, S>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let invocation = parse_args(args)?;
    let config = ConfigManager::new().load()?;
    tracing::debug!(command = ?invocation.command, "running command");
    execute(&invocation, &config)
}
