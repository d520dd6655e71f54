//! Line-oriented console over a [`Registry`]
//!
//! Each input line is one command. Tokens are parsed and checked here; the
//! registry only ever sees typed values. Every failure is reported as a
//! message and the loop keeps going until `exit` or end of input.

use crate::{Record, Registry, RegistryError, StatusField, SubsystemName};
use anyhow::{anyhow, bail, Context};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Commands:
  add <name>                      Add a subsystem (status 0)
  print <name>                    Show one subsystem
  list                            Show all subsystems
  json                            Show all subsystems as JSON
  status <name> <field> <value>   Set a status field (id 0,2,4,5,6,7 or name)
  remove <name>                   Remove a subsystem
  filter <mask>                   Show subsystems matching an 8-char 0/1/* mask
  data <name> <hex>               Queue pending data
  take <name>                     Consume pending data
  help                            Show this list
  exit                            Quit";

/// A parsed console command
///
/// Name tokens are bounded at parse time, so every command sees the same
/// truncated name that `add` stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(SubsystemName),
    Print(SubsystemName),
    List,
    Json,
    Status {
        name: SubsystemName,
        field: StatusField,
        value: u8,
    },
    Remove(SubsystemName),
    Filter(String),
    Data { name: SubsystemName, value: u32 },
    Take(SubsystemName),
    Help,
    Exit,
}

/// Parse a hexadecimal data word, with or without a `0x` prefix
fn parse_hex(token: &str) -> anyhow::Result<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).with_context(|| format!("Invalid hex value '{}'", token))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (&verb, args) = tokens
            .split_first()
            .ok_or_else(|| anyhow!("Empty command"))?;

        let arg = |i: usize, what: &str| -> anyhow::Result<String> {
            args.get(i)
                .map(|s| s.to_string())
                .ok_or_else(|| anyhow!("Missing {} for '{}'", what, verb))
        };
        let name_at = |i: usize| arg(i, "name").map(SubsystemName::new);

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => Command::Add(name_at(0)?),
            "print" => Command::Print(name_at(0)?),
            "list" => Command::List,
            "json" => Command::Json,
            "status" => {
                let name = name_at(0)?;
                let field = arg(1, "status field")?
                    .parse::<StatusField>()
                    .context("Invalid status field")?;
                let value_token = arg(2, "value")?;
                let value = value_token
                    .parse::<u8>()
                    .with_context(|| format!("Invalid status value '{}'", value_token))?;
                Command::Status { name, field, value }
            }
            "remove" => Command::Remove(name_at(0)?),
            "filter" => Command::Filter(arg(0, "mask")?),
            "data" => {
                let name = name_at(0)?;
                let value = parse_hex(&arg(1, "hex value")?)?;
                Command::Data { name, value }
            }
            "take" => Command::Take(name_at(0)?),
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => bail!("Unknown command '{}' (try 'help')", other),
        };

        Ok(command)
    }
}

/// Whether the console should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Console session owning one registry
#[derive(Debug, Default)]
pub struct Console {
    registry: Registry,
}

impl Console {
    pub fn new(registry: Registry) -> Self {
        Console { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute a parsed command, writing its output
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<Flow> {
        match command {
            Command::Add(name) => {
                let record = Record::new(name.clone(), 0);
                self.registry
                    .append(record)
                    .with_context(|| format!("Error adding subsystem '{}'", name))?;
                writeln!(out, "Subsystem '{}' added successfully.", name)?;
            }
            Command::Print(name) => {
                let record = self.registry.lookup(name.as_str())?;
                writeln!(out, "{}", record.render_with_width(self.registry.name_width()))?;
            }
            Command::List => {
                if self.registry.is_empty() {
                    writeln!(out, "No subsystems to display.")?;
                } else {
                    writeln!(out, "{}", self.registry.render())?;
                }
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(self.registry.records())?;
                writeln!(out, "{}", json)?;
            }
            Command::Status { name, field, value } => {
                self.registry
                    .lookup_mut(name.as_str())?
                    .set_field(field, value)
                    .with_context(|| format!("Invalid status update for '{}'", name))?;
                writeln!(out, "Subsystem '{}': {} set to {}.", name, field, value)?;
            }
            Command::Remove(name) => {
                self.registry.remove_named(name.as_str())?;
                writeln!(out, "Subsystem '{}' removed successfully.", name)?;
            }
            Command::Filter(mask) => {
                let filtered = self.registry.filter(&mask)?;
                if filtered.is_empty() {
                    writeln!(out, "No subsystems match {}.", mask)?;
                } else {
                    writeln!(out, "{}", filtered.render())?;
                }
            }
            Command::Data { name, value } => {
                match self.registry.lookup_mut(name.as_str())?.set_data(value) {
                    Some(old) => writeln!(
                        out,
                        "Subsystem '{}' data set to {:08X} (replaced {:08X}).",
                        name, value, old
                    )?,
                    None => writeln!(out, "Subsystem '{}' data set to {:08X}.", name, value)?,
                }
            }
            Command::Take(name) => {
                let value = self.registry.lookup_mut(name.as_str())?.take_data()?;
                writeln!(out, "Subsystem '{}' data: {:08X}", name, value)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Parse and execute one line, reporting any failure to `out`
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> std::io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| self.execute(command, &mut *out));

        match result {
            Ok(flow) => Ok(flow),
            Err(e) => {
                tracing::debug!("Command '{}' failed: {:#}", line.trim(), e);
                writeln!(out, "{}", describe(&e))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Read commands until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if self.run_line(&line, &mut out)? == Flow::Exit {
                return Ok(());
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }
}

/// User-facing message for a failed command
fn describe(error: &anyhow::Error) -> String {
    match error.downcast_ref::<RegistryError>() {
        Some(RegistryError::NotFound(name)) => format!("No subsystem named '{}'.", name),
        Some(RegistryError::Full { capacity }) => {
            format!("Error: registry is full ({} subsystems).", capacity)
        }
        Some(RegistryError::NoData) => "No pending data for this subsystem.".to_string(),
        Some(RegistryError::InvalidMask(mask)) => {
            format!("Filter error: '{}' must be 8 characters of 0, 1 or *.", mask)
        }
        _ => format!("Error: {:#}", error),
    }
}
