//! Output formatting utilities for the CLI.

use std::io::{self, Write};

use serde::Serialize;

/// A command result renderable for people or machines.
pub trait CommandOutput: Serialize {
    /// Terminal rendering.
    fn to_human(&self) -> String;

    /// Structured rendering for `--json`; the serialized value by default.
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Write `result` to `out` in the selected mode, newline terminated.
pub fn write_output<T, W>(result: &T, json_mode: bool, mut out: W) -> io::Result<()>
where
    T: CommandOutput,
    W: Write,
{
    if json_mode {
        serde_json::to_writer_pretty(&mut out, &result.to_json())?;
        writeln!(out)
    } else {
        writeln!(out, "{}", result.to_human())
    }
}

/// Print `result` to stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) -> io::Result<()> {
    write_output(result, json_mode, io::stdout().lock())
}
