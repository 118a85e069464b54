//! Command-line interface for the `yamlcfg` binary.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

pub use types::{CheckArgs, Cli, Commands};

/// Print a command failure and its cause chain.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": err.to_string(),
            "causes": causes,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err}");
    }
}
