//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::logging::{LogConfig, LogFormat, RotationPolicy};

#[derive(Parser, Debug)]
#[command(name = "yamlcfg")]
#[command(about = "yamlcfg - Typed YAML configuration checker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "YAMLCFG_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Also write JSON logs to rolling files in this directory
    #[arg(long, global = true, env = "YAMLCFG_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation, used with --log-dir
    #[arg(long, global = true, value_enum, default_value_t = RotationPolicy::Daily)]
    pub log_rotation: RotationPolicy,
}

impl Cli {
    /// Logging settings selected by the global flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
            rotation: self.log_rotation,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a service configuration file and validate it
    Check(CheckArgs),

    /// Show the declared constraints of the service configuration schema
    Schema,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the YAML document
    pub file: PathBuf,

    /// Report every failing field instead of stopping at the first
    #[arg(short, long)]
    pub all: bool,

    /// Let environment variables with this prefix override document keys
    #[arg(long, value_name = "PREFIX")]
    pub env_prefix: Option<String>,
}
