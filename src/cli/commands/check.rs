//! Implementation of the `yamlcfg check` command.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::CheckArgs;
use crate::domain::error::{ValidationError, ViolationCategory};
use crate::domain::models::ServiceConfig;
use crate::infrastructure::config::{ConfigError, ConfigLoader};
use crate::services::Validator;

#[derive(Debug, Serialize)]
pub struct ViolationOutput {
    pub field: String,
    pub owner: String,
    pub code: &'static str,
    pub category: ViolationCategory,
    pub message: String,
}

impl From<&ValidationError> for ViolationOutput {
    fn from(err: &ValidationError) -> Self {
        Self {
            field: err.field().to_string(),
            owner: err.owner().to_string(),
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
        }
    }
}

/// How a check ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Every constraint holds.
    Valid,
    /// The document violates a constraint.
    Invalid,
    /// The configuration type could not be read.
    SchemaDefect,
}

impl CheckStatus {
    /// Process exit status; 2 is reserved for I/O and parse errors.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
            Self::SchemaDefect => 3,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub valid: bool,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ServiceConfig>,
    pub violations: Vec<ViolationOutput>,
}

impl CheckOutput {
    /// Schema defects outrank data violations.
    pub fn status(&self) -> CheckStatus {
        if self
            .violations
            .iter()
            .any(|v| v.category == ViolationCategory::Schema)
        {
            CheckStatus::SchemaDefect
        } else if self.valid {
            CheckStatus::Valid
        } else {
            CheckStatus::Invalid
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        if self.valid {
            let mut lines = vec![format!("{}: OK", self.path.display())];
            if let Some(config) = &self.config {
                if let Some(name) = &config.name {
                    lines.push(format!("  name:    {name}"));
                }
                if let Some(hosts) = &config.hosts {
                    lines.push(format!("  hosts:   {}", hosts.join(", ")));
                }
                if let Some(timeout) = config.timeout_secs {
                    lines.push(format!("  timeout: {timeout}s"));
                }
            }
            return lines.join("\n");
        }

        let mut lines = vec![format!(
            "{}: {} violation(s)",
            self.path.display(),
            self.violations.len()
        )];
        for violation in &self.violations {
            let marker = match violation.category {
                ViolationCategory::Data => "-",
                ViolationCategory::Schema => "!",
            };
            lines.push(format!("  {marker} {}", violation.message));
        }
        lines.join("\n")
    }
}

/// Run the check and report how it ended.
///
/// I/O and parse failures are returned as errors, constraint violations are
/// reported as output.
pub fn execute(args: CheckArgs, json_mode: bool) -> Result<CheckStatus> {
    let loader = match &args.env_prefix {
        Some(prefix) => ConfigLoader::new().with_env_prefix(prefix),
        None => ConfigLoader::new(),
    };

    let result = if args.all {
        check_all(&loader, &args)?
    } else {
        check_first(&loader, &args)?
    };

    output(&result, json_mode)?;
    Ok(result.status())
}

fn check_first(loader: &ConfigLoader, args: &CheckArgs) -> Result<CheckOutput> {
    match loader.load::<ServiceConfig>(&args.file) {
        Ok(config) => Ok(CheckOutput {
            valid: true,
            path: args.file.clone(),
            config: Some(config),
            violations: vec![],
        }),
        Err(ConfigError::Invalid { path, source }) => Ok(CheckOutput {
            valid: false,
            path,
            config: None,
            violations: vec![ViolationOutput::from(&source)],
        }),
        Err(err) => Err(err.into()),
    }
}

fn check_all(loader: &ConfigLoader, args: &CheckArgs) -> Result<CheckOutput> {
    let config: ServiceConfig = loader.parse(&args.file)?;
    let violations: Vec<ViolationOutput> = Validator::validate_all(&config)
        .iter()
        .map(ViolationOutput::from)
        .collect();
    let valid = violations.is_empty();
    Ok(CheckOutput {
        valid,
        path: args.file.clone(),
        config: valid.then_some(config),
        violations,
    })
}
