use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::error::ValidationError;
use crate::domain::models::Configuration;
use crate::services::Validator;

/// Origin reported for documents that were not read from a file.
pub const INLINE_SOURCE: &str = "<inline>";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be read.
    #[error("Error reading configuration file '{}': {source}", .path.display())]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document could not be mapped onto the target type.
    #[error("Error parsing configuration file '{}': {source}", .path.display())]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Underlying deserialization error.
        source: Box<figment::Error>,
    },

    /// The document parsed but violates a declared constraint.
    #[error("Invalid configuration in '{}': {source}", .path.display())]
    Invalid {
        /// Document path.
        path: PathBuf,
        /// The first violation found.
        source: ValidationError,
    },
}

impl ConfigError {
    /// Path of the offending document.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Invalid { path, .. } => path,
        }
    }

    /// The constraint violation, if that is what failed.
    pub const fn violation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads YAML documents into typed configuration objects and validates them.
///
/// Precedence (lowest to highest):
/// 1. The YAML document
/// 2. Environment variables (`<prefix>*`, nested keys split on `__`), when a
///    prefix is configured
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// Loader without environment overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `<prefix>KEY` environment variables override document keys
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Read, deserialize and validate the document at `path`
    pub fn load<C>(&self, path: impl AsRef<Path>) -> Result<C, ConfigError>
    where
        C: Configuration + DeserializeOwned,
    {
        let path = path.as_ref();
        let config = self.parse(path)?;
        let config = validate(config, path)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Read and deserialize the document at `path` without validating it
    pub fn parse<C>(&self, path: impl AsRef<Path>) -> Result<C, ConfigError>
    where
        C: DeserializeOwned,
    {
        let path = path.as_ref();
        info!(path = %path.display(), "loading configuration");

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract(&contents, path)
    }

    /// Read a document from `reader`, reporting errors against `origin`
    pub fn load_reader<C, R>(&self, mut reader: R, origin: impl AsRef<Path>) -> Result<C, ConfigError>
    where
        C: Configuration + DeserializeOwned,
        R: Read,
    {
        let origin = origin.as_ref();
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|source| ConfigError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
        let config = self.extract(&contents, origin)?;
        validate(config, origin)
    }

    /// Deserialize and validate an in-memory document
    pub fn load_str<C>(&self, contents: &str) -> Result<C, ConfigError>
    where
        C: Configuration + DeserializeOwned,
    {
        let origin = Path::new(INLINE_SOURCE);
        let config = self.extract(contents, origin)?;
        validate(config, origin)
    }

    fn figment(&self, contents: &str) -> Figment {
        let figment = Figment::from(Yaml::string(contents));
        match &self.env_prefix {
            Some(prefix) => figment.merge(Env::prefixed(prefix).split("__")),
            None => figment,
        }
    }

    fn extract<C>(&self, contents: &str, origin: &Path) -> Result<C, ConfigError>
    where
        C: DeserializeOwned,
    {
        let config = self
            .figment(contents)
            .extract()
            .map_err(|source| ConfigError::Parse {
                path: origin.to_path_buf(),
                source: Box::new(source),
            })?;
        debug!(origin = %origin.display(), "document parsed");
        Ok(config)
    }
}

fn validate<C: Configuration>(config: C, origin: &Path) -> Result<C, ConfigError> {
    Validator::validate(config).map_err(|source| ConfigError::Invalid {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read, deserialize and validate the document at `path` with default settings
pub fn load_and_validate<C>(path: impl AsRef<Path>) -> Result<C, ConfigError>
where
    C: Configuration + DeserializeOwned,
{
    ConfigLoader::new().load(path)
}
