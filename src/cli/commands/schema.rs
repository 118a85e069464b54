//! Implementation of the `yamlcfg schema` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::render_fields;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Configuration, FieldSummary, ServiceConfig};

#[derive(Debug, Serialize)]
pub struct SchemaOutput {
    pub owner: String,
    pub fields: Vec<FieldSummary>,
}

impl SchemaOutput {
    pub fn of<C: Configuration>() -> Self {
        let schema = C::schema();
        Self {
            owner: schema.owner().to_string(),
            fields: schema.fields().iter().map(|field| field.summary()).collect(),
        }
    }
}

impl CommandOutput for SchemaOutput {
    fn to_human(&self) -> String {
        render_fields(&self.owner, &self.fields)
    }
}

/// Print the reference schema.
pub fn execute(json_mode: bool) -> Result<()> {
    output(&SchemaOutput::of::<ServiceConfig>(), json_mode)?;
    Ok(())
}
