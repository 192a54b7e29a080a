//! Graph data set export.
//!
//! Writes the environment parameters and the assembled graph as one data
//! document for the external templating step that produces the final graph
//! file. JSON is the default; `.yaml`/`.yml` paths get YAML.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::EnvironmentConfig;
use crate::graph::GraphModel;

/// Document handed to the template
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub environment: &'a EnvironmentConfig,
    pub graph: &'a GraphModel,
}

/// Serialization format of the exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Serialize the document to a string
pub fn render_document(document: &ExportDocument<'_>, format: ExportFormat) -> Result<String> {
    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(document)
            .wrap_err("Failed to serialize graph document to JSON")?,
        ExportFormat::Yaml => serde_yaml::to_string(document)
            .wrap_err("Failed to serialize graph document to YAML")?,
    };
    Ok(content)
}

/// Write the document to `output_path`, creating parent directories
pub fn write_document(output_path: &Path, document: &ExportDocument<'_>) -> Result<()> {
    let format = ExportFormat::from_path(output_path);
    let content = render_document(document, format)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create output directory '{}'", parent.display())
            })?;
        }
    }

    fs::write(output_path, content)
        .wrap_err_with(|| format!("Failed to write graph document '{}'", output_path.display()))?;

    info!(
        "Wrote {} nodes and {} edges to {:?}",
        document.graph.nodes.len(),
        document.graph.edges.len(),
        output_path
    );
    Ok(())
}
