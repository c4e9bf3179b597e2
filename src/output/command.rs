//! JSON output types for CLI commands
//!
//! Every JSON response is wrapped in a [`JsonResponse`] envelope carrying a
//! schema version and an execution id so consumers can parse output from
//! different releases and correlate runs.

use serde::Serialize;

use crate::model::Architecture;
use crate::stats::ArchitectureStats;

/// Current JSON output schema version
pub const LAYERMAP_JSON_SCHEMA_VERSION: &str = "1.0.0";

/// Wrapper for all JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct JsonResponse<T> {
    /// Schema version for parsing stability
    pub schema_version: String,
    /// Unique execution ID for this run
    pub execution_id: String,
    /// Tool name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// RFC 3339 timestamp of the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Response data
    pub data: T,
}

impl<T> JsonResponse<T> {
    /// Create a new JSON response
    pub fn new(data: T, execution_id: &str) -> Self {
        JsonResponse {
            schema_version: LAYERMAP_JSON_SCHEMA_VERSION.to_string(),
            execution_id: execution_id.to_string(),
            tool: Some("layermap".to_string()),
            timestamp: Some(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
            data,
        }
    }
}

/// Response for `analyze`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse<'a> {
    /// Analyzed root as given on the command line
    pub root: String,
    pub architecture: &'a Architecture,
    pub stats: &'a ArchitectureStats,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

impl OutputFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Some(OutputFormat::Human),
            "json" => Some(OutputFormat::Json),
            "pretty" => Some(OutputFormat::Pretty),
            _ => None,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Pretty)
    }
}

/// Generate a unique execution ID for this run
///
/// Uses timestamp + process ID for uniqueness.
pub fn generate_execution_id() -> String {
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let pid = process::id();

    format!("{:x}-{:x}", timestamp, pid)
}

/// Serialize a response for the given format
pub fn render_json<T: Serialize>(data: &T, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(data),
        OutputFormat::Json | OutputFormat::Human => serde_json::to_string(data),
    }
}

/// Output JSON to stdout
pub fn output_json<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    let json = render_json(data, format)?;
    println!("{}", json);
    Ok(())
}
