//! Analyze command implementation
//!
//! Runs the analysis pipeline and prints the layered summary or a JSON
//! envelope with the architecture and its statistics.

use anyhow::{Context, Result};
use layermap::output::{generate_execution_id, output_json, AnalyzeResponse, JsonResponse};
use layermap::{analyze_with_filter, render_summary, Architecture, ArchitectureStats, OutputFormat, SourceFilter};
use std::path::Path;

/// Analyze `root_path` and require at least one component.
///
/// Shared by `analyze` and `export`.
pub fn load_architecture(root_path: &Path, exclude: &[String]) -> Result<Architecture> {
    if !root_path.exists() {
        return Err(anyhow::anyhow!(
            "repository path does not exist: {}",
            root_path.display()
        ));
    }

    let filter = SourceFilter::new(exclude)?;
    let arch = analyze_with_filter(root_path, &filter)
        .with_context(|| format!("Failed to analyze {}", root_path.display()))?;

    if arch.is_empty() {
        return Err(anyhow::anyhow!(
            "no architectural components found in the repository"
        ));
    }

    tracing::info!(
        root = %root_path.display(),
        components = arch.len(),
        "analysis complete"
    );
    Ok(arch)
}

/// Run the analyze command
///
/// Usage: layermap analyze --root <DIR> [--exclude <GLOB>]... [--output <FORMAT>]
pub fn run_analyze(root_path: &Path, exclude: &[String], output_format: OutputFormat) -> Result<()> {
    let arch = load_architecture(root_path, exclude)?;
    let stats = ArchitectureStats::from_architecture(&arch);

    if output_format.is_json() {
        let exec_id = generate_execution_id();
        let response = AnalyzeResponse {
            root: root_path.to_string_lossy().to_string(),
            architecture: &arch,
            stats: &stats,
        };
        output_json(&JsonResponse::new(response, &exec_id), output_format)?;
    } else {
        print!("{}", render_summary(&arch, &stats));
    }

    Ok(())
}
