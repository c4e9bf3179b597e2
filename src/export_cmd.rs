//! Export command implementation
//!
//! Exports the analyzed architecture to JSON or DOT.

use anyhow::{Context, Result};
use layermap::{export_architecture, ExportConfig, ExportFormat};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::analyze_cmd::load_architecture;

/// Run the export command
///
/// Output goes to stdout by default, or to a file if --out is specified.
pub fn run_export(
    root_path: &Path,
    exclude: &[String],
    format: ExportFormat,
    output: Option<PathBuf>,
    minify: bool,
) -> Result<()> {
    let arch = load_architecture(root_path, exclude)?;
    let config = ExportConfig::new(format).with_minify(minify);
    let rendered = export_architecture(&arch, &config)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered.as_bytes())
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            tracing::info!(path = %path.display(), "export written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
