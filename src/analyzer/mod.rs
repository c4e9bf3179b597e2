//! Two-pass architecture analysis.
//!
//! Pass one builds the [`InterfaceCatalog`] from every candidate file. Pass
//! two detects components using that complete catalog. The resolver then
//! narrows dependencies to names of detected components.
//!
//! Files are parsed in parallel within a pass; results are gathered in
//! enumeration order, so output order equals walk order.

pub mod catalog;
pub mod detect;
pub mod heuristics;
pub mod resolve;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::ingest::{extract_go_file, pool::with_go_parser, GoFile};
use crate::model::Architecture;
use crate::source::{enumerate_sources, SourceFile, SourceFilter};

pub use catalog::{build_interface_catalog, InterfaceCatalog};
pub use detect::detect_components;
pub use resolve::resolve_architecture;

/// Errors that abort an analysis run.
///
/// Per-file read and parse failures are not errors: the file is skipped.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The source tree could not be walked
    #[error("cannot enumerate source tree at {path}: {source}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An exclude pattern is not a valid glob
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The Go grammar could not be loaded into a parser
    #[error("failed to load Go grammar: {0}")]
    Parser(#[from] tree_sitter::LanguageError),
}

/// Analyze a Go repository with the default source filter.
pub fn analyze(root: impl AsRef<Path>) -> Result<Architecture, AnalyzeError> {
    analyze_with_filter(root.as_ref(), &SourceFilter::default())
}

/// Analyze a Go repository, applying extra exclude rules during enumeration.
///
/// # Behavior
/// 1. Enumerate candidate files
/// 2. Build the interface catalog (pass one, complete before pass two)
/// 3. Detect components (pass two)
/// 4. Resolve dependencies against detected component names
///
/// An empty result is a valid, empty [`Architecture`].
pub fn analyze_with_filter(root: &Path, filter: &SourceFilter) -> Result<Architecture, AnalyzeError> {
    let files = enumerate_sources(root, filter)?;

    let catalog = build_interface_catalog(&files)?;
    tracing::debug!(files = files.len(), interfaces = catalog.len(), "interface catalog built");

    let components = detect_components(&files, &catalog)?;
    tracing::debug!(candidates = components.len(), "components detected");

    Ok(resolve_architecture(components))
}

/// Read and parse one candidate file.
///
/// `Ok(None)` when the file cannot be read or is not valid Go.
pub(crate) fn parse_source(file: &SourceFile) -> Result<Option<GoFile>, AnalyzeError> {
    let source = match std::fs::read(&file.path) {
        Ok(source) => source,
        Err(_) => return Ok(None),
    };
    Ok(with_go_parser(|parser| extract_go_file(parser, &source))?)
}

/// Parse every file in parallel and map each result, preserving input order.
pub(crate) fn map_parsed<T, F>(files: &[SourceFile], f: F) -> Result<Vec<T>, AnalyzeError>
where
    T: Send,
    F: Fn(&SourceFile, GoFile) -> T + Sync,
{
    let parsed: Vec<Option<T>> = files
        .par_iter()
        .map(|file| -> Result<Option<T>, AnalyzeError> {
            Ok(parse_source(file)?.map(|go| f(file, go)))
        })
        .collect::<Result<_, _>>()?;
    Ok(parsed.into_iter().flatten().collect())
}
