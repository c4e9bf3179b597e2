//! layermap: deterministic service-architecture extraction for Go codebases
//!
//! layermap walks a Go repository, finds the structs that make up its
//! architecture (handlers, services, repositories, adapters), infers which of
//! them depend on which, and returns the result as a typed graph.
//!
//! # Pipeline
//!
//! 1. [`source::enumerate_sources`] lists candidate `.go` files in walk order,
//!    skipping vendored, generated-mock and test files.
//! 2. [`analyzer::catalog::build_interface_catalog`] records every interface
//!    type name declared anywhere in the tree.
//! 3. [`analyzer::detect::detect_components`] filters noise types, extracts
//!    field-typed dependencies and classifies each struct into a layer.
//! 4. [`analyzer::resolve::resolve_architecture`] prunes dependencies that do not
//!    name another detected component.
//!
//! No build metadata and no type checking are involved: classification relies
//! on naming conventions and structural shape only.
//!
//! # Example
//!
//! ```no_run
//! let arch = layermap::analyze("path/to/service")?;
//! for component in arch.components() {
//!     println!("{} ({})", component.name, component.kind);
//! }
//! # Ok::<(), layermap::AnalyzeError>(())
//! ```

pub mod analyzer;
pub mod export;
pub mod ingest;
pub mod model;
pub mod output;
pub mod source;
pub mod stats;

pub use analyzer::catalog::InterfaceCatalog;
pub use analyzer::{analyze, analyze_with_filter, AnalyzeError};
pub use export::{export_architecture, export_dot, export_json, ExportConfig, ExportFormat};
pub use ingest::{GoFile, GoParser, TypeDecl, TypeShape};
pub use model::{Architecture, Component, ComponentKind};
pub use output::{generate_execution_id, output_json, JsonResponse, OutputFormat};
pub use source::{enumerate_sources, SourceFile, SourceFilter};
pub use stats::{render_summary, ArchitectureStats};
