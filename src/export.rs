//! Architecture export
//!
//! Serializes an [`Architecture`] to JSON or to a Graphviz DOT diagram.

use std::fmt::Write as _;

use crate::model::{Architecture, ComponentKind};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The architecture as a JSON object
    Json,
    /// Graphviz DOT, one cluster per layer
    Dot,
}

impl ExportFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "dot" | "graphviz" => Some(ExportFormat::Dot),
            _ => None,
        }
    }
}

/// Configuration for architecture export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output format
    pub format: ExportFormat,
    /// Use minified JSON (no pretty-printing)
    pub minify: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            format: ExportFormat::Json,
            minify: false,
        }
    }
}

impl ExportConfig {
    /// Create a new export config with the specified format
    pub fn new(format: ExportFormat) -> Self {
        ExportConfig {
            format,
            ..Default::default()
        }
    }

    /// Set whether to minify JSON output
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }
}

/// Export the architecture in the configured format
pub fn export_architecture(arch: &Architecture, config: &ExportConfig) -> serde_json::Result<String> {
    match config.format {
        ExportFormat::Json => export_json(arch, config.minify),
        ExportFormat::Dot => Ok(export_dot(arch)),
    }
}

/// Export to JSON: `components` in discovery order plus `dependency_index`
pub fn export_json(arch: &Architecture, minify: bool) -> serde_json::Result<String> {
    if minify {
        serde_json::to_string(arch)
    } else {
        serde_json::to_string_pretty(arch)
    }
}

/// Export to Graphviz DOT.
///
/// Nodes are grouped into `cluster_<kind>` subgraphs in layer order; empty
/// layers produce no cluster. Every resolved dependency becomes one edge.
pub fn export_dot(arch: &Architecture) -> String {
    let mut dot = String::new();

    dot.push_str("digraph Architecture {\n");
    dot.push_str("  rankdir=TB;\n");
    dot.push_str("  label=\"Architecture Diagram\";\n");
    dot.push_str("  labelloc=t;\n");
    dot.push_str("  fontsize=20;\n");
    dot.push_str("  node [shape=box, style=\"rounded,filled\", fontname=\"Helvetica\"];\n");
    dot.push_str("  edge [fontname=\"Helvetica\"];\n");

    for kind in ComponentKind::LAYER_ORDER {
        let mut members = arch.components_of_kind(kind).peekable();
        if members.peek().is_none() {
            continue;
        }

        let _ = writeln!(dot);
        let _ = writeln!(dot, "  subgraph cluster_{} {{", kind.as_str());
        let _ = writeln!(dot, "    label=\"{}\";", kind.plural());
        dot.push_str("    style=dashed;\n");
        dot.push_str("    color=\"#999999\";\n");

        for component in members {
            let _ = writeln!(
                dot,
                "    {} [label=\"{}\\n({})\", fillcolor=\"{}\", fontcolor=\"white\"];",
                node_id(&component.name),
                escape_label(&component.name),
                escape_label(&component.package),
                kind.color()
            );
        }

        dot.push_str("  }\n");
    }

    let mut wrote_edge_header = false;
    for component in arch.components() {
        for dep in &component.dependencies {
            if !wrote_edge_header {
                dot.push('\n');
                wrote_edge_header = true;
            }
            let _ = writeln!(
                dot,
                "  {} -> {} [color=\"#666666\"];",
                node_id(&component.name),
                node_id(dep)
            );
        }
    }

    dot.push_str("}\n");
    dot
}

/// Quoted DOT node identifier
fn node_id(name: &str) -> String {
    format!("\"{}\"", escape_label(&name.replace('-', "_")))
}

/// Escape a string for use inside a quoted DOT attribute
fn escape_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::resolve::resolve_architecture;
    use crate::model::Component;

    fn sample() -> Architecture {
        resolve_architecture(vec![
            Component::new(
                "UserHandler",
                ComponentKind::Handler,
                "http",
                "internal/http/user.go",
                vec!["UserService".to_string()],
            ),
            Component::new(
                "UserService",
                ComponentKind::Service,
                "service",
                "internal/service/user.go",
                vec!["UserRepository".to_string(), "Mailer".to_string()],
            ),
            Component::new(
                "UserRepository",
                ComponentKind::Repository,
                "repository",
                "internal/repository/user.go",
                vec![],
            ),
        ])
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!(ExportFormat::from_str("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_str("DOT"), Some(ExportFormat::Dot));
        assert_eq!(ExportFormat::from_str("csv"), None);
    }

    #[test]
    fn test_dot_has_one_edge_per_dependency() {
        let dot = export_dot(&sample());

        assert!(dot.starts_with("digraph Architecture {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("rankdir=TB;"));
        assert_eq!(dot.matches(" -> ").count(), 2);
        assert!(dot.contains("\"UserHandler\" -> \"UserService\" [color=\"#666666\"];"));
        assert!(dot.contains("\"UserService\" -> \"UserRepository\""));
        assert!(!dot.contains("Mailer"));
    }

    #[test]
    fn test_dot_clusters_follow_layer_order() {
        let dot = export_dot(&sample());

        assert!(!dot.contains("cluster_adapter"));
        let handler = dot.find("subgraph cluster_handler").unwrap();
        let service = dot.find("subgraph cluster_service").unwrap();
        let repository = dot.find("subgraph cluster_repository").unwrap();
        assert!(handler < service && service < repository);

        assert!(dot.contains(
            "\"UserRepository\" [label=\"UserRepository\\n(repository)\", fillcolor=\"#FFB347\""
        ));
    }

    #[test]
    fn test_node_id_is_sanitized_and_quoted() {
        assert_eq!(node_id("user-service"), "\"user_service\"");
        assert_eq!(node_id("Plain"), "\"Plain\"");
    }

    #[test]
    fn test_json_export() {
        let arch = sample();
        let pretty = export_json(&arch, false).unwrap();
        let minified = export_json(&arch, true).unwrap();

        assert!(pretty.contains('\n'));
        assert!(!minified.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&minified).unwrap();
        assert_eq!(value["components"].as_array().unwrap().len(), 3);
        assert_eq!(value["components"][1]["dependencies"][0], "UserRepository");
        assert_eq!(value["dependency_index"]["UserHandler"][0], "UserService");
    }

    #[test]
    fn test_export_architecture_dispatch() {
        let arch = sample();
        let dot = export_architecture(&arch, &ExportConfig::new(ExportFormat::Dot)).unwrap();
        assert!(dot.starts_with("digraph"));

        let json = export_architecture(&arch, &ExportConfig::default().with_minify(true)).unwrap();
        assert!(json.starts_with('{'));
    }

    #[test]
    fn test_empty_architecture_dot() {
        let dot = export_dot(&Architecture::default());
        assert!(!dot.contains("subgraph"));
        assert!(!dot.contains(" -> "));
    }
}
