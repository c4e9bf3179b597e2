//! Summary statistics and the human-readable architecture summary

use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write as _;

use crate::model::{Architecture, ComponentKind};

/// Component count for one layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub kind: ComponentKind,
    pub count: usize,
}

/// Aggregate figures over one architecture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitectureStats {
    pub total_components: usize,
    /// Sum of resolved dependency edges
    pub total_dependencies: usize,
    /// Per-layer counts in layer order, zeros included
    pub components_by_kind: Vec<KindCount>,
    pub average_dependencies: f64,
    pub max_dependencies: usize,
    /// First component (in discovery order) reaching `max_dependencies`
    pub most_connected: Option<String>,
    /// Distinct package names
    pub package_count: usize,
}

impl ArchitectureStats {
    pub fn from_architecture(arch: &Architecture) -> Self {
        let components = arch.components();

        let components_by_kind = ComponentKind::LAYER_ORDER
            .iter()
            .map(|&kind| KindCount {
                kind,
                count: arch.components_of_kind(kind).count(),
            })
            .collect();

        let mut total_dependencies = 0;
        let mut max_dependencies = 0;
        let mut most_connected = None;
        for component in components {
            let deps = component.dependencies.len();
            total_dependencies += deps;
            if deps > max_dependencies {
                max_dependencies = deps;
                most_connected = Some(component.name.clone());
            }
        }

        let package_count = components
            .iter()
            .map(|component| component.package.as_str())
            .collect::<HashSet<_>>()
            .len();

        let average_dependencies = if components.is_empty() {
            0.0
        } else {
            total_dependencies as f64 / components.len() as f64
        };

        Self {
            total_components: components.len(),
            total_dependencies,
            components_by_kind,
            average_dependencies,
            max_dependencies,
            most_connected,
            package_count,
        }
    }

    /// Count for one layer
    pub fn count_of(&self, kind: ComponentKind) -> usize {
        self.components_by_kind
            .iter()
            .find(|entry| entry.kind == kind)
            .map_or(0, |entry| entry.count)
    }
}

/// Render the human-readable summary.
///
/// Layer counts are listed in layer order (empty layers omitted), followed by
/// the dependency connection count and each component with its edges.
pub fn render_summary(arch: &Architecture, stats: &ArchitectureStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Components found: {}", stats.total_components);
    for entry in &stats.components_by_kind {
        if entry.count > 0 {
            let _ = writeln!(out, "  - {}: {}", entry.kind.layer_label(), entry.count);
        }
    }

    if stats.total_dependencies > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Dependencies: {} connections", stats.total_dependencies);
    }

    for kind in ComponentKind::LAYER_ORDER {
        if stats.count_of(kind) == 0 {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", kind.layer_label());
        for component in arch.components_of_kind(kind) {
            let _ = writeln!(
                out,
                "  {} ({}) {}",
                component.name, component.package, component.source_path
            );
            for dep in &component.dependencies {
                let _ = writeln!(out, "    -> {}", dep);
            }
        }
    }

    out
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
                vec!["UserRepository".to_string(), "AuditStore".to_string()],
            ),
            Component::new(
                "UserRepository",
                ComponentKind::Repository,
                "repository",
                "internal/repository/user.go",
                vec![],
            ),
            Component::new(
                "AuditStore",
                ComponentKind::Repository,
                "repository",
                "internal/repository/audit.go",
                vec![],
            ),
        ])
    }

    #[test]
    fn test_stats_figures() {
        let stats = ArchitectureStats::from_architecture(&sample());

        assert_eq!(stats.total_components, 4);
        assert_eq!(stats.total_dependencies, 3);
        assert_eq!(stats.max_dependencies, 2);
        assert_eq!(stats.most_connected.as_deref(), Some("UserService"));
        assert_eq!(stats.package_count, 3);
        assert!((stats.average_dependencies - 0.75).abs() < f64::EPSILON);
        assert_eq!(stats.count_of(ComponentKind::Repository), 2);
        assert_eq!(stats.count_of(ComponentKind::Adapter), 0);
        assert_eq!(stats.components_by_kind.len(), 4);
        assert_eq!(stats.components_by_kind[0].kind, ComponentKind::Handler);
    }

    #[test]
    fn test_empty_stats() {
        let stats = ArchitectureStats::from_architecture(&Architecture::default());
        assert_eq!(stats.total_components, 0);
        assert_eq!(stats.average_dependencies, 0.0);
        assert_eq!(stats.most_connected, None);
        assert_eq!(stats.package_count, 0);
    }

    #[test]
    fn test_summary_lists_layers_in_order() {
        let arch = sample();
        let stats = ArchitectureStats::from_architecture(&arch);
        let summary = render_summary(&arch, &stats);

        assert!(summary.starts_with("Components found: 4\n"));
        assert!(summary.contains("  - Handlers (Transport): 1\n"));
        assert!(summary.contains("  - Repositories (Data): 2\n"));
        assert!(!summary.contains("Adapters (External)"));
        assert!(summary.contains("Dependencies: 3 connections"));
        assert!(summary.contains("  UserService (service) internal/service/user.go\n    -> UserRepository\n"));

        let handlers = summary.find("\nHandlers (Transport)\n").unwrap();
        let services = summary.find("\nServices (Business Logic)\n").unwrap();
        let repos = summary.find("\nRepositories (Data)\n").unwrap();
        assert!(handlers < services && services < repos);
    }
}
