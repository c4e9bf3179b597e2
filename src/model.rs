//! Architecture model produced by an analysis run
//!
//! Build-once, read-only values: an [`Architecture`] is only created by the
//! graph resolver, and renderers receive it by shared reference.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Architectural layer a component is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Transport layer: HTTP/gRPC handlers, servers
    Handler,
    /// Business logic
    Service,
    /// Data access
    Repository,
    /// External integrations
    Adapter,
}

impl ComponentKind {
    /// All kinds in layer order (top of the stack first)
    pub const LAYER_ORDER: [ComponentKind; 4] = [
        ComponentKind::Handler,
        ComponentKind::Service,
        ComponentKind::Adapter,
        ComponentKind::Repository,
    ];

    /// Normalized key used in JSON and DOT cluster ids
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Handler => "handler",
            ComponentKind::Service => "service",
            ComponentKind::Repository => "repository",
            ComponentKind::Adapter => "adapter",
        }
    }

    /// Short plural label ("Handlers")
    pub fn plural(&self) -> &'static str {
        match self {
            ComponentKind::Handler => "Handlers",
            ComponentKind::Service => "Services",
            ComponentKind::Repository => "Repositories",
            ComponentKind::Adapter => "Adapters",
        }
    }

    /// Label describing the layer's role ("Handlers (Transport)")
    pub fn layer_label(&self) -> &'static str {
        match self {
            ComponentKind::Handler => "Handlers (Transport)",
            ComponentKind::Service => "Services (Business Logic)",
            ComponentKind::Adapter => "Adapters (External)",
            ComponentKind::Repository => "Repositories (Data)",
        }
    }

    /// Fill colour used by diagram exports
    pub fn color(&self) -> &'static str {
        match self {
            ComponentKind::Handler => "#4A90D9",
            ComponentKind::Service => "#50C878",
            ComponentKind::Repository => "#FFB347",
            ComponentKind::Adapter => "#9B59B6",
        }
    }

    /// Parse from the normalized key
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "handler" => Some(ComponentKind::Handler),
            "service" => Some(ComponentKind::Service),
            "repository" => Some(ComponentKind::Repository),
            "adapter" => Some(ComponentKind::Adapter),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected architectural unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Type name as declared; not unique across packages
    pub name: String,
    pub kind: ComponentKind,
    /// Short package name from the `package` clause
    pub package: String,
    /// Path relative to the analyzed root, `/`-separated
    pub source_path: String,
    /// Ordered, duplicate-free dependency names
    pub dependencies: Vec<String>,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        package: impl Into<String>,
        source_path: impl Into<String>,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            package: package.into(),
            source_path: source_path.into(),
            dependencies,
        }
    }
}

/// Result of one analysis run
///
/// `dependency_index` is derived from `components` and rebuilt together with
/// it; there is no way to edit one without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Architecture {
    components: Vec<Component>,
    dependency_index: BTreeMap<String, Vec<String>>,
}

impl Architecture {
    /// Wrap already-resolved components and derive the dependency index.
    ///
    /// With duplicate names, the last component in discovery order owns the
    /// index entry.
    pub(crate) fn from_resolved(components: Vec<Component>) -> Self {
        let dependency_index = components
            .iter()
            .map(|component| (component.name.clone(), component.dependencies.clone()))
            .collect();
        Self {
            components,
            dependency_index,
        }
    }

    /// Components in discovery order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component name → resolved dependency names
    pub fn dependency_index(&self) -> &BTreeMap<String, Vec<String>> {
        &self.dependency_index
    }

    /// Resolved dependencies recorded for `name`
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.dependency_index.get(name).map(Vec::as_slice)
    }

    /// Names of components that depend on `name`, in discovery order
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.components
            .iter()
            .filter(|component| component.dependencies.iter().any(|dep| dep == name))
            .map(|component| component.name.as_str())
            .collect()
    }

    /// Components of one layer, in discovery order
    pub fn components_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(move |component| component.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
