//! Dependency resolution (post-pass).
//!
//! Runs once the full component list is known: a field type only becomes an
//! edge if some detected component carries that name.

use std::collections::HashSet;

use crate::model::{Architecture, Component};

/// Keep only dependencies that name a detected component, preserving order,
/// and derive the dependency index.
///
/// Resolution is by name only. When two packages declare components with the
/// same name, a dependency on that name cannot tell them apart.
pub fn resolve_architecture(mut components: Vec<Component>) -> Architecture {
    let known: HashSet<String> = components
        .iter()
        .map(|component| component.name.clone())
        .collect();

    for component in &mut components {
        component.dependencies.retain(|dep| known.contains(dep));
    }

    Architecture::from_resolved(components)
}
