//! Component detection (pass two).
//!
//! For every struct declaration: drop noise, extract field-typed
//! dependencies, then classify into a layer. Dependencies are unresolved at
//! this point; they may name types that are not components.

use std::collections::HashSet;

use super::heuristics::{classify, is_noise, looks_like_dependency};
use super::{map_parsed, AnalyzeError, InterfaceCatalog};
use crate::ingest::GoFile;
use crate::model::Component;
use crate::source::SourceFile;

/// Detect components in all candidate files, in walk order.
///
/// The catalog must be complete: detection of any file depends on
/// interfaces declared in every other file.
pub fn detect_components(
    files: &[SourceFile],
    catalog: &InterfaceCatalog,
) -> Result<Vec<Component>, AnalyzeError> {
    let per_file = map_parsed(files, |file, go| components_in_file(file, &go, catalog))?;
    Ok(per_file.into_iter().flatten().collect())
}

/// Detect components declared in one parsed file, in source order
pub fn components_in_file(
    file: &SourceFile,
    go: &GoFile,
    catalog: &InterfaceCatalog,
) -> Vec<Component> {
    go.structs()
        .filter(|(name, _)| !is_noise(name))
        .filter_map(|(name, field_types)| {
            let dependencies = extract_dependencies(field_types, catalog);
            let kind = classify(&file.package_dir, name, dependencies.len())?;
            Some(Component::new(
                name,
                kind,
                go.package.as_str(),
                file.relative_path.as_str(),
                dependencies,
            ))
        })
        .collect()
}

/// Candidate dependency names from a struct's field types.
///
/// A field counts when its type is a known interface or its name looks like
/// a collaborator. First occurrence wins; unresolvable field types are skipped.
pub fn extract_dependencies(field_types: &[Option<String>], catalog: &InterfaceCatalog) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dependencies = Vec::new();

    for type_name in field_types.iter().flatten() {
        if seen.contains(type_name.as_str()) {
            continue;
        }
        if catalog.contains(type_name) || looks_like_dependency(type_name) {
            seen.insert(type_name.as_str());
            dependencies.push(type_name.clone());
        }
    }

    dependencies
}
