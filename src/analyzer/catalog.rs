//! Interface catalog (pass one).
//!
//! Records the name of every interface type declared anywhere in the tree.
//! A struct field typed with one of these names is treated as a collaborator.

use std::collections::HashSet;

use super::{map_parsed, AnalyzeError};
use crate::ingest::GoFile;
use crate::source::SourceFile;

/// Set of interface type names discovered in pass one
///
/// Built once per analysis and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceCatalog {
    names: HashSet<String>,
}

impl InterfaceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every interface declared in a parsed file
    pub fn record_file(&mut self, file: &GoFile) {
        self.names
            .extend(file.interfaces().map(|name| name.to_string()));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for InterfaceCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Build the catalog from all candidate files.
///
/// Unreadable or unparseable files contribute nothing.
pub fn build_interface_catalog(files: &[SourceFile]) -> Result<InterfaceCatalog, AnalyzeError> {
    let per_file = map_parsed(files, |_, go| go)?;

    let mut catalog = InterfaceCatalog::new();
    for go in &per_file {
        catalog.record_file(go);
    }
    Ok(catalog)
}
