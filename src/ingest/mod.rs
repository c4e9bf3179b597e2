//! Go syntax ingestion using tree-sitter-go.
//!
//! Turns one Go source file into the facts the analyzer works on: the package
//! clause and every named type declaration with its shape.
//!
//! Pure function: Input (contents) → Output [`GoFile`].
//! No filesystem access. No global state.

pub mod pool;

use serde::{Deserialize, Serialize};

/// Shape of a named type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeShape {
    /// `struct { ... }` definition
    ///
    /// One entry per field declaration, in source order. Each entry is the
    /// bare type name the field resolves to, or `None` when the field type is
    /// not a plain, pointer or qualified name (slices, maps, func types, ...).
    Struct { field_types: Vec<Option<String>> },
    /// `interface { ... }` definition
    Interface,
    /// Anything else (named type over another type, func type, map, ...)
    Other,
}

/// A named type declared somewhere in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub shape: TypeShape,
}

/// Facts extracted from one Go source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoFile {
    /// Identifier from the `package` clause
    pub package: String,
    /// Type declarations in source order, including ones nested in function bodies
    pub types: Vec<TypeDecl>,
}

impl GoFile {
    /// Names of the interface types declared in this file
    pub fn interfaces(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .filter(|decl| decl.shape == TypeShape::Interface)
            .map(|decl| decl.name.as_str())
    }

    /// Struct declarations with their resolved field types
    pub fn structs(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.types.iter().filter_map(|decl| match &decl.shape {
            TypeShape::Struct { field_types } => Some((decl.name.as_str(), field_types.as_slice())),
            _ => None,
        })
    }
}

/// Owned parser for Go source code
///
/// Use [`pool::with_go_parser`] when parsing many files across threads.
pub struct GoParser {
    parser: tree_sitter::Parser,
}

impl GoParser {
    /// Create a new parser for Go source code
    pub fn new() -> Result<Self, tree_sitter::LanguageError> {
        Ok(Self {
            parser: new_go_parser()?,
        })
    }

    /// Parse one file; `None` if it is not syntactically valid Go
    pub fn parse(&mut self, source: &[u8]) -> Option<GoFile> {
        extract_go_file(&mut self.parser, source)
    }
}

/// Build a tree-sitter parser configured for the Go grammar
pub fn new_go_parser() -> Result<tree_sitter::Parser, tree_sitter::LanguageError> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&tree_sitter_go::language())?;
    Ok(parser)
}

/// Extract type facts from Go source using the given parser.
///
/// Returns `None` when the file does not parse cleanly: tree-sitter recovers
/// from syntax errors, so any error node (or a missing `package` clause)
/// marks the whole file as unparseable. Go source must be valid UTF-8, so
/// invalid bytes anywhere (comments included) reject the file too.
///
/// The grammar predates Go 1.24 generic type aliases
/// (`type Set[T comparable] = map[T]struct{}`); files using them produce an
/// error node and are skipped.
pub fn extract_go_file(parser: &mut tree_sitter::Parser, source: &[u8]) -> Option<GoFile> {
    std::str::from_utf8(source).ok()?;

    let tree = parser.parse(source, None)?;
    let root = tree.root_node();
    if root.has_error() {
        return None;
    }

    let package = package_name(&root, source)?;
    let mut types = Vec::new();
    walk_tree(&root, source, &mut types);

    Some(GoFile { package, types })
}

fn package_name(root: &tree_sitter::Node, source: &[u8]) -> Option<String> {
    let mut cursor = root.walk();
    let clause = root
        .children(&mut cursor)
        .find(|child| child.kind() == "package_clause")?;

    let mut clause_cursor = clause.walk();
    let ident = clause
        .named_children(&mut clause_cursor)
        .find(|child| child.kind() == "package_identifier")?;
    node_text(&ident, source)
}

/// Walk the tree recursively, collecting every type spec.
fn walk_tree(node: &tree_sitter::Node, source: &[u8], types: &mut Vec<TypeDecl>) {
    if matches!(node.kind(), "type_spec" | "type_alias") {
        if let Some(decl) = extract_type_decl(node, source) {
            types.push(decl);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk_tree(&child, source, types);
    }
}

fn extract_type_decl(node: &tree_sitter::Node, source: &[u8]) -> Option<TypeDecl> {
    let name = node_text(&node.child_by_field_name("name")?, source)?;
    let shape = match node.child_by_field_name("type") {
        Some(def) if def.kind() == "struct_type" => TypeShape::Struct {
            field_types: struct_field_types(&def, source),
        },
        Some(def) if def.kind() == "interface_type" => TypeShape::Interface,
        _ => TypeShape::Other,
    };
    Some(TypeDecl { name, shape })
}

fn struct_field_types(struct_node: &tree_sitter::Node, source: &[u8]) -> Vec<Option<String>> {
    let mut field_types = Vec::new();
    let mut cursor = struct_node.walk();
    for list in struct_node
        .children(&mut cursor)
        .filter(|child| child.kind() == "field_declaration_list")
    {
        let mut list_cursor = list.walk();
        for field in list
            .named_children(&mut list_cursor)
            .filter(|child| child.kind() == "field_declaration")
        {
            let resolved = field
                .child_by_field_name("type")
                .and_then(|ty| resolve_type_name(&ty, source));
            field_types.push(resolved);
        }
    }
    field_types
}

/// Reduce a type expression to a bare identifier.
///
/// - `Foo` → `Foo`
/// - `*Foo`, `**Foo` → `Foo`
/// - `pkg.Foo`, `*pkg.Foo` → `Foo`
/// - everything else (`[]Foo`, `map[K]V`, `Foo[T]`, `(Foo)`, literals) → `None`
pub fn resolve_type_name(node: &tree_sitter::Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "type_identifier" => node_text(node, source),
        "pointer_type" => resolve_type_name(&node.named_child(0)?, source),
        "qualified_type" => node_text(&node.child_by_field_name("name")?, source),
        _ => None,
    }
}

fn node_text(node: &tree_sitter::Node, source: &[u8]) -> Option<String> {
    node.utf8_text(source).ok().map(|text| text.to_string())
}
