//! Naming and shape heuristics for component detection.
//!
//! All tables are static. Matching is plain substring/suffix matching; the
//! tables are reproduced as-is, including their known false positives (a
//! field typed `AuthToken` counts as a dependency).

use crate::model::ComponentKind;

/// Suffixes of transport payload types.
const TRANSPORT_SUFFIXES: &[&str] = &["Request", "Response"];

/// Suffixes of configuration records.
const CONFIG_SUFFIXES: &[&str] = &["Config", "Conf"];

/// Suffixes of generic value / DTO types.
const VALUE_SUFFIXES: &[&str] = &[
    "Options",
    "Params",
    "Data",
    "Info",
    "Result",
    "Error",
    "Context",
    "Structure",
    "Content",
    "Template",
    "Section",
    "Message",
    "Event",
    "Item",
    "Entry",
];

/// Lowercase fragments that make a field type look like a collaborator.
const DEPENDENCY_MARKERS: &[&str] = &[
    "service",
    "store",
    "repo",
    "repository",
    "client",
    "api",
    "adapter",
    "provider",
    "auth",
    "logger",
    "db",
    "database",
    "generative",
    "generator",
];

const HANDLER_PATH_MARKERS: &[&str] = &["transport", "http", "handler", "api"];
const HANDLER_NAME_MARKERS: &[&str] = &["server", "handler"];

const REPOSITORY_PATH_MARKERS: &[&str] = &["persistence", "repository", "repo", "store"];
const REPOSITORY_NAME_SUFFIXES: &[&str] = &["Repository", "Store"];

const ADAPTER_PATH_MARKERS: &[&str] = &["adapter", "client", "external", "integration"];

const SERVICE_PATH_MARKERS: &[&str] = &["service", "usecase"];

/// Dependency count at which an unconventionally named struct is a service.
const FALLBACK_SERVICE_MIN_DEPS: usize = 2;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn ends_with_any(haystack: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| haystack.ends_with(suffix))
}

/// Whether a struct name denotes noise rather than an architectural unit.
///
/// Mocks, transport payloads, configuration, value types, very short names
/// (except `DB`) and unexported names are noise.
pub fn is_noise(name: &str) -> bool {
    let lower = name.to_lowercase();

    if lower.contains("mock") {
        return true;
    }

    if ends_with_any(name, TRANSPORT_SUFFIXES) {
        return true;
    }

    if ends_with_any(name, CONFIG_SUFFIXES) || lower.contains("config") {
        return true;
    }

    if ends_with_any(name, VALUE_SUFFIXES) {
        return true;
    }

    if name.len() <= 2 && name != "DB" {
        return true;
    }

    // Unexported
    name.as_bytes()
        .first()
        .map_or(true, |first| first.is_ascii_lowercase())
}

/// Whether a field type name looks like a collaborator by name alone
pub fn looks_like_dependency(type_name: &str) -> bool {
    contains_any(&type_name.to_lowercase(), DEPENDENCY_MARKERS)
}

/// Classify a struct into a layer.
///
/// `package_dir` is the file's directory relative to the repository root.
/// Rules are evaluated in priority order; the first match wins:
/// 1. Handler (path or name convention, needs a dependency)
/// 2. Repository (path or name convention, not under a config path)
/// 3. Adapter (path convention)
/// 4. Service (path or name convention, needs a dependency)
/// 5. Service by shape: two or more dependencies
///
/// `None` means the struct is not an architectural component.
pub fn classify(package_dir: &str, name: &str, dependency_count: usize) -> Option<ComponentKind> {
    let path = package_dir.to_lowercase();
    let lower_name = name.to_lowercase();
    let has_deps = dependency_count > 0;

    if (contains_any(&path, HANDLER_PATH_MARKERS) || contains_any(&lower_name, HANDLER_NAME_MARKERS))
        && has_deps
    {
        return Some(ComponentKind::Handler);
    }

    if !path.contains("config")
        && (contains_any(&path, REPOSITORY_PATH_MARKERS)
            || name == "DB"
            || ends_with_any(name, REPOSITORY_NAME_SUFFIXES))
    {
        return Some(ComponentKind::Repository);
    }

    if contains_any(&path, ADAPTER_PATH_MARKERS) {
        return Some(ComponentKind::Adapter);
    }

    if (contains_any(&path, SERVICE_PATH_MARKERS) || name.ends_with("Service")) && has_deps {
        return Some(ComponentKind::Service);
    }

    if dependency_count >= FALLBACK_SERVICE_MIN_DEPS {
        return Some(ComponentKind::Service);
    }

    None
}
