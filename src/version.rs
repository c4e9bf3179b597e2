//! Version and build information

/// Full version string including build metadata
///
/// Format: "layermap {version} ({commit} {date}) rustc {rustc_version}"
pub fn version() -> String {
    format!(
        "layermap {} ({} {}) rustc {}",
        package_version(),
        build_commit(),
        build_date(),
        rustc_version()
    )
}

pub fn package_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Short commit SHA, or "unknown" outside a git checkout
pub fn build_commit() -> &'static str {
    option_env!("LAYERMAP_COMMIT_SHA").unwrap_or("unknown")
}

pub fn build_date() -> &'static str {
    option_env!("LAYERMAP_BUILD_DATE").unwrap_or("unknown")
}

pub fn rustc_version() -> &'static str {
    option_env!("LAYERMAP_RUSTC_VERSION").unwrap_or("unknown")
}
