//! Embeds build metadata read by `src/version.rs`.

use std::process::Command;

/// First line of a tool's stdout, if it ran successfully
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    text.lines().next().map(|line| line.trim().to_string())
}

fn main() {
    let commit = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let date = command_output("date", &["+%Y-%m-%d"]);
    // "rustc 1.80.0 (051478957 2024-07-21)" -> "1.80.0"
    let rustc = command_output("rustc", &["--version"]).and_then(|line| {
        line.split_whitespace().nth(1).map(str::to_string)
    });

    for (key, value) in [
        ("LAYERMAP_COMMIT_SHA", commit),
        ("LAYERMAP_BUILD_DATE", date),
        ("LAYERMAP_RUSTC_VERSION", rustc),
    ] {
        println!(
            "cargo:rustc-env={}={}",
            key,
            value.unwrap_or_else(|| "unknown".to_string())
        );
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
}
