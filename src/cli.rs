//! CLI argument parsing for layermap
//!
//! Defines the Command enum and parse_args() for all CLI commands.

use anyhow::Result;
use layermap::{ExportFormat, OutputFormat};
use std::path::PathBuf;

pub fn print_usage() {
    eprintln!("layermap - Service architecture extraction for Go codebases");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  layermap <command> [arguments]");
    eprintln!("  layermap --help");
    eprintln!("  layermap --version");
    eprintln!();
    eprintln!("  layermap analyze --root <DIR> [--exclude <GLOB>]... [--output human|json|pretty]");
    eprintln!(
        "  layermap export --root <DIR> [--format json|dot] [--out <PATH>] [--minify] [--exclude <GLOB>]..."
    );
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  analyze   Detect components and print a layered summary");
    eprintln!("  export    Export the architecture as JSON or Graphviz DOT");
    eprintln!();
    eprintln!("Analyze arguments:");
    eprintln!("  --root <DIR>        Repository root to analyze");
    eprintln!("  --exclude <GLOB>    Skip files matching a root-relative glob (repeatable)");
    eprintln!("  --output <FORMAT>   Output format: human (default), json (compact), or pretty (formatted)");
    eprintln!();
    eprintln!("Export arguments:");
    eprintln!("  --root <DIR>        Repository root to analyze");
    eprintln!("  --format <FORMAT>   Export format: json (default) or dot");
    eprintln!("  --out <PATH>        Write to file instead of stdout");
    eprintln!("  --minify            Use compact JSON (no pretty-printing)");
    eprintln!("  --exclude <GLOB>    Skip files matching a root-relative glob (repeatable)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG            Log filter for diagnostics on stderr (default: warn)");
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Analyze {
        root_path: PathBuf,
        exclude: Vec<String>,
        output_format: OutputFormat,
    },
    Export {
        root_path: PathBuf,
        exclude: Vec<String>,
        format: ExportFormat,
        output: Option<PathBuf>,
        minify: bool,
    },
    Help,
    Version,
}

/// Parse an argument vector (including the program name) into a Command
pub fn parse_args_from(args: &[String]) -> Result<Command> {
    if args.len() < 2 {
        return Err(anyhow::anyhow!("Missing command"));
    }

    let command = &args[1];

    match command.as_str() {
        "--version" | "-V" => Ok(Command::Version),
        "--help" | "-h" => Ok(Command::Help),
        "analyze" => {
            let mut root_path: Option<PathBuf> = None;
            let mut exclude = Vec::new();
            let mut output_format = OutputFormat::Human;

            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--root" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--root requires an argument"));
                        }
                        root_path = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    }
                    "--exclude" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--exclude requires an argument"));
                        }
                        exclude.push(args[i + 1].clone());
                        i += 2;
                    }
                    "--output" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--output requires an argument"));
                        }
                        output_format = OutputFormat::from_str(&args[i + 1]).ok_or_else(|| {
                            anyhow::anyhow!(
                                "Invalid output format: {}. Must be human, json, or pretty",
                                args[i + 1]
                            )
                        })?;
                        i += 2;
                    }
                    _ => {
                        return Err(anyhow::anyhow!("Unknown argument: {}", args[i]));
                    }
                }
            }

            let root_path = root_path.ok_or_else(|| anyhow::anyhow!("--root is required"))?;

            Ok(Command::Analyze {
                root_path,
                exclude,
                output_format,
            })
        }
        "export" => {
            let mut root_path: Option<PathBuf> = None;
            let mut exclude = Vec::new();
            let mut format = ExportFormat::Json;
            let mut output: Option<PathBuf> = None;
            let mut minify = false;

            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--root" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--root requires an argument"));
                        }
                        root_path = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    }
                    "--exclude" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--exclude requires an argument"));
                        }
                        exclude.push(args[i + 1].clone());
                        i += 2;
                    }
                    "--format" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--format requires an argument"));
                        }
                        format = ExportFormat::from_str(&args[i + 1]).ok_or_else(|| {
                            anyhow::anyhow!(
                                "Invalid export format: {}. Must be json or dot",
                                args[i + 1]
                            )
                        })?;
                        i += 2;
                    }
                    "--out" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--out requires an argument"));
                        }
                        output = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    }
                    "--minify" => {
                        minify = true;
                        i += 1;
                    }
                    _ => {
                        return Err(anyhow::anyhow!("Unknown argument: {}", args[i]));
                    }
                }
            }

            let root_path = root_path.ok_or_else(|| anyhow::anyhow!("--root is required"))?;

            Ok(Command::Export {
                root_path,
                exclude,
                format,
                output,
                minify,
            })
        }
        _ => Err(anyhow::anyhow!("Unknown command: {}", command)),
    }
}

/// Parse the process arguments
pub fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}
