//! layermap CLI - deterministic service architecture extraction for Go
//!
//! Usage: layermap <command> [arguments]

mod analyze_cmd;
mod cli;
mod export_cmd;
mod version;

use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{parse_args, print_usage, Command};

/// Diagnostics go to stderr so stdout stays machine readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            return ExitCode::from(1);
        }
    };

    let result = match command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            println!("{}", version::version());
            Ok(())
        }
        Command::Analyze {
            root_path,
            exclude,
            output_format,
        } => analyze_cmd::run_analyze(&root_path, &exclude, output_format),
        Command::Export {
            root_path,
            exclude,
            format,
            output,
            minify,
        } => export_cmd::run_export(&root_path, &exclude, format, output, minify),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
