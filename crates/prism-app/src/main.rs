mod cli;
mod commands;

use std::process::ExitCode;

use prism_common::{ErrorCode, ThemeError};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "prism=info";

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let filter = EnvFilter::from_default_env();
    let filter = match directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>())
    {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &ThemeError) {
    eprintln!("[{}] {err}", err.code());
    match (err.code(), err.path()) {
        (ErrorCode::PermissionError, Some(path)) => {
            eprintln!("hint: check that you can write to {}", path.display());
        }
        (ErrorCode::ResourceExhausted, _) => {
            eprintln!("hint: free some disk space and try again");
        }
        _ => {}
    }
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::debug!("prism v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
