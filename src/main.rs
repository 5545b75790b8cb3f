use clap::Parser;
use segflow::cli::{self, Args};
use segflow::core::{DefaultErrorReporter, ErrorReporter};
use segflow::logging;
use std::env;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();
    let reporter = DefaultErrorReporter::new();

    let workspace = env::current_dir().ok();
    let _guard = match logging::init(workspace.as_deref(), args.generate.verbose) {
        Ok(guard) => {
            if let Some(path) = guard.log_file_path() {
                debug!(path = %path.display(), "file logging enabled");
            }
            Some(guard)
        }
        Err(err) => {
            reporter.report_warning("logging disabled", Some(err.to_string()));
            None
        }
    };

    match cli::run(args) {
        Ok(output) => {
            println!("Generated workflow: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            reporter.report_error(&err);
            ExitCode::FAILURE
        }
    }
}
