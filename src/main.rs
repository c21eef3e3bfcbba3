use std::path::Path;
use std::process::ExitCode;

use graph_plot::cli::run;

fn main() -> ExitCode {
    // Logging is opt-in through RUST_LOG, e.g. RUST_LOG=graph_plot=debug.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let program = args
        .first()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph_plot".to_string());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            eprintln!("{program}: {e}");
            ExitCode::from(1)
        }
    }
}
