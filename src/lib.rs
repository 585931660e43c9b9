#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod format;
pub mod orchestrator;
pub mod output;
pub mod player;
pub mod rank;
pub mod stream;

/// Environment variable holding the log filter (e.g. `debug`, `leaderboard=trace`).
pub const LOG_ENV: &str = "LEADERBOARD_LOG";

/// Install a stderr `tracing` subscriber filtered by [`LOG_ENV`] (default `warn`).
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the leaderboard pipeline. Returns exit code (0 or 2).
pub fn run() -> Result<u8, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let args = match cli::args::Args::parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(if err.use_stderr() { 2 } else { 0 });
        }
    };

    let result = orchestrator::run(&args)?;
    let mode = if args.json {
        cli::exit::OutputMode::Json
    } else {
        cli::exit::OutputMode::Human
    };

    match cli::exit::output_stream(result.outcome, mode) {
        cli::exit::OutputStream::Stdout => {
            let mut stdout = io::stdout();
            stdout.write_all(result.output.as_bytes())?;
            stdout.flush()?;
        }
        cli::exit::OutputStream::Stderr => {
            let mut stderr = io::stderr();
            stderr.write_all(result.output.as_bytes())?;
            stderr.flush()?;
        }
    }

    Ok(cli::exit::exit_code(result.outcome))
}
