//! Exit codes & stdout/stderr routing.

/// Outcome produced by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ranked,
    Refusal,
}

/// Output mode chosen by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Target stream for output emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Exit code for a given outcome. Process-level failures also exit 2.
pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Ranked => 0,
        Outcome::Refusal => 2,
    }
}

/// In JSON mode everything goes to stdout; human refusals go to stderr.
pub fn output_stream(outcome: Outcome, mode: OutputMode) -> OutputStream {
    match (mode, outcome) {
        (OutputMode::Json, _) => OutputStream::Stdout,
        (OutputMode::Human, Outcome::Refusal) => OutputStream::Stderr,
        (OutputMode::Human, Outcome::Ranked) => OutputStream::Stdout,
    }
}
