#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    leaderboard::init_logging();
    match leaderboard::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("leaderboard: {e}");
            ExitCode::from(2)
        }
    }
}
