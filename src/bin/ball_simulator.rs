//! Console ball simulator reading commands from stdin.

use std::io;
use std::process::ExitCode;

use campus_model::logging::init_logger;
use campus_model::simulator::BallSimulator;

fn main() -> ExitCode {
    init_logger();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match BallSimulator::new(stdin.lock(), stdout.lock()).run() {
        Ok(balls) => {
            tracing::info!(balls = balls.len(), "Ball simulator finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Ball simulator failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
