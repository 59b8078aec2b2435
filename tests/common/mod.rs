use std::process::Command;

/// The `lexi` driver binary built for this test run.
pub fn command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lexi"))
}
