//! jsonconf: inspect, edit and validate JSON config files from the shell.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
