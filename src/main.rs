use anyhow::{bail, Result};
use sqlite_inspect::commands;

fn main() -> Result<()> {
    // Parse arguments
    let args = std::env::args().collect::<Vec<_>>();
    match args.len() {
        0 | 1 => bail!("Missing <database path> and <command>"),
        2 => bail!("Missing <command>"),
        _ => {}
    }

    // One command per invocation. Failures are reported as a diagnostic
    // line on stdout and the process still exits normally.
    commands::dispatch(&args[1], &args[2], &args[3..]);
    Ok(())
}
