// Claude CLI context check
//
// Runs the isolated and context-retained scenarios against the Claude CLI and
// prints the transcript. A failed invocation is reported on stderr; the
// process still exits normally.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use claude_context_check::cli::Cli;
use claude_context_check::runner::ERROR_PREFIX;
use claude_context_check::{Scenario, SubprocessInvoker, VERSION, run};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("claude-context-check {VERSION}: {cli:?}");

    let invoker = match SubprocessInvoker::new(cli.cli_path.clone()) {
        Ok(invoker) => invoker.with_continue_flag(cli.continue_flag.clone()),
        Err(e) => {
            eprintln!("{ERROR_PREFIX} {e}");
            return Ok(());
        }
    };
    log::info!("Using Claude CLI at {}", invoker.cli_path().display());

    let mut stdout = std::io::stdout();

    // The failure has already been reported by `run`.
    if let Err(e) = run(&invoker, &Scenario::defaults(), &mut stdout, std::io::stderr()).await {
        log::debug!("Exiting after failure: {e}");
    }

    // Broken stdout is a console problem, not an invocation failure.
    stdout
        .flush()
        .context("Failed to flush transcript to stdout")?;

    Ok(())
}
