//! Scenario runner
//!
//! Drives an [`Invoker`] through one or more [`Scenario`]s and writes a
//! human-readable transcript:
//!
//! ```text
//! === Testing WITHOUT --continue flag ===
//!
//! Call 1:
//! Prompt: Tell me one interesting fact about cats.
//! Response: ...
//! ---
//!
//! ```
//!
//! Calls are awaited one at a time. The second prompt of a scenario is not
//! written to the CLI until the first response has been printed, and a
//! scenario does not start until the previous one has fully finished.
//! The first failure aborts the run; everything printed before it stays printed.

use std::io::Write;

use crate::error::Result;
use crate::transport::Invoker;
use crate::types::Scenario;

/// Printed on the error stream when a run aborts
pub const ERROR_PREFIX: &str = "Error calling Claude:";

/// Runs scenarios against an invoker, writing the transcript to `out`
pub struct ScenarioRunner<'a, I, W> {
    invoker: &'a I,
    out: W,
}

impl<'a, I, W> ScenarioRunner<'a, I, W>
where
    I: Invoker,
    W: Write,
{
    /// Create a new runner
    pub fn new(invoker: &'a I, out: W) -> Self {
        Self { invoker, out }
    }

    /// Give back the transcript writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run every call of one scenario in order
    ///
    /// # Errors
    /// Returns the first invocation or console error; later calls are skipped
    pub async fn run_scenario(&mut self, scenario: &Scenario) -> Result<()> {
        log::info!(
            "Running scenario '{}' ({} calls, continue={})",
            scenario.title(),
            scenario.prompts().len(),
            scenario.continue_conversation()
        );
        writeln!(self.out, "{}", scenario.title())?;
        writeln!(self.out)?;

        for (index, request) in scenario.requests().enumerate() {
            writeln!(self.out, "Call {}:", index + 1)?;
            writeln!(self.out, "Prompt: {}", request.prompt())?;
            self.out.flush()?;

            let response = self.invoker.invoke(&request).await?;

            writeln!(self.out, "Response: {response}")?;
            writeln!(self.out, "---")?;
            writeln!(self.out)?;
            self.out.flush()?;
        }

        Ok(())
    }

    /// Run scenarios strictly one after another
    ///
    /// # Errors
    /// Returns the first error from any scenario; remaining scenarios are skipped
    pub async fn run_all(&mut self, scenarios: &[Scenario]) -> Result<()> {
        for (index, scenario) in scenarios.iter().enumerate() {
            if index > 0 {
                writeln!(self.out)?;
                writeln!(self.out)?;
            }
            self.run_scenario(scenario).await?;
        }
        Ok(())
    }
}

/// Run `scenarios` and report a failure on `err_out` instead of returning it
///
/// Returns the error as well so callers can inspect it; the binary ignores it
/// and exits normally.
pub async fn run<I, W, E>(
    invoker: &I,
    scenarios: &[Scenario],
    out: W,
    mut err_out: E,
) -> Result<()>
where
    I: Invoker,
    W: Write,
    E: Write,
{
    let mut runner = ScenarioRunner::new(invoker, out);
    match runner.run_all(scenarios).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::debug!("Run aborted: {e:?}");
            writeln!(err_out, "{ERROR_PREFIX} {e}")?;
            Err(e)
        }
    }
}
