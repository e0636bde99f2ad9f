//! Pruning manager - drives one pruning pass over all configured targets

use crate::config::Config;
use crate::utils::executor::{CommandExecutor, RealExecutor};
use crate::utils::wbadmin::{classify_exit, prune_args, PruneOutcome};
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Counts of per-target outcomes from one completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub pruned: usize,
    pub not_mounted: usize,
}

pub struct PruningManager {
    config: Config,
    executor: Box<dyn CommandExecutor>,
}

impl PruningManager {
    /// Create new pruning manager backed by real subprocess execution
    pub fn new(config: Config) -> Self {
        Self::with_executor(config, Box::new(RealExecutor::new()))
    }

    /// Create pruning manager with a specific executor (for tests)
    pub fn with_executor(config: Config, executor: Box<dyn CommandExecutor>) -> Self {
        Self { config, executor }
    }

    /// Run one pruning pass over all targets, in configuration order.
    ///
    /// Each target gets one synchronous tool invocation with no timeout.
    /// "Not mounted" (sentinel exit code) and success both let the pass
    /// continue; any other exit status aborts the pass immediately and no
    /// later target is invoked.
    pub fn run_pass(&self) -> Result<PassSummary> {
        let keep_versions = self.config.global.keep_versions;
        let tool_path = &self.config.global.tool_path;
        let mut summary = PassSummary::default();

        for target in &self.config.targets {
            let args = prune_args(keep_versions, &target.volume);

            info!("{} started job", target.label);

            let output = self
                .executor
                .run_command(tool_path, &args)
                .with_context(|| format!("Pruning invocation for '{}' failed", target.label))?;

            match classify_exit(output.code) {
                PruneOutcome::NotMounted => {
                    debug!("{} is not mounted", target.label);
                    summary.not_mounted += 1;
                }
                PruneOutcome::Pruned => {
                    for line in output.stdout.lines() {
                        debug!("{}", line);
                    }
                    info!(
                        "{} backups successfully pruned down to {}",
                        target.label, keep_versions
                    );
                    summary.pruned += 1;
                }
                PruneOutcome::Failed(code) => {
                    warn!(
                        "{} exited with exit code: {}",
                        tool_path.display(),
                        display_exit_code(code)
                    );
                    anyhow::bail!(
                        "Pruning pass aborted: '{}' failed with exit code {}",
                        target.label,
                        display_exit_code(code)
                    );
                }
            }
        }

        info!(
            "Pruning pass complete: {} pruned, {} not mounted",
            summary.pruned, summary.not_mounted
        );

        Ok(summary)
    }
}

/// Render an exit code the way the tool reports it: unsigned, or "signal"
/// when the child never produced one.
fn display_exit_code(code: Option<i32>) -> String {
    match code {
        Some(c) => (c as u32).to_string(),
        None => "<terminated by signal>".to_string(),
    }
}
