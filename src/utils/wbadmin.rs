//! wbadmin invocation building and exit-code classification

/// Exit code wbadmin reports when the backup target volume is not mounted.
///
/// This is 0xFFFFFFFE: a negative native status (-2) read back through an
/// unsigned 32-bit cast. Expected whenever rotating destinations are offline.
pub const NOT_MOUNTED_EXIT_CODE: u32 = 4_294_967_294;

/// Outcome of one pruning invocation, classified from the exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    /// Exit 0: old versions deleted down to the retention count
    Pruned,
    /// Sentinel exit code: the destination volume is not currently mounted
    NotMounted,
    /// Any other exit status, including termination by signal
    Failed(Option<i32>),
}

/// Build the argument list for one pruning invocation:
/// `delete backup -keepVersions:<N> -backupTarget:<volume> -quiet`
pub fn prune_args(keep_versions: u32, volume: &str) -> Vec<String> {
    vec![
        "delete".to_string(),
        "backup".to_string(),
        format!("-keepVersions:{}", keep_versions),
        format!("-backupTarget:{}", volume),
        "-quiet".to_string(),
    ]
}

/// Classify a raw exit code from the backup tool.
///
/// The comparison is done on the unsigned reinterpretation of the code, so
/// the sentinel matches whether the platform reports it as 4294967294 or -2.
pub fn classify_exit(code: Option<i32>) -> PruneOutcome {
    match code {
        Some(0) => PruneOutcome::Pruned,
        Some(c) if c as u32 == NOT_MOUNTED_EXIT_CODE => PruneOutcome::NotMounted,
        other => PruneOutcome::Failed(other),
    }
}
