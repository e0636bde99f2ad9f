pub mod command;
pub mod locker;
pub mod wbadmin;

// Trait-based abstraction for testability
pub mod executor;

// Re-export commonly used types and traits (used by integration tests)
#[allow(unused_imports)]
pub use command::CommandOutput;
#[allow(unused_imports)]
pub use executor::{CommandExecutor, RealExecutor};
#[allow(unused_imports)]
pub use wbadmin::{classify_exit, prune_args, PruneOutcome, NOT_MOUNTED_EXIT_CODE};
