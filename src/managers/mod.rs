pub mod logging;
pub mod pruning;
