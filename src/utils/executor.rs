//! Command execution abstraction for testability
//!
//! This module provides a trait-based abstraction for command execution,
//! enabling dependency injection and mocking for tests.

use super::command::{self, CommandOutput};
use anyhow::Result;
use std::path::Path;

/// Abstraction for command execution, enabling mocking in tests
pub trait CommandExecutor: Send + Sync {
    /// Run a command synchronously and capture its output
    fn run_command(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// Default implementation using real subprocess calls
#[derive(Debug, Clone, Default)]
pub struct RealExecutor;

impl RealExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for RealExecutor {
    fn run_command(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        command::run_command(program, args)
    }
}

/// A mock executor for testing that records calls and returns configured responses
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Recorded command invocation
    #[derive(Clone, Debug)]
    pub struct CommandCall {
        pub program: String,
        pub args: Vec<String>,
    }

    impl CommandCall {
        /// Extract the volume identifier from a recorded `-backupTarget:` argument
        pub fn backup_target(&self) -> Option<&str> {
            self.args
                .iter()
                .find_map(|a| a.strip_prefix("-backupTarget:"))
        }
    }

    /// Response configuration for mock
    #[derive(Clone, Debug)]
    pub enum MockResponse {
        Exit { code: i32, stdout: String },
        SpawnFailure { message: String },
    }

    impl Default for MockResponse {
        fn default() -> Self {
            MockResponse::Exit {
                code: 0,
                stdout: String::new(),
            }
        }
    }

    /// Mock executor for testing.
    ///
    /// Responses are keyed by the volume identifier in the `-backupTarget:`
    /// argument, so one mock can answer differently per configured target.
    #[derive(Clone, Default)]
    pub struct MockExecutor {
        /// Recorded command invocations
        calls: Arc<Mutex<Vec<CommandCall>>>,
        /// Pre-configured responses: volume identifier -> response
        responses: Arc<Mutex<HashMap<String, MockResponse>>>,
        /// Default response when no specific response is configured
        default_response: Arc<Mutex<MockResponse>>,
    }

    impl MockExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Configure a response for a specific volume identifier
        pub fn expect(self, volume: &str, response: MockResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(volume.to_string(), response);
            self
        }

        /// Set the default response for unconfigured volumes
        pub fn with_default_response(self, response: MockResponse) -> Self {
            *self.default_response.lock().unwrap() = response;
            self
        }

        /// Get all recorded calls
        pub fn get_calls(&self) -> Vec<CommandCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Get number of recorded invocations
        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Check if a volume identifier was targeted by any call
        pub fn was_targeted(&self, volume: &str) -> bool {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .any(|c| c.backup_target() == Some(volume))
        }

        fn record_call(&self, program: &Path, args: &[String]) -> CommandCall {
            let call = CommandCall {
                program: program.display().to_string(),
                args: args.to_vec(),
            };
            self.calls.lock().unwrap().push(call.clone());
            call
        }

        fn get_response(&self, call: &CommandCall) -> MockResponse {
            call.backup_target()
                .and_then(|volume| self.responses.lock().unwrap().get(volume).cloned())
                .unwrap_or_else(|| self.default_response.lock().unwrap().clone())
        }
    }

    impl CommandExecutor for MockExecutor {
        fn run_command(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
            let call = self.record_call(program, args);
            match self.get_response(&call) {
                MockResponse::Exit { code, stdout } => Ok(CommandOutput {
                    code: Some(code),
                    stdout,
                    stderr: String::new(),
                }),
                MockResponse::SpawnFailure { message } => {
                    anyhow::bail!("Failed to execute {}: {}", program.display(), message)
                }
            }
        }
    }
}
