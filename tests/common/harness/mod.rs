//! Test harness for CLI integration tests.
//!
//! Provides isolated config files, session script building,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod script;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::JotCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use script::TestScript;
