//! Configuration constants for the subprocess invoker

use std::env;
use std::path::PathBuf;

/// Executable looked up on `PATH` when no explicit path is given
pub const DEFAULT_CLI_NAME: &str = "claude";

/// Argument that asks the CLI to continue its most recent session
pub const DEFAULT_CONTINUE_FLAG: &str = "-c";

/// Read buffer size used when draining stdout/stderr
pub const READ_CHUNK_SIZE: usize = 4096;

/// Install locations checked when `claude` is not on `PATH`
pub fn common_install_locations() -> Vec<PathBuf> {
    let home = PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/root")));
    vec![
        home.join(".npm-global/bin").join(DEFAULT_CLI_NAME),
        PathBuf::from("/usr/local/bin").join(DEFAULT_CLI_NAME),
        home.join(".local/bin").join(DEFAULT_CLI_NAME),
        home.join("node_modules/.bin").join(DEFAULT_CLI_NAME),
        home.join(".yarn/bin").join(DEFAULT_CLI_NAME),
    ]
}
