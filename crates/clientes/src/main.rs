//! # Clientes CLI
//!
//! The binary is intentionally thin: the interactive client lives in `src/cli/`,
//! log bootstrap in `src/logging.rs`, and this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/clientesapp/`: Core library with UI-agnostic registry logic
//! - `crates/clientes/`: This CLI tool, depends on the `clientesapp` library
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/clientes/src/cli/)                       │
//! │  - clap flags (setup.rs)                                    │
//! │  - Menu state machine (session.rs)                          │
//! │  - Prompt/retry contract (prompt.rs)                        │
//! │  - Styled messages (render.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/clientesapp/src/api.rs)                  │
//! │  - Owns the store and the document emitter                  │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: the session ended with the data saved
//! - `1`: configuration or data file could not be loaded, or the final save
//!   failed after input closed
//!
//! ## Testing Approach
//!
//! - **Session (`src/cli/session.rs`)**: scripted input against the in-memory
//!   backend and a recording emitter.
//! - **End to end (`tests/`)**: the real binary in a temporary directory, driven
//!   through piped stdin.

mod cli;
mod logging;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
