//! # CLI Behavior
//!
//! This is **one possible UI client** for clientesapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and styling.
//!
//! ## Startup
//!
//! 1. Parse flags ([`setup::Cli`]) and install logging.
//! 2. Load [`ClientesConfig`] from `clientes.toml` and `CLIENTES_*` variables in the
//!    working directory, then apply the flags on top.
//! 3. Open the data file. A missing file is a notice; an unreadable or malformed
//!    one stops here with exit code 1 and is never overwritten.
//! 4. Hand stdin/stdout to the [`session::Session`] menu loop.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `prompt`: Line reading and the retry/opt-out contract
//! - `session`: The menu state machine
//! - `render`: Message styling and menu text

mod prompt;
mod render;
mod session;
pub mod setup;

use crate::logging;
use anyhow::{Context, Result};
use clap::Parser;
use clientesapp::api::FileApi;
use clientesapp::config::ClientesConfig;
use prompt::Prompter;
use session::{FieldLimits, Session};
use setup::Cli;
use std::io;
use tracing::info;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    let mut config = ClientesConfig::load(&cwd).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;
    info!(?config, "configuration resolved");

    let (mut api, opened) = FileApi::from_config(&config).with_context(|| {
        format!(
            "Failed to load customer data from {}",
            config.data_file.display()
        )
    })?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.say_all(&opened.messages)?;

    Session::new(&mut api, prompter, FieldLimits::from(&config)).run()
}
