//! # Command Layer
//!
//! This module contains the **core business logic** of clientes. Each command lives in
//! its own submodule and implements a plain Rust function over the store and emitter.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Mutate the [`CustomerStore`](crate::store::CustomerStore)
//! - Trigger document emission through an [`Emitter`](crate::document::Emitter)
//! - Keep the store and the documents consistent when one side fails
//! - Return structured [`CmdResult`] values with leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Prompting**: values arrive already validated; the UI owns the prompt loop
//! - **Printing**: messages are data, the UI decides how they look
//! - **Reading the clock**: timestamps are arguments, which keeps tests deterministic
//!
//! ## Failure Policy
//!
//! A store mutation and its document are one unit. If the document cannot be
//! written the mutation is undone before the error is returned, so there is never
//! a registered customer without a `cadastro_` document, nor a deleted one without
//! an `exclusao_` document.
//!
//! ## Command Modules
//!
//! - [`open`]: Load the data file
//! - [`register`]: Add a customer and emit its registration document
//! - [`remove`]: Remove a customer and emit its deletion document
//! - [`save`]: Write the data file

use crate::model::CustomerRecord;
use serde::Serialize;
use std::path::PathBuf;

pub mod open;
pub mod register;
pub mod remove;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<CustomerRecord>,
    pub document_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<CustomerRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_document_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.document_paths = paths;
        self
    }
}
