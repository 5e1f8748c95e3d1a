//! # Clientes Architecture
//!
//! Clientes is a **UI-agnostic customer registry library**. The interactive terminal
//! tool in `crates/clientes` is one client of it; nothing in here prompts, prints or
//! exits.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (crates/clientes)                                 │
//! │  - Menu loop, prompting, styled messages, exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's store and emitter                     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Register / remove / save / open                          │
//! │  - Keeps store and documents consistent                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                 ┌────────────┴────────────┐
//!                 ▼                         ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  Storage (store/)         │ │  Documents (document/)        │
//! │  - CustomerStore          │ │  - Emitter trait              │
//! │  - CsvBackend, MemBackend │ │  - FileEmitter                │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! [`validation`] and [`model`] sit underneath everything and depend on nothing else.
//!
//! ## Key Principle: Validated Values In, Structured Results Out
//!
//! Commands assume their inputs already passed the field rules in [`validation`];
//! the UI is responsible for asking again until they do. Commands still enforce the
//! store invariants (unique CPF, existing record on delete) and report violations as
//! typed errors ([`error::ClientesError::AlreadyExists`], [`error::ClientesError::NotFound`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: In-memory mapping and its persistence backends
//! - [`document`]: Registration/deletion document rendering
//! - [`model`]: `CustomerRecord`
//! - [`validation`]: CPF check and generic field rules
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
