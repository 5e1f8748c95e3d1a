//! # Interactive Session
//!
//! The menu loop as a small state machine:
//!
//! ```text
//!            ┌──── 1 ───▶ Registering ───┐
//! MainMenu ──┼──── 2 ───▶ Deleting ──────┼──▶ MainMenu
//!            └── 3 / EOF ─▶ Exiting ─────┘ (save failed)
//!                              │
//!                              ▼ saved
//!                             done
//! ```
//!
//! Every operation that gives up (a [`Prompted::Cancelled`] field, a duplicate
//! CPF, a failed document) returns to the menu without touching the store.
//! A failed save at exit also returns to the menu, so the operator can fix the
//! problem and try again. If input is already closed there is nobody to ask, and
//! the failure ends the session with an error.

use super::prompt::{Prompted, Prompter};
use super::render::{MENU, MENU_PROMPT};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clientesapp::api::{ClientesApi, CmdMessage};
use clientesapp::config::ClientesConfig;
use clientesapp::document::Emitter;
use clientesapp::error::ClientesError;
use clientesapp::model::CustomerRecord;
use clientesapp::store::StorageBackend;
use clientesapp::validation::{
    has_email_shape, is_present, is_valid_identifier, min_digits, FieldRule,
};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    Registering,
    Deleting,
    Exiting,
}

/// Bounds taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct FieldLimits {
    pub name_min_len: usize,
    pub name_max_len: usize,
    pub phone_min_digits: usize,
}

impl From<&ClientesConfig> for FieldLimits {
    fn from(config: &ClientesConfig) -> Self {
        Self {
            name_min_len: config.name_min_len,
            name_max_len: config.name_max_len,
            phone_min_digits: config.phone_min_digits,
        }
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct Session<'a, B: StorageBackend, E: Emitter, R, W> {
    api: &'a mut ClientesApi<B, E>,
    prompter: Prompter<R, W>,
    limits: FieldLimits,
    clock: fn() -> NaiveDateTime,
}

impl<'a, B, E, R, W> Session<'a, B, E, R, W>
where
    B: StorageBackend,
    E: Emitter,
    R: BufRead,
    W: Write,
{
    pub fn new(
        api: &'a mut ClientesApi<B, E>,
        prompter: Prompter<R, W>,
        limits: FieldLimits,
    ) -> Self {
        Self {
            api,
            prompter,
            limits,
            clock: local_now,
        }
    }

    /// Replaces the wall clock used to stamp documents.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Runs until the data is saved at exit.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::MainMenu;
        loop {
            debug!(?state, "session step");
            state = match state {
                State::MainMenu => self.main_menu()?,
                State::Registering => self.register()?,
                State::Deleting => self.delete()?,
                State::Exiting => {
                    if self.save_and_exit()? {
                        return Ok(());
                    }
                    State::MainMenu
                }
            };
        }
    }

    fn main_menu(&mut self) -> Result<State> {
        self.prompter.write_line(MENU)?;
        let Some(choice) = self.prompter.read_line(MENU_PROMPT)? else {
            return Ok(State::Exiting);
        };
        Ok(match choice.as_str() {
            "1" => State::Registering,
            "2" => State::Deleting,
            "3" => State::Exiting,
            _ => {
                self.prompter
                    .say(&CmdMessage::error("Invalid option. Try again."))?;
                State::MainMenu
            }
        })
    }

    fn register(&mut self) -> Result<State> {
        let limits = self.limits;

        let name_rule = FieldRule::new("Full name: ")
            .with_bounds(limits.name_min_len, limits.name_max_len);
        let Prompted::Value(name) = self.prompter.ask(&name_rule)? else {
            return Ok(State::MainMenu);
        };

        let valid_cpf = is_valid_identifier;
        let cpf_rule = FieldRule::new("CPF: ").with_validator(&valid_cpf, "Invalid CPF.");
        let Prompted::Value(identifier) = self.prompter.ask(&cpf_rule)? else {
            return Ok(State::MainMenu);
        };
        if self.api.contains(&identifier) {
            self.prompter
                .say(&CmdMessage::error("CPF already registered."))?;
            return Ok(State::MainMenu);
        }

        let email_shape = has_email_shape;
        let email_rule =
            FieldRule::new("E-mail: ").with_validator(&email_shape, "Invalid e-mail.");
        let Prompted::Value(email) = self.prompter.ask(&email_rule)? else {
            return Ok(State::MainMenu);
        };

        let Prompted::Value(address) = self.prompter.ask(&FieldRule::new("Address: "))? else {
            return Ok(State::MainMenu);
        };
        let Prompted::Value(number) = self.prompter.ask(&FieldRule::new("Number: "))? else {
            return Ok(State::MainMenu);
        };
        let Prompted::Value(complement) = self.prompter.ask_optional("Complement (optional): ")?
        else {
            return Ok(State::MainMenu);
        };

        let phone_digits = |s: &str| min_digits(s, limits.phone_min_digits);
        let phone_rule = FieldRule::new("Phone (DDD + number): ").with_validator(
            &phone_digits,
            format!(
                "Invalid phone. Enter at least {} digits (DDD + number).",
                limits.phone_min_digits
            ),
        );
        let Prompted::Value(phone) = self.prompter.ask(&phone_rule)? else {
            return Ok(State::MainMenu);
        };

        let record = CustomerRecord {
            name,
            identifier,
            email,
            address,
            number,
            complement,
            phone,
        };
        match self.api.register(record, (self.clock)()) {
            Ok(result) => self.prompter.say_all(&result.messages)?,
            Err(e) => self.prompter.say(&failure_message(&e))?,
        }
        Ok(State::MainMenu)
    }

    fn delete(&mut self) -> Result<State> {
        let identifier = {
            let api = &*self.api;
            let registered = |s: &str| api.contains(s);
            let rule = FieldRule::new("CPF of the customer to delete: ")
                .with_validator(&registered, "Customer not found.");
            let Prompted::Value(identifier) = self.prompter.ask(&rule)? else {
                return Ok(State::MainMenu);
            };
            identifier
        };

        let present = is_present;
        let reason_rule = FieldRule::new("Reason for deletion: ")
            .with_validator(&present, "A deletion reason is required.");
        let Prompted::Value(reason) = self.prompter.ask(&reason_rule)? else {
            return Ok(State::MainMenu);
        };

        match self.api.remove(&identifier, &reason, (self.clock)()) {
            Ok(result) => self.prompter.say_all(&result.messages)?,
            Err(e @ ClientesError::NotFound(_)) => {
                self.prompter.say(&failure_message(&e))?;
                if self.prompter.offer_retry()? {
                    return Ok(State::Deleting);
                }
            }
            Err(e) => self.prompter.say(&failure_message(&e))?,
        }
        Ok(State::MainMenu)
    }

    /// `true` once the data is on disk.
    fn save_and_exit(&mut self) -> Result<bool> {
        match self.api.save() {
            Ok(result) => {
                self.prompter.say_all(&result.messages)?;
                Ok(true)
            }
            Err(e) => {
                self.prompter.say(&CmdMessage::error(format!(
                    "Could not save data: {}",
                    e
                )))?;
                if self.prompter.is_closed() {
                    return Err(e).with_context(|| {
                        format!(
                            "saving {} after input closed",
                            self.api.store().location().display()
                        )
                    });
                }
                Ok(false)
            }
        }
    }
}

fn failure_message(error: &ClientesError) -> CmdMessage {
    match error {
        ClientesError::AlreadyExists(_) => CmdMessage::error("CPF already registered."),
        ClientesError::NotFound(_) => CmdMessage::error("Customer not found."),
        other => CmdMessage::error(format!("Operation failed: {}", other)),
    }
}
