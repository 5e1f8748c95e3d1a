//! # Domain Model: Customer Records
//!
//! [`CustomerRecord`] is the only entity in clientes. Every attribute is text and is
//! kept exactly as the operator typed it, so that the data file and the generated
//! documents show what was entered (e.g. a CPF typed as `529.982.247-25`).
//!
//! ## Identity
//!
//! A record is identified by its **normalized identifier**: the CPF with every
//! non-digit stripped. `529.982.247-25` and `52998224725` are the same customer.
//! The store keys its mapping by [`CustomerRecord::key`], never by the display form.
//!
//! ## Column Layout
//!
//! The serde field names double as the data file header, in this exact order:
//!
//! ```text
//! Nome,CPF,Email,Endereço,Número,Complemento,Telefone
//! ```
//!
//! Reordering the fields below changes the on-disk format.

use crate::validation::normalize_identifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header row of the persisted data file.
pub const CSV_HEADER: [&str; 7] = [
    "Nome",
    "CPF",
    "Email",
    "Endereço",
    "Número",
    "Complemento",
    "Telefone",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    #[serde(rename = "Nome")]
    pub name: String,
    /// CPF as entered, possibly formatted.
    #[serde(rename = "CPF")]
    pub identifier: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Endereço")]
    pub address: String,
    #[serde(rename = "Número")]
    pub number: String,
    #[serde(rename = "Complemento", default)]
    pub complement: String,
    #[serde(rename = "Telefone")]
    pub phone: String,
}

impl CustomerRecord {
    /// Digits-only form of the identifier; the store key.
    pub fn key(&self) -> String {
        normalize_identifier(&self.identifier)
    }
}

impl fmt::Display for CustomerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, CPF: {}, Email: {}, Address: {}, Number: {}, Complement: {}, Phone: {}",
            self.name,
            self.identifier,
            self.email,
            self.address,
            self.number,
            self.complement,
            self.phone
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn maria() -> CustomerRecord {
        CustomerRecord {
            name: "Maria Oliveira".to_string(),
            identifier: "529.982.247-25".to_string(),
            email: "maria@example.com".to_string(),
            address: "Rua A".to_string(),
            number: "10".to_string(),
            complement: String::new(),
            phone: "11999999999".to_string(),
        }
    }

    #[test]
    fn key_strips_formatting() {
        assert_eq!(maria().key(), "52998224725");
    }

    #[test]
    fn display_lists_every_field() {
        let line = maria().to_string();
        assert!(line.starts_with("Name: Maria Oliveira, CPF: 529.982.247-25"));
        assert!(line.contains("Complement: , Phone: 11999999999"));
    }
}
