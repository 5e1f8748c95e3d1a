//! # Event Documents
//!
//! Every registration and deletion produces a printable one-page document. The
//! document is the only record of the event kept outside the data file, so it is
//! written before the operator is told the operation succeeded.
//!
//! ## Naming
//!
//! ```text
//! cadastro_<cpf><ext>    # registration
//! exclusao_<cpf><ext>    # deletion
//! ```
//!
//! `<cpf>` is the normalized identifier, so the name is stable no matter how the
//! CPF was typed. An existing file with the same name is overwritten.
//!
//! ## Layout
//!
//! The page is rendered from `templates/document.txt` (embedded at compile time)
//! with minijinja. Rust computes every string; the template only arranges lines.
//!
//! With the `.pdf` extension [`FileEmitter`] lays the same lines out on an A4 page
//! (printpdf) instead of writing them as text.
//!
//! ## Implementations
//!
//! - [`FileEmitter`]: production, writes into a documents directory.
//! - [`RecordingEmitter`] (tests / `test_utils`): keeps rendered pages in memory.

use crate::error::{ClientesError, Result};
use crate::model::CustomerRecord;
use chrono::NaiveDateTime;
use minijinja::Environment;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

mod pdf;

pub use pdf::page_to_pdf;

const DOCUMENT_TEMPLATE: &str = include_str!("templates/document.txt");
const TEMPLATE_NAME: &str = "document.txt";
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Registration,
    Deletion,
}

impl EventKind {
    /// File name prefix.
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::Registration => "cadastro",
            EventKind::Deletion => "exclusao",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EventKind::Registration => "Customer Registration",
            EventKind::Deletion => "Customer Deletion",
        }
    }

    pub fn stamp_label(self) -> &'static str {
        match self {
            EventKind::Registration => "Issued",
            EventKind::Deletion => "Deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEvent {
    pub kind: EventKind,
    pub at: NaiveDateTime,
    pub reason: Option<String>,
}

impl DocumentEvent {
    pub fn registration(at: NaiveDateTime) -> Self {
        Self {
            kind: EventKind::Registration,
            at,
            reason: None,
        }
    }

    pub fn deletion(at: NaiveDateTime, reason: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Deletion,
            at,
            reason: Some(reason.into()),
        }
    }
}

/// Renders and stores event documents.
///
/// Implementations only read the record; they never mutate it.
pub trait Emitter {
    /// Writes the document and returns where it went.
    fn emit(&self, record: &CustomerRecord, event: &DocumentEvent) -> Result<PathBuf>;
}

#[derive(Serialize)]
struct DocumentData<'a> {
    title: &'a str,
    rule: String,
    name: &'a str,
    identifier: &'a str,
    email: &'a str,
    address: &'a str,
    number: &'a str,
    complement: &'a str,
    phone: &'a str,
    stamp_label: &'a str,
    timestamp: String,
    reason: Option<&'a str>,
}

/// File name for `record`'s `kind` document, e.g. `cadastro_52998224725.txt`.
pub fn document_file_name(record: &CustomerRecord, kind: EventKind, ext: &str) -> String {
    format!("{}_{}{}", kind.tag(), record.key(), ext)
}

/// Renders the page text for one event.
pub fn render_document(record: &CustomerRecord, event: &DocumentEvent) -> Result<String> {
    if event.kind == EventKind::Deletion
        && event.reason.as_deref().map_or(true, |r| r.trim().is_empty())
    {
        return Err(ClientesError::Document(
            "A deletion document requires a reason".to_string(),
        ));
    }

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;

    let title = event.kind.title();
    let data = DocumentData {
        title,
        rule: "=".repeat(title.chars().count()),
        name: &record.name,
        identifier: &record.identifier,
        email: &record.email,
        address: &record.address,
        number: &record.number,
        complement: &record.complement,
        phone: &record.phone,
        stamp_label: event.kind.stamp_label(),
        timestamp: event.at.format(TIMESTAMP_FORMAT).to_string(),
        reason: event.reason.as_deref(),
    };

    let mut page = template.render(&data)?;
    page.push('\n');
    Ok(page)
}

/// Writes documents as files into a directory.
pub struct FileEmitter {
    dir: PathBuf,
    file_ext: String,
}

impl FileEmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_ext: ".txt".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    pub fn writes_pdf(&self) -> bool {
        self.file_ext.eq_ignore_ascii_case(".pdf")
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(ClientesError::Io)?;
        }
        Ok(())
    }
}

impl Emitter for FileEmitter {
    fn emit(&self, record: &CustomerRecord, event: &DocumentEvent) -> Result<PathBuf> {
        let page = render_document(record, event)?;
        let content = if self.writes_pdf() {
            page_to_pdf(event.kind.title(), &page)?
        } else {
            page.into_bytes()
        };
        self.ensure_dir()?;

        let path = self
            .dir
            .join(document_file_name(record, event.kind, &self.file_ext));
        fs::write(&path, content).map_err(ClientesError::Io)?;

        info!(path = %path.display(), kind = event.kind.tag(), "document written");
        Ok(path)
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub use recording::RecordingEmitter;

#[cfg(any(test, feature = "test_utils"))]
mod recording {
    use super::*;
    use std::cell::RefCell;

    /// Keeps rendered pages in memory, keyed by the file name they would get.
    #[derive(Default)]
    pub struct RecordingEmitter {
        pages: RefCell<Vec<(String, String)>>,
        simulate_write_error: RefCell<bool>,
    }

    impl RecordingEmitter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_simulate_write_error(&self, simulate: bool) {
            *self.simulate_write_error.borrow_mut() = simulate;
        }

        /// `(file name, page)` pairs in emission order.
        pub fn pages(&self) -> Vec<(String, String)> {
            self.pages.borrow().clone()
        }

        pub fn page(&self, file_name: &str) -> Option<String> {
            self.pages
                .borrow()
                .iter()
                .rev()
                .find(|(name, _)| name == file_name)
                .map(|(_, page)| page.clone())
        }
    }

    impl Emitter for RecordingEmitter {
        fn emit(&self, record: &CustomerRecord, event: &DocumentEvent) -> Result<PathBuf> {
            if *self.simulate_write_error.borrow() {
                return Err(ClientesError::Document(
                    "Simulated write error".to_string(),
                ));
            }
            let page = render_document(record, event)?;
            let name = document_file_name(record, event.kind, ".txt");
            self.pages.borrow_mut().push((name.clone(), page));
            Ok(PathBuf::from(name))
        }
    }
}
