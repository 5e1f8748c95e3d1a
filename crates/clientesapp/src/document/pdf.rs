//! PDF form of an event page: one A4 sheet, one text line per page line.

use crate::error::{ClientesError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fmt::Debug;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

/// Lays out a rendered page. The first line is set as the title; the `=` rule
/// under it only makes sense in plain text and is left out.
pub fn page_to_pdf(title: &str, page: &str) -> Result<Vec<u8>> {
    let (doc, page_index, layer_index) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "page",
    );
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let layer = doc.get_page(page_index).get_layer(layer_index);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    for (i, line) in page.lines().enumerate() {
        if is_rule(line) {
            continue;
        }
        if i == 0 {
            layer.use_text(line, TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &title_font);
        } else if !line.is_empty() {
            layer.use_text(line, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &body_font);
        }
        y -= LINE_HEIGHT_MM;
    }
    drop(layer);

    doc.save_to_bytes().map_err(pdf_error)
}

fn is_rule(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '=')
}

fn pdf_error(e: impl Debug) -> ClientesError {
    ClientesError::Document(format!("PDF rendering failed: {:?}", e))
}
