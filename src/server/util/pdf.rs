//! Plain text PDF documents.
//!
//! Pages are A4 portrait and every line is set in DejaVu Sans, embedded into the file so
//! Cyrillic and other non-Latin text renders on any viewer.

use std::io::Cursor;

use printpdf::{Mm, PdfDocument};

use crate::server::error::internal::InternalError;

/// A4 portrait, in millimetres.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
const LAYER_NAME: &str = "Text";

/// A single run of text placed at an absolute position, origin at the bottom left.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub text: String,
}

impl TextLine {
    pub fn new(x: f32, y: f32, size: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            size,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct TextDocument {
    title: String,
    pages: Vec<Vec<TextLine>>,
}

impl TextDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    pub fn add_page(&mut self, lines: Vec<TextLine>) {
        self.pages.push(lines);
    }

    pub fn pages(&self) -> &[Vec<TextLine>] {
        &self.pages
    }

    /// Serializes the document. An empty document still renders one blank page.
    pub fn render(&self) -> Result<Vec<u8>, InternalError> {
        let (document, first_page, first_layer) = PdfDocument::new(
            self.title.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            LAYER_NAME,
        );
        let font = document.add_external_font(Cursor::new(FONT))?;

        for (index, lines) in self.pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                document.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME)
            };
            let layer = document.get_page(page).get_layer(layer);

            for line in lines {
                layer.use_text(line.text.as_str(), line.size, Mm(line.x), Mm(line.y), &font);
            }
        }

        Ok(document.save_to_bytes()?)
    }
}
