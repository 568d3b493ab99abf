//! Document model for the analysis report and the renderers that turn it
//! into text.
//!
//! The builder maps one computed result to a [`Report`]; renderers only ever
//! see that value, never the engine.

pub mod builder;
pub mod markdown;
pub mod text;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use builder::ReportBuilder;
pub use markdown::MarkdownRenderer;
pub use text::PlainTextRenderer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated_on: Option<NaiveDate>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Block {
    Paragraph(String),
    KeyValues(Vec<(String, String)>),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Bullets(Vec<String>),
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    pub fn key_values<K: Into<String>, V: Into<String>>(
        mut self,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        let pairs = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.blocks.push(Block::KeyValues(pairs));
        self
    }

    pub fn table(mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        self.blocks.push(Block::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        });
        self
    }

    pub fn bullets(mut self, items: Vec<String>) -> Self {
        self.blocks.push(Block::Bullets(items));
        self
    }
}

/// Visitor over a [`Report`]. Implementors write each block kind; the
/// provided [`render`](ReportRenderer::render) walks the document.
pub trait ReportRenderer {
    /// Short identifier, e.g. "text" or "markdown".
    fn format_name(&self) -> &'static str;

    /// File extension used for exported reports, without the dot.
    fn extension(&self) -> &'static str;

    fn title(&self, out: &mut String, title: &str, generated_on: Option<NaiveDate>);
    fn heading(&self, out: &mut String, heading: &str);
    fn paragraph(&self, out: &mut String, text: &str);
    fn key_values(&self, out: &mut String, pairs: &[(String, String)]);
    fn table(&self, out: &mut String, headers: &[String], rows: &[Vec<String>]);
    fn bullets(&self, out: &mut String, items: &[String]);

    fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        self.title(&mut out, &report.title, report.generated_on);
        for section in &report.sections {
            self.heading(&mut out, &section.heading);
            for block in &section.blocks {
                match block {
                    Block::Paragraph(text) => self.paragraph(&mut out, text),
                    Block::KeyValues(pairs) => self.key_values(&mut out, pairs),
                    Block::Table { headers, rows } => self.table(&mut out, headers, rows),
                    Block::Bullets(items) => self.bullets(&mut out, items),
                }
            }
        }
        out
    }
}

/// Column widths wide enough for every header and cell.
pub(crate) fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}
