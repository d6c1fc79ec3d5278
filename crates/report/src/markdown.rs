//! Markdown zettel documents.

use std::path::PathBuf;

use chrono::NaiveDate;
use zettel_core::StatsRecord;
use zettel_progress::{render_html, BarSize, ProgressBar};
use zettel_storage::ZettelSink;

use crate::error::Result;

/// One block of a zettel.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// YAML front matter
    Meta {
        /// Date line
        date: NaiveDate,
        /// Tags
        tags: Vec<String>,
    },
    /// Plain markdown heading
    Heading {
        /// 1 to 6
        level: u8,
        /// Heading text
        text: String,
    },
    /// Semantic UI block header
    BlockHeader {
        /// HTML heading level
        level: u8,
        /// Header text
        text: String,
    },
    /// Paragraph
    Paragraph(String),
    /// Quote
    Blockquote(String),
    /// Raw HTML
    Html(String),
    /// Progress bar for a record
    ProgressBar {
        /// Display size
        size: BarSize,
        /// Record shown
        stats: StatsRecord,
    },
}

impl Block {
    /// Render this block.
    pub fn to_markdown(&self) -> String {
        match self {
            Block::Meta { date, tags } => {
                let mut s = format!("---\ndate: {}\ntags:\n", date.format("%Y-%m-%d"));
                for tag in tags {
                    s.push_str(&format!("- {}\n", tag));
                }
                s.push_str("---");
                s
            }
            Block::Heading { level, text } => {
                format!("{} {}", "#".repeat((*level).clamp(1, 6) as usize), text)
            }
            Block::BlockHeader { level, text } => {
                format!("<h{l} class=\"ui block header\">\n\t{}\n</h{l}>", text, l = level)
            }
            Block::Paragraph(text) => text.clone(),
            Block::Blockquote(text) => format!("> {}", text),
            Block::Html(html) => html.clone(),
            Block::ProgressBar { size, stats } => render_html(&ProgressBar::layout(*size, stats)),
        }
    }
}

/// A zettel under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ZettelDocument {
    filename: String,
    blocks: Vec<Block>,
}

impl ZettelDocument {
    /// Start a document with its front matter.
    pub fn new(filename: impl Into<String>, date: NaiveDate, tags: &[String]) -> Self {
        Self {
            filename: filename.into(),
            blocks: vec![Block::Meta {
                date,
                tags: tags.to_vec(),
            }],
        }
    }

    /// Output file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Blocks in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append any block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Heading; level 2 becomes a block header, anything past 5 an h6.
    pub fn push_heading(&mut self, text: impl Into<String>, level: u8) {
        let text = text.into();
        let block = match level {
            1 => Block::Heading { level: 1, text },
            2 => Block::BlockHeader { level: 2, text },
            3..=5 => Block::Heading { level, text },
            _ => Block::Heading { level: 6, text },
        };
        self.blocks.push(block);
    }

    /// Stats summary paragraph.
    pub fn push_stats(&mut self, stats: &StatsRecord) {
        self.blocks.push(Block::Paragraph(stats.summary()));
    }

    /// Italic description quote.
    pub fn push_description(&mut self, text: &str) {
        self.blocks.push(Block::Blockquote(format!("*{}*", text)));
    }

    /// Progress bar.
    pub fn push_progress_bar(&mut self, size: BarSize, stats: StatsRecord) {
        self.blocks.push(Block::ProgressBar { size, stats });
    }

    /// Raw HTML.
    pub fn push_html(&mut self, html: String) {
        self.blocks.push(Block::Html(html));
    }

    /// Serialize the whole document.
    pub fn to_markdown(&self) -> String {
        let mut out = self
            .blocks
            .iter()
            .map(Block::to_markdown)
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        out
    }

    /// Write the document to `sink`.
    pub async fn publish(&self, sink: &dyn ZettelSink) -> Result<PathBuf> {
        Ok(sink.write_zettel(&self.filename, &self.to_markdown()).await?)
    }
}
