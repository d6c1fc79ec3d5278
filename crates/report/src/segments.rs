//! Nested Semantic UI segment lists.
//!
//! Each entry is a header with an optional progress bar. Deeper entries are
//! wrapped in `secondary attached segment` containers below the previous one.

use zettel_core::StatsRecord;
use zettel_progress::{render_html, BarSize, ProgressBar};

/// Level entries start at.
const BASE_LEVEL: u32 = 2;

const OPEN_NESTED: &str = r#"<div class="ui secondary attached segment">"#;

/// One header of a segment list.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentEntry {
    /// Heading level, 2 for top-level entries
    pub level: u32,
    /// Header content (may contain HTML)
    pub name: String,
    /// Stats for the bar; headers without stats render bare
    pub stats: Option<StatsRecord>,
}

/// An ordered list of segment headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentList {
    entries: Vec<SegmentEntry>,
}

impl SegmentList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with a bar.
    pub fn push(&mut self, level: u32, name: impl Into<String>, stats: StatsRecord) {
        self.entries.push(SegmentEntry {
            level,
            name: name.into(),
            stats: Some(stats),
        });
    }

    /// Add a bare header.
    pub fn push_header(&mut self, level: u32, name: impl Into<String>) {
        self.entries.push(SegmentEntry {
            level,
            name: name.into(),
            stats: None,
        });
    }

    /// Entries in order.
    pub fn entries(&self) -> &[SegmentEntry] {
        &self.entries
    }

    /// Whether nothing was added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as HTML.
    pub fn render(&self) -> String {
        let mut html = String::from(r#"<div class="ui segments">"#);
        let mut current = BASE_LEVEL;

        for entry in &self.entries {
            let depth = entry.level.max(BASE_LEVEL);
            let mut top = false;

            if depth > current {
                for _ in current..depth {
                    html.push_str(OPEN_NESTED);
                }
                top = true;
            } else {
                for _ in depth..current {
                    html.push_str("</div>");
                }
            }
            current = depth;

            let bar = match &entry.stats {
                Some(stats) => render_html(&ProgressBar::layout(BarSize::Small, stats)),
                None => {
                    top = true;
                    String::new()
                }
            };

            let h = entry.level.clamp(1, 6);
            let class = if top { "ui top attached header" } else { "ui attached header" };
            html.push_str(&format!(r#"<h{h} class="{class}">{}{}</h{h}>"#, entry.name, bar));
        }

        for _ in BASE_LEVEL..current {
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}
