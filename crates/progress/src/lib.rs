//! Progress bars
//!
//! Segment layout derived from task statistics, and its HTML rendering.

#![warn(missing_docs)]

pub mod bar;
pub mod html;

pub use bar::{percentage, BarSize, Category, ProgressBar, Segment};
pub use html::render_html;
