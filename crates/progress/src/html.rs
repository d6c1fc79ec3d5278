//! HTML rendering for Semantic UI multiple-progress bars.

use crate::bar::{Category, ProgressBar, Segment};

const SQUARE_LEFT: &str = "border-top-left-radius: 0px; border-bottom-left-radius: 0px;";
const SQUARE_RIGHT: &str = "border-top-right-radius: 0px; border-bottom-right-radius: 0px;";

/// Render the bar as a single HTML element.
pub fn render_html(bar: &ProgressBar) -> String {
    let segments: String = bar.segments().iter().map(render_segment).collect();

    format!(
        r#"<div class="ui {} multiple progress" data-percent="{}">{}</div>"#,
        bar.size(),
        bar.data_percent(),
        segments
    )
}

fn render_segment(segment: &Segment) -> String {
    let class = match segment.category {
        Category::Done => "bar".to_string(),
        other => format!("{} bar", other.color()),
    };

    let mut style = format!("transition-duration: 300ms; display: block; width: {}%;", segment.width);
    if !segment.rounded_left {
        style.push(' ');
        style.push_str(SQUARE_LEFT);
    }
    if !segment.rounded_right {
        style.push(' ');
        style.push_str(SQUARE_RIGHT);
    }

    format!(
        r#"<div class="{}" style="{}"><div class="progress">{}</div></div>"#,
        class, style, segment.count
    )
}
