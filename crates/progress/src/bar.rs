//! Progress bar layout.
//!
//! Turns a [`StatsRecord`] into up to four contiguous segments laid out left
//! to right as done, failed, waiting, blocking.

use serde::Serialize;
use zettel_core::StatsRecord;

/// Display size hint of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarSize {
    /// Tiny
    Tiny,
    /// Small, used inside segment lists
    Small,
    /// Standard, used for whole projects
    #[default]
    Standard,
    /// Large
    Large,
    /// Big
    Big,
}

impl BarSize {
    /// CSS class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarSize::Tiny => "tiny",
            BarSize::Small => "small",
            BarSize::Standard => "standard",
            BarSize::Large => "large",
            BarSize::Big => "big",
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BarSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tiny" => Ok(BarSize::Tiny),
            "small" => Ok(BarSize::Small),
            "standard" => Ok(BarSize::Standard),
            "large" => Ok(BarSize::Large),
            "big" => Ok(BarSize::Big),
            other => Err(format!("unknown bar size: {}", other)),
        }
    }
}

/// What a segment counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Done tasks (grey)
    Done,
    /// Failed tasks (red)
    Failed,
    /// Waiting tasks (yellow)
    Waiting,
    /// Blocking tasks (orange)
    Blocking,
}

impl Category {
    /// Left-to-right order.
    pub const ALL: [Category; 4] = [
        Category::Done,
        Category::Failed,
        Category::Waiting,
        Category::Blocking,
    ];

    /// Colour name.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Done => "grey",
            Category::Failed => "red",
            Category::Waiting => "yellow",
            Category::Blocking => "orange",
        }
    }

    /// Counter in `stats` this category reads.
    pub fn count(&self, stats: &StatsRecord) -> usize {
        match self {
            Category::Done => stats.done,
            Category::Failed => stats.failed,
            Category::Waiting => stats.waiting,
            Category::Blocking => stats.blocking,
        }
    }
}

/// `count` as a share of `total`, rounded half up.
///
/// An empty total yields 0.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * count as u64 + total as u64) / (2 * total as u64)) as u32
}

/// One coloured piece of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Category shown
    pub category: Category,
    /// Width in percent
    pub width: u32,
    /// Raw task count used as label
    pub count: usize,
    /// No segment touches the left side
    pub rounded_left: bool,
    /// No segment touches the right side
    pub rounded_right: bool,
}

/// Layout of a segmented progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressBar {
    size: BarSize,
    stats: StatsRecord,
    segments: Vec<Segment>,
}

impl ProgressBar {
    /// Lay out the bar for `stats`.
    pub fn layout(size: BarSize, stats: &StatsRecord) -> Self {
        let emitted: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| Self::is_emitted(*c, stats))
            .collect();

        let last = emitted.len().saturating_sub(1);
        let segments = emitted
            .iter()
            .enumerate()
            .map(|(i, &category)| {
                let count = category.count(stats);
                Segment {
                    category,
                    width: percentage(count, stats.tasks),
                    count,
                    rounded_left: i == 0,
                    rounded_right: i == last,
                }
            })
            .collect();

        Self {
            size,
            stats: *stats,
            segments,
        }
    }

    /// Non-empty categories are shown. Done is also shown when nothing else
    /// is, so an empty record still gets a bar.
    fn is_emitted(category: Category, stats: &StatsRecord) -> bool {
        match category {
            Category::Done => {
                stats.done > 0 || (stats.failed == 0 && stats.waiting == 0 && stats.blocking == 0)
            }
            other => other.count(stats) > 0,
        }
    }

    /// Display size.
    pub fn size(&self) -> BarSize {
        self.size
    }

    /// Segments, left to right.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment for `category`, if shown.
    pub fn segment(&self, category: Category) -> Option<&Segment> {
        self.segments.iter().find(|s| s.category == category)
    }

    /// Comma-joined percentages of the non-empty categories, `"0"` if none.
    pub fn data_percent(&self) -> String {
        let parts: Vec<String> = Category::ALL
            .iter()
            .filter(|c| c.count(&self.stats) > 0)
            .map(|c| percentage(c.count(&self.stats), self.stats.tasks).to_string())
            .collect();

        if parts.is_empty() {
            "0".to_string()
        } else {
            parts.join(",")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tasks: usize, done: usize, failed: usize, waiting: usize, blocking: usize) -> StatsRecord {
        StatsRecord {
            tasks,
            done,
            failed,
            waiting,
            blocking,
            ..Default::default()
        }
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(3, 8), 38); // 37.5
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 200), 1); // 0.5
        assert_eq!(percentage(0, 7), 0);
        assert_eq!(percentage(7, 7), 100);
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_scenario_four_segments() {
        let bar = ProgressBar::layout(BarSize::Standard, &record(10, 6, 1, 2, 1));
        let segments = bar.segments();
        assert_eq!(segments.len(), 4);

        let widths: Vec<u32> = segments.iter().map(|s| s.width).collect();
        assert_eq!(widths, vec![60, 10, 20, 10]);
        let labels: Vec<usize> = segments.iter().map(|s| s.count).collect();
        assert_eq!(labels, vec![6, 1, 2, 1]);

        let grey = bar.segment(Category::Done).unwrap();
        assert!(grey.rounded_left && !grey.rounded_right);
        let red = bar.segment(Category::Failed).unwrap();
        assert!(!red.rounded_left && !red.rounded_right);
        let orange = bar.segment(Category::Blocking).unwrap();
        assert!(!orange.rounded_left && orange.rounded_right);

        assert_eq!(bar.data_percent(), "60,10,20,10");
    }

    #[test]
    fn test_empty_record_single_grey_segment() {
        let bar = ProgressBar::layout(BarSize::Small, &StatsRecord::default());
        assert_eq!(bar.segments().len(), 1);

        let grey = bar.segments()[0];
        assert_eq!(grey.category, Category::Done);
        assert_eq!(grey.width, 0);
        assert_eq!(grey.count, 0);
        assert!(grey.rounded_left && grey.rounded_right);
        assert_eq!(bar.data_percent(), "0");
    }

    #[test]
    fn test_open_tasks_only_still_renders_grey() {
        let bar = ProgressBar::layout(BarSize::Small, &record(5, 0, 0, 0, 0));
        assert_eq!(bar.segments().len(), 1);
        assert_eq!(bar.segments()[0].category, Category::Done);
        assert_eq!(bar.segments()[0].width, 0);
    }

    #[test]
    fn test_adjacency_skips_missing_categories() {
        // failed is zero, waiting is not: grey still touches something on the right.
        let bar = ProgressBar::layout(BarSize::Small, &record(4, 2, 0, 1, 0));
        assert_eq!(bar.segments().len(), 2);

        let grey = bar.segment(Category::Done).unwrap();
        assert!(grey.rounded_left && !grey.rounded_right);
        let yellow = bar.segment(Category::Waiting).unwrap();
        assert!(!yellow.rounded_left && yellow.rounded_right);
        assert!(bar.segment(Category::Failed).is_none());
    }

    #[test]
    fn test_no_done_starts_with_first_non_empty() {
        let bar = ProgressBar::layout(BarSize::Small, &record(4, 0, 1, 0, 3));
        let categories: Vec<Category> = bar.segments().iter().map(|s| s.category).collect();
        assert_eq!(categories, vec![Category::Failed, Category::Blocking]);

        let red = bar.segment(Category::Failed).unwrap();
        assert!(red.rounded_left && !red.rounded_right);
        let orange = bar.segment(Category::Blocking).unwrap();
        assert!(!orange.rounded_left && orange.rounded_right);
    }

    #[test]
    fn test_widths_sum_to_hundred_when_disjoint() {
        for (done, failed, waiting, blocking) in [(1, 1, 1, 0), (2, 2, 2, 1), (5, 1, 0, 1), (1, 0, 0, 2)] {
            let tasks = done + failed + waiting + blocking;
            let bar = ProgressBar::layout(BarSize::Small, &record(tasks, done, failed, waiting, blocking));
            let total: u32 = bar.segments().iter().map(|s| s.width).sum();
            let slack = bar.segments().len() as u32;
            assert!(total.abs_diff(100) <= slack, "{} for {:?}", total, (done, failed, waiting, blocking));
        }
    }

    #[test]
    fn test_bar_size_parse() {
        assert_eq!("small".parse::<BarSize>().unwrap(), BarSize::Small);
        assert_eq!("Standard".parse::<BarSize>().unwrap(), BarSize::Standard);
        assert!("huge".parse::<BarSize>().is_err());
        assert_eq!(BarSize::default(), BarSize::Standard);
    }
}
