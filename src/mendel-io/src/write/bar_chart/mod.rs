use std::fmt::{self, Display, Formatter};

/// Width (in characters) of the longest bar.
pub const BAR_WIDTH: usize = 50;

const BAR_CHAR: char = '#';

/// A titled, horizontal text bar chart of `category -> count` values.
///
/// Bars are rendered in insertion order, and scaled against the highest count, so that the
/// longest bar spans `BAR_WIDTH` characters. Non-zero counts always render at least one character.
///
/// ```text
/// Gene1 Genotype Distribution (All Children)
/// ==========================================
/// Aa | ################################################## 152
/// AA | ##########################                         77
/// aa | ########################                           71
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    title: String,
    bars : Vec<(String, usize)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self{title: title.into(), bars: Vec::new()}
    }

    pub fn push(&mut self, category: impl Display, count: usize) {
        self.bars.push((category.to_string(), count));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bars(&self) -> &[(String, usize)] {
        &self.bars
    }

    pub fn total(&self) -> usize {
        self.bars.iter().map(|(_, count)| count).sum()
    }

    fn bar_len(count: usize, max: usize) -> usize {
        match max {
            0 => 0,
            _ => (count * BAR_WIDTH + max - 1) / max,
        }
    }
}

impl Display for BarChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(f, "{}", "=".repeat(self.title.chars().count()))?;

        let label_len = self.bars.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        let max       = self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let width     = BAR_WIDTH;
        for (label, count) in &self.bars {
            let bar = BAR_CHAR.to_string().repeat(Self::bar_len(*count, max));
            write!(f, "\n{label: <label_len$} | {bar: <width$} {count}")?;
        }
        Ok(())
    }
}
