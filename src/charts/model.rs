use std::fmt;

use crate::format::{format_percent, format_score};

/// Chart encodings the adapter knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// One stacked series per outcome over a category breakdown.
    StackedBar,
    /// A single ranked series with its top entries emphasized.
    HorizontalBar,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::StackedBar => f.write_str("stacked bar"),
            ChartKind::HorizontalBar => f.write_str("horizontal bar"),
        }
    }
}

/// Direction the bars grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along the bottom, values grow upward.
    Vertical,
    /// Categories down the left side, values grow rightward.
    Horizontal,
}

/// Semantic color slots; the theme decides the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    Highlight,
}

/// Survey outcomes plotted by breakdown charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Satisfied,
    Dissatisfied,
}

impl Outcome {
    pub const ALL: [Outcome; 2] = [Outcome::Satisfied, Outcome::Dissatisfied];

    pub fn key(self) -> &'static str {
        match self {
            Outcome::Satisfied => "satisfied",
            Outcome::Dissatisfied => "dissatisfied",
        }
    }

    /// Color bound to the outcome itself, independent of series position.
    pub fn color(self) -> ColorToken {
        match self {
            Outcome::Satisfied => ColorToken::Primary,
            Outcome::Dissatisfied => ColorToken::Highlight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
    Percent,
    Score,
}

impl ValueUnit {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueUnit::Percent => format_percent(value),
            ValueUnit::Score => format_score(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub unit: ValueUnit,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Uniform(ColorToken),
    PerBar(Vec<ColorToken>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key: &'static str,
    pub values: Vec<f64>,
    pub fill: Fill,
}

impl Series {
    pub fn color_at(&self, index: usize) -> ColorToken {
        match &self.fill {
            Fill::Uniform(token) => *token,
            Fill::PerBar(tokens) => tokens.get(index).copied().unwrap_or(ColorToken::Primary),
        }
    }

    /// Color shown in the legend swatch.
    pub fn legend_color(&self) -> ColorToken {
        self.color_at(0)
    }
}

/// Renderer-agnostic description of one bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub orientation: Orientation,
    pub stacked: bool,
    pub categories: Vec<String>,
    pub value_axis: ValueAxis,
    pub series: Vec<Series>,
    pub show_legend: bool,
}

impl SeriesSpec {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn series(&self, key: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.key == key)
    }

    /// Number of category slots along the category axis.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Canvas layout knobs shared by every bar chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub padding: f32,
    pub grid_lines: usize,
    /// Room reserved left of the plot for category or tick labels.
    pub label_width: f32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            padding: 24.0,
            grid_lines: 4,
            label_width: 48.0,
        }
    }
}

impl ChartLayout {
    /// Widens the left gutter when category names sit beside horizontal bars.
    pub fn for_spec(spec: &SeriesSpec) -> Self {
        let layout = Self::default();
        match spec.orientation {
            Orientation::Vertical => layout,
            Orientation::Horizontal => {
                let longest = spec
                    .categories
                    .iter()
                    .map(|category| category.chars().count())
                    .max()
                    .unwrap_or(0);
                Self {
                    label_width: (longest as f32 * 6.5 + 12.0).clamp(layout.label_width, 200.0),
                    ..layout
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(orientation: Orientation, categories: &[&str]) -> SeriesSpec {
        SeriesSpec {
            orientation,
            stacked: false,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            value_axis: ValueAxis {
                unit: ValueUnit::Score,
                max: 1.0,
            },
            series: Vec::new(),
            show_legend: false,
        }
    }

    #[test]
    fn horizontal_layout_makes_room_for_long_names() {
        let names = ["Type of Travel (Business)"];
        let vertical = ChartLayout::for_spec(&spec(Orientation::Vertical, &names));
        let horizontal = ChartLayout::for_spec(&spec(Orientation::Horizontal, &names));
        assert_eq!(vertical.label_width, ChartLayout::default().label_width);
        assert!(horizontal.label_width > vertical.label_width);
        assert!(horizontal.label_width <= 200.0);
    }

    #[test]
    fn per_bar_fill_falls_back_to_primary() {
        let series = Series {
            key: "importance",
            values: vec![0.3, 0.2],
            fill: Fill::PerBar(vec![ColorToken::Highlight]),
        };
        assert_eq!(series.color_at(0), ColorToken::Highlight);
        assert_eq!(series.color_at(1), ColorToken::Primary);
    }
}
