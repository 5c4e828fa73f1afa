pub mod adapter;
pub mod bar;
pub mod model;

pub use adapter::{ChartAdapter, DEFAULT_EMPHASIS_RANK};
pub use bar::BarChart;
pub use model::{
    ChartKind, ChartLayout, ColorToken, Fill, Orientation, Outcome, Series, SeriesSpec, ValueAxis,
    ValueUnit,
};
