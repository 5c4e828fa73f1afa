use iced::alignment::Horizontal;
use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Size, Theme};

use super::model::{ChartLayout, Orientation, SeriesSpec};
use crate::theme::token_color;

const LEGEND_HEIGHT: f32 = 22.0;
const AXIS_LABEL_HEIGHT: f32 = 18.0;
const BAND_FILL: f32 = 0.7;

/// Canvas program drawing one [`SeriesSpec`], stacked or grouped, in either orientation.
pub struct BarChart {
    cache: Cache,
    spec: SeriesSpec,
    layout: ChartLayout,
}

impl BarChart {
    pub fn new(spec: SeriesSpec) -> Self {
        let layout = ChartLayout::for_spec(&spec);
        Self {
            cache: Cache::new(),
            spec,
            layout,
        }
    }

    fn plot_area(&self, size: Size) -> Option<Rectangle> {
        let padding = self.layout.padding;
        let legend = if self.spec.show_legend {
            LEGEND_HEIGHT
        } else {
            0.0
        };
        let left = padding + self.layout.label_width;
        let top = padding;
        let right = size.width - padding;
        let bottom = size.height - padding - AXIS_LABEL_HEIGHT - legend;

        if right <= left || bottom <= top {
            return None;
        }

        Some(Rectangle {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        })
    }

    /// Category slot under `position`, if any.
    fn hit_test(&self, plot: Rectangle, position: Point) -> Option<usize> {
        if !plot.contains(position) || self.spec.is_empty() {
            return None;
        }
        let (offset, extent) = match self.spec.orientation {
            Orientation::Vertical => (position.x - plot.x, plot.width),
            Orientation::Horizontal => (position.y - plot.y, plot.height),
        };
        let band = extent / self.spec.len() as f32;
        let index = (offset / band).floor() as usize;
        (index < self.spec.len()).then_some(index)
    }

    fn draw_axes(&self, frame: &mut Frame, plot: Rectangle, theme: &Theme) {
        let palette = theme.extended_palette();
        let axis_color = palette.background.weak.color;
        let bottom = plot.y + plot.height;
        let right = plot.x + plot.width;
        let unit = self.spec.value_axis.unit;
        let max = self.spec.value_axis.max as f32;
        let lines = self.layout.grid_lines.max(1);

        for step in 0..=lines {
            let fraction = step as f32 / lines as f32;
            let label = unit.format(f64::from(max * fraction));

            match self.spec.orientation {
                Orientation::Vertical => {
                    let y = bottom - fraction * plot.height;
                    frame.stroke(
                        &Path::line(Point::new(plot.x, y), Point::new(right, y)),
                        Stroke::default().with_width(1.0).with_color(axis_color),
                    );
                    frame.fill_text(Text {
                        content: label,
                        position: Point::new(plot.x - 6.0, y - 6.0),
                        color: palette.background.base.text,
                        size: 11.0.into(),
                        align_x: Horizontal::Right.into(),
                        ..Text::default()
                    });
                }
                Orientation::Horizontal => {
                    let x = plot.x + fraction * plot.width;
                    frame.stroke(
                        &Path::line(Point::new(x, plot.y), Point::new(x, bottom)),
                        Stroke::default().with_width(1.0).with_color(axis_color),
                    );
                    frame.fill_text(Text {
                        content: label,
                        position: Point::new(x, bottom + 6.0),
                        color: palette.background.base.text,
                        size: 11.0.into(),
                        align_x: Horizontal::Center.into(),
                        ..Text::default()
                    });
                }
            }
        }
    }

    fn draw_bars(&self, frame: &mut Frame, plot: Rectangle, theme: &Theme) {
        let palette = theme.extended_palette();
        let max = self.spec.value_axis.max.max(f64::EPSILON) as f32;
        let bottom = plot.y + plot.height;
        let extent = match self.spec.orientation {
            Orientation::Vertical => plot.width,
            Orientation::Horizontal => plot.height,
        };
        let length = match self.spec.orientation {
            Orientation::Vertical => plot.height,
            Orientation::Horizontal => plot.width,
        };
        let band = extent / self.spec.len() as f32;
        let groups = if self.spec.stacked {
            1
        } else {
            self.spec.series.len().max(1)
        };
        let thickness = band * BAND_FILL / groups as f32;
        let inset = band * (1.0 - BAND_FILL) / 2.0;

        for (index, category) in self.spec.categories.iter().enumerate() {
            let slot = index as f32 * band + inset;
            let mut base = 0.0_f32;

            for (group, series) in self.spec.series.iter().enumerate() {
                let Some(value) = series.values.get(index) else {
                    continue;
                };
                let start = if self.spec.stacked { base } else { 0.0 };
                let span = (*value as f32 / max) * length;
                let lane = if self.spec.stacked {
                    slot
                } else {
                    slot + group as f32 * thickness
                };

                let rect = match self.spec.orientation {
                    Orientation::Vertical => Path::rectangle(
                        Point::new(plot.x + lane, bottom - start - span),
                        Size::new(thickness, span),
                    ),
                    Orientation::Horizontal => Path::rectangle(
                        Point::new(plot.x + start, plot.y + lane),
                        Size::new(span, thickness),
                    ),
                };
                frame.fill(&rect, token_color(series.color_at(index)));
                base += span;
            }

            let center = index as f32 * band + band / 2.0;
            let (position, align_x) = match self.spec.orientation {
                Orientation::Vertical => {
                    (Point::new(plot.x + center, bottom + 6.0), Horizontal::Center)
                }
                Orientation::Horizontal => (
                    Point::new(plot.x - 8.0, plot.y + center - 6.0),
                    Horizontal::Right,
                ),
            };
            frame.fill_text(Text {
                content: category.clone(),
                position,
                color: palette.background.base.text,
                size: 11.0.into(),
                align_x: align_x.into(),
                ..Text::default()
            });
        }
    }

    fn draw_legend(&self, frame: &mut Frame, size: Size, theme: &Theme) {
        let palette = theme.extended_palette();
        let y = size.height - self.layout.padding - LEGEND_HEIGHT / 2.0;
        let mut x = self.layout.padding + self.layout.label_width;

        for series in &self.spec.series {
            let swatch = Path::rectangle(Point::new(x, y - 5.0), Size::new(10.0, 10.0));
            frame.fill(&swatch, token_color(series.legend_color()));
            frame.fill_text(Text {
                content: series.key.to_owned(),
                position: Point::new(x + 14.0, y - 7.0),
                color: palette.background.base.text,
                size: 12.0.into(),
                ..Text::default()
            });
            x += 24.0 + series.key.len() as f32 * 7.0;
        }
    }
}

impl canvas::Program<crate::message::Message> for BarChart {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<crate::message::Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        if self.spec.is_empty() {
            return geometries;
        }
        let Some(plot) = self.plot_area(bounds.size()) else {
            return geometries;
        };

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            self.draw_axes(frame, plot, theme);
            self.draw_bars(frame, plot, theme);
            if self.spec.show_legend {
                self.draw_legend(frame, bounds.size(), theme);
            }
        });
        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if let Some(index) = self.hit_test(plot, cursor_pos) {
                let mut overlay = Frame::new(renderer, bounds.size());
                let palette = theme.extended_palette();
                let unit = self.spec.value_axis.unit;

                let mut lines = vec![self.spec.categories[index].clone()];
                lines.extend(self.spec.series.iter().filter_map(|series| {
                    series
                        .values
                        .get(index)
                        .map(|value| format!("{}: {}", series.key, unit.format(*value)))
                }));

                let longest = lines.iter().map(|line| line.len()).max().unwrap_or(0);
                let width = longest as f32 * 7.0 + 16.0;
                let height = lines.len() as f32 * 16.0 + 8.0;
                let origin = Point::new(
                    (cursor_pos.x + 12.0).min(bounds.width - width).max(0.0),
                    (cursor_pos.y - height - 8.0).max(0.0),
                );

                overlay.fill(
                    &Path::rectangle(origin, Size::new(width, height)),
                    palette.background.strong.color,
                );
                for (row, line) in lines.into_iter().enumerate() {
                    overlay.fill_text(Text {
                        content: line,
                        position: Point::new(origin.x + 8.0, origin.y + 4.0 + row as f32 * 16.0),
                        color: palette.background.strong.text,
                        size: 12.0.into(),
                        ..Text::default()
                    });
                }
                geometries.push(overlay.into_geometry());
            }
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
