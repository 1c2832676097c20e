// File: crates/laureate-core/src/axis.rs
// Summary: Axis model with orientation, tick formatting and tick layout.

use crate::grid;
use crate::scale::LinearScale;

/// Ticks requested per axis when none is given.
pub const DEFAULT_TICK_COUNT: usize = 10;
/// Length of tick marks, in pixels.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between the axis line and tick labels (tick size + padding).
pub const TICK_LABEL_OFFSET: f32 = 9.0;
pub const TICK_FONT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded integers without digit grouping; used for years.
    Integer,
    /// Fixed precision derived from the tick step, comma-grouped.
    Default,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis, in plot pixels.
    pub px: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub orient: AxisOrient,
    pub format: TickFormat,
    pub tick_count: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, orient: AxisOrient, format: TickFormat) -> Self {
        Self { label: label.into(), orient, format, tick_count: DEFAULT_TICK_COUNT }
    }

    pub fn default_x() -> Self {
        Self::new("Year", AxisOrient::Bottom, TickFormat::Integer)
    }

    pub fn default_y() -> Self {
        Self::new("Number of Laureates", AxisOrient::Left, TickFormat::Default)
    }

    /// Lay out ticks for `scale`, labelled with this axis' format.
    pub fn ticks(&self, scale: &LinearScale) -> Vec<Tick> {
        let precision = scale.tick_precision(self.tick_count);
        scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick {
                value,
                px: scale.map(value),
                label: match self.format {
                    TickFormat::Integer => grid::format_integer(value),
                    TickFormat::Default => grid::format_grouped(value, precision),
                },
            })
            .collect()
    }
}
