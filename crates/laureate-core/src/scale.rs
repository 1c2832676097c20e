// File: crates/laureate-core/src/scale.rs
// Summary: Linear year/count scales, ordinal color scale, and the ScaleSpec built from an aggregation.

use log::debug;
use skia_safe as skia;

use crate::aggregate::AggregationTable;
use crate::category::CategoryGroup;
use crate::error::{ChartError, Result};
use crate::grid;

/// Continuous domain -> pixel mapping.
///
/// The range may be inverted (`range.0 > range.1`), which is how the count
/// axis grows upward while pixel Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to pixels. A collapsed domain maps everything to
    /// the middle of the range.
    #[inline]
    pub fn map(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + (t as f32) * (r1 - r0)
    }

    /// Map pixels back into the domain.
    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let rspan = r1 - r0;
        if rspan == 0.0 {
            return d0;
        }
        d0 + ((px - r0) / rspan) as f64 * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    /// Decimal places for the default tick label format at `count` ticks.
    pub fn tick_precision(&self, count: usize) -> usize {
        grid::precision_for_step(grid::tick_step(self.domain.0, self.domain.1, count))
    }
}

/// Ordinal mapping from category groups to palette colors, in domain order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    domain: Vec<CategoryGroup>,
    colors: Vec<skia::Color>,
}

impl ColorScale {
    /// Assign the first `domain.len()` palette colors to `domain`, in order.
    pub fn new(domain: Vec<CategoryGroup>, palette: &[skia::Color]) -> Result<Self> {
        if domain.len() > palette.len() {
            return Err(ChartError::PaletteExhausted { groups: domain.len(), colors: palette.len() });
        }
        let colors = palette[..domain.len()].to_vec();
        Ok(Self { domain, colors })
    }

    pub fn domain(&self) -> &[CategoryGroup] {
        &self.domain
    }

    pub fn color(&self, group: CategoryGroup) -> Option<skia::Color> {
        self.domain
            .iter()
            .position(|g| *g == group)
            .map(|ix| self.colors[ix])
    }

    /// `(group, color)` pairs in domain order.
    pub fn entries(&self) -> impl Iterator<Item = (CategoryGroup, skia::Color)> + '_ {
        self.domain.iter().copied().zip(self.colors.iter().copied())
    }
}

/// Everything needed to project the aggregation onto the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSpec {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: ColorScale,
}

impl ScaleSpec {
    /// Years span `[min, max]` over all groups -> `[0, plot_width]`;
    /// counts span `[0, max + 1]` -> `[plot_height, 0]`.
    pub fn build(
        table: &AggregationTable,
        plot_width: f32,
        plot_height: f32,
        palette: &[skia::Color],
    ) -> Result<Self> {
        let (year_min, year_max) = table.year_extent().ok_or(ChartError::EmptyDataset)?;
        let max_count = table.max_count().ok_or(ChartError::EmptyDataset)?;

        let x = LinearScale::new((year_min as f64, year_max as f64), (0.0, plot_width));
        // +1 headroom keeps the top point off the frame edge.
        let y = LinearScale::new((0.0, max_count as f64 + 1.0), (plot_height, 0.0));
        let color = ColorScale::new(table.groups(), palette)?;

        debug!(
            "scales: years {}..={} over {}px, counts 0..={} over {}px, {} colors",
            year_min,
            year_max,
            plot_width,
            max_count + 1,
            plot_height,
            color.domain().len()
        );
        Ok(Self { x, y, color })
    }
}
