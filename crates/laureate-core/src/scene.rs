// File: crates/laureate-core/src/scene.rs
// Summary: Backend-agnostic scene: projects an aggregation through its scales into draw commands.
// Notes:
// - All coordinates are plot-local: (0, 0) is the top-left of the plot area.
//   Backends translate by `Scene::origin` before replaying commands.
// - Text positions are baselines. Rotated text is positioned in the frame
//   rotated by `rotation` degrees around the plot origin.

use skia_safe as skia;

use crate::aggregate::AggregationTable;
use crate::axis::{Axis, AxisOrient, Tick, TICK_FONT_SIZE, TICK_LABEL_OFFSET, TICK_SIZE};
use crate::category::CategoryGroup;
use crate::chart::RenderOptions;
use crate::scale::{LinearScale, ScaleSpec};
use crate::types::plot_size;

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const LABEL_FONT_SIZE: f32 = 16.0;
pub const LEGEND_FONT_SIZE: f32 = 12.0;
pub const LEGEND_SWATCH: f32 = 10.0;
pub const LEGEND_ROW_HEIGHT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub anchor: TextAnchor,
    pub color: skia::Color,
    /// Degrees, applied around the plot origin before positioning.
    pub rotation: f32,
}

impl TextItem {
    fn new(text: impl Into<String>, x: f32, y: f32, size: f32, anchor: TextAnchor, color: skia::Color) -> Self {
        Self { text: text.into(), x, y, size, anchor, color, rotation: 0.0 }
    }
}

/// One open polyline per category group, points ordered by ascending year.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub group: CategoryGroup,
    pub color: skia::Color,
    pub stroke_width: f32,
    pub points: Vec<(f32, f32)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisGeometry {
    pub orient: AxisOrient,
    /// Pixel extent along the axis.
    pub range: (f32, f32),
    /// Cross-axis position of the axis line (y for bottom, x for left).
    pub offset: f32,
    pub ticks: Vec<Tick>,
    /// Empty when labels are disabled.
    pub tick_labels: Vec<TextItem>,
    pub line_color: skia::Color,
    pub tick_color: skia::Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub group: CategoryGroup,
    pub color: skia::Color,
    /// (left, top, width, height)
    pub swatch: (f32, f32, f32, f32),
    pub label: Option<TextItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    /// Top-left of the plot area on the canvas.
    pub origin: (f32, f32),
    pub plot_size: (f32, f32),
    pub background: skia::Color,
    pub lines: Vec<LineSeries>,
    pub x_axis: AxisGeometry,
    pub y_axis: AxisGeometry,
    /// Title and axis labels.
    pub labels: Vec<TextItem>,
    pub legend: Vec<LegendEntry>,
}

/// Flattened drawing primitive, in replay order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<'a> {
    Polyline { points: &'a [(f32, f32)], color: skia::Color, width: f32 },
    Line { from: (f32, f32), to: (f32, f32), color: skia::Color, width: f32 },
    Rect { rect: (f32, f32, f32, f32), color: skia::Color },
    Text(&'a TextItem),
}

/// Project `table` through `scales` into a scene sized by `opts`.
pub fn build_scene(table: &AggregationTable, scales: &ScaleSpec, opts: &RenderOptions) -> Scene {
    let (plot_w, plot_h) = plot_size(opts.width, opts.height, &opts.insets);
    let theme = &opts.theme;

    let lines = scales
        .color
        .entries()
        .map(|(group, color)| LineSeries {
            group,
            color,
            stroke_width: opts.stroke_width,
            points: table
                .series(group)
                .map(|(year, count)| (scales.x.map(year as f64), scales.y.map(count as f64)))
                .collect(),
        })
        .collect();

    let x_axis = axis_geometry(&opts.x_axis, &scales.x, plot_h, opts);
    let y_axis = axis_geometry(&opts.y_axis, &scales.y, 0.0, opts);

    let mut labels = Vec::new();
    if opts.draw_labels {
        labels.push(TextItem::new(
            opts.title.clone(),
            plot_w / 2.0,
            -20.0,
            TITLE_FONT_SIZE,
            TextAnchor::Middle,
            theme.text,
        ));
        labels.push(TextItem::new(
            opts.x_axis.label.clone(),
            plot_w / 2.0,
            plot_h + 40.0,
            LABEL_FONT_SIZE,
            TextAnchor::Middle,
            theme.text,
        ));
        let mut y_label = TextItem::new(
            opts.y_axis.label.clone(),
            -plot_h / 2.0,
            -50.0,
            LABEL_FONT_SIZE,
            TextAnchor::Middle,
            theme.text,
        );
        y_label.rotation = -90.0;
        labels.push(y_label);
    }

    let legend = scales
        .color
        .entries()
        .enumerate()
        .map(|(i, (group, color))| {
            let top = i as f32 * LEGEND_ROW_HEIGHT;
            LegendEntry {
                group,
                color,
                swatch: (plot_w - 20.0, top, LEGEND_SWATCH, LEGEND_SWATCH),
                label: opts.draw_labels.then(|| {
                    TextItem::new(group.label(), plot_w - 25.0, top + 9.0, LEGEND_FONT_SIZE, TextAnchor::End, theme.text)
                }),
            }
        })
        .collect();

    Scene {
        width: opts.width,
        height: opts.height,
        origin: (opts.insets.left as f32, opts.insets.top as f32),
        plot_size: (plot_w, plot_h),
        background: theme.background,
        lines,
        x_axis,
        y_axis,
        labels,
        legend,
    }
}

fn axis_geometry(axis: &Axis, scale: &LinearScale, offset: f32, opts: &RenderOptions) -> AxisGeometry {
    let (r0, r1) = scale.range;
    let mut geometry = AxisGeometry {
        orient: axis.orient,
        range: (r0.min(r1), r0.max(r1)),
        offset,
        ticks: axis.ticks(scale),
        tick_labels: Vec::new(),
        line_color: opts.theme.axis_line,
        tick_color: opts.theme.tick,
    };
    if opts.draw_labels {
        geometry.tick_labels = geometry.layout_tick_labels(opts.theme.tick_label);
    }
    geometry
}

impl AxisGeometry {
    /// Canvas point for a position `along` the axis at `across` from the plot edge.
    fn at(&self, along: f32, across: f32) -> (f32, f32) {
        match self.orient {
            AxisOrient::Bottom => (along, across),
            AxisOrient::Left => (across, along),
        }
    }

    /// Direction tick marks grow away from the plot.
    fn tick_extent(&self) -> f32 {
        match self.orient {
            AxisOrient::Bottom => TICK_SIZE,
            AxisOrient::Left => -TICK_SIZE,
        }
    }

    fn push_commands<'a>(&'a self, out: &mut Vec<DrawCommand<'a>>) {
        let (a, b) = self.range;
        let o = self.offset;
        let tick = self.tick_extent();

        // Domain line with outer ticks at both ends.
        out.push(DrawCommand::Line { from: self.at(a, o), to: self.at(b, o), color: self.line_color, width: 1.0 });
        for end in [a, b] {
            out.push(DrawCommand::Line {
                from: self.at(end, o),
                to: self.at(end, o + tick),
                color: self.line_color,
                width: 1.0,
            });
        }
        for t in &self.ticks {
            out.push(DrawCommand::Line {
                from: self.at(t.px, o),
                to: self.at(t.px, o + tick),
                color: self.tick_color,
                width: 1.0,
            });
        }
        out.extend(self.tick_labels.iter().map(DrawCommand::Text));
    }

    /// Baseline-positioned labels, offset from the axis line like d3 axes.
    fn layout_tick_labels(&self, color: skia::Color) -> Vec<TextItem> {
        self.ticks
            .iter()
            .map(|t| match self.orient {
                AxisOrient::Bottom => TextItem::new(
                    t.label.clone(),
                    t.px,
                    self.offset + TICK_LABEL_OFFSET + 0.71 * TICK_FONT_SIZE,
                    TICK_FONT_SIZE,
                    TextAnchor::Middle,
                    color,
                ),
                AxisOrient::Left => TextItem::new(
                    t.label.clone(),
                    self.offset - TICK_LABEL_OFFSET,
                    t.px + 0.32 * TICK_FONT_SIZE,
                    TICK_FONT_SIZE,
                    TextAnchor::End,
                    color,
                ),
            })
            .collect()
    }
}

impl Scene {
    /// Replay order: series lines, x axis, y axis, title/labels, legend.
    pub fn commands(&self) -> Vec<DrawCommand<'_>> {
        let mut out = Vec::new();
        for line in &self.lines {
            out.push(DrawCommand::Polyline { points: &line.points, color: line.color, width: line.stroke_width });
        }
        self.x_axis.push_commands(&mut out);
        self.y_axis.push_commands(&mut out);
        out.extend(self.labels.iter().map(DrawCommand::Text));
        for entry in &self.legend {
            out.push(DrawCommand::Rect { rect: entry.swatch, color: entry.color });
            if let Some(label) = &entry.label {
                out.push(DrawCommand::Text(label));
            }
        }
        out
    }
}
