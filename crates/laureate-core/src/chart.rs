// File: crates/laureate-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (SVG, PNG, RGBA, HTML) using Skia canvases.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use skia_safe as skia;

use crate::aggregate::AggregationTable;
use crate::axis::Axis;
use crate::record::Record;
use crate::scale::ScaleSpec;
use crate::scene::{build_scene, DrawCommand, Scene, TextItem};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{plot_size, Insets, HEIGHT, WIDTH};

pub const DEFAULT_TITLE: &str = "Number of Nobel Laureates by Year (STEM vs Non-STEM)";
/// Id of the host page element the SVG is embedded into.
pub const CONTAINER_ID: &str = "lineChart";

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub stroke_width: f32,
    /// Title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            stroke_width: 2.0,
            draw_labels: true,
            title: DEFAULT_TITLE.to_string(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }
}

impl RenderOptions {
    pub fn plot_size(&self) -> (f32, f32) {
        plot_size(self.width, self.height, &self.insets)
    }
}

pub struct Chart {
    pub table: AggregationTable,
}

impl Chart {
    pub fn new(table: AggregationTable) -> Self {
        Self { table }
    }

    pub fn from_records(records: &[Record]) -> Self {
        Self::new(AggregationTable::from_records(records))
    }

    /// Scales for the plot area described by `opts`.
    pub fn scales(&self, opts: &RenderOptions) -> crate::Result<ScaleSpec> {
        let (w, h) = opts.plot_size();
        ScaleSpec::build(&self.table, w, h, opts.theme.palette)
    }

    pub fn scene(&self, opts: &RenderOptions) -> crate::Result<Scene> {
        let scales = self.scales(opts)?;
        Ok(build_scene(&self.table, &scales, opts))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let scene = self.scene(opts)?;
        let mut surface = raster_surface(&scene)?;
        paint_scene(surface.canvas(), &scene);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Raw RGBA8 pixels: `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let scene = self.scene(opts)?;
        let mut surface = raster_surface(&scene)?;
        paint_scene(surface.canvas(), &scene);

        let (w, h) = (scene.width, scene.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Render the chart to an SVG document at `output_svg_path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }

    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let scene = self.scene(opts)?;
        let bounds = skia::Rect::from_wh(scene.width as f32, scene.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        paint_scene(&canvas, &scene);
        let data = canvas.end();
        debug!("svg document: {} bytes", data.as_bytes().len());
        Ok(data.as_bytes().to_vec())
    }

    /// Host page with the SVG inlined into the `#lineChart` container.
    pub fn html_document(&self, opts: &RenderOptions) -> Result<String> {
        let svg = String::from_utf8(self.render_to_svg_bytes(opts)?).context("SVG output is not UTF-8")?;
        Ok(wrap_html(&opts.title, &svg))
    }

    pub fn render_to_html(&self, opts: &RenderOptions, output_html_path: impl AsRef<Path>) -> Result<()> {
        let html = self.html_document(opts)?;
        write_output(output_html_path.as_ref(), html.as_bytes())
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(scene: &Scene) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((scene.width, scene.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", scene.width, scene.height))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Embed `svg` in a minimal page; any XML prolog is dropped since the SVG is inlined.
fn wrap_html(title: &str, svg: &str) -> String {
    let body = match svg.find("<svg") {
        Some(ix) => &svg[ix..],
        None => svg,
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<div id=\"{CONTAINER_ID}\">\n{body}\n</div>\n</body>\n</html>\n",
        title = escape_html(title),
        body = body.trim_end(),
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Replay `scene` onto `canvas`: clear, translate into the plot area, draw commands.
fn paint_scene(canvas: &skia::Canvas, scene: &Scene) {
    canvas.clear(scene.background);
    canvas.save();
    canvas.translate(scene.origin);

    let shaper = TextShaper::new();
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for cmd in scene.commands() {
        match cmd {
            DrawCommand::Polyline { points, color, width } => {
                let Some((&first, rest)) = points.split_first() else { continue };
                let mut pb = skia::PathBuilder::new();
                pb.move_to(first);
                for &p in rest {
                    pb.line_to(p);
                }
                let path = pb.detach();
                stroke.set_color(color);
                stroke.set_stroke_width(width);
                canvas.draw_path(&path, &stroke);
            }
            DrawCommand::Line { from, to, color, width } => {
                stroke.set_color(color);
                stroke.set_stroke_width(width);
                canvas.draw_line(from, to, &stroke);
            }
            DrawCommand::Rect { rect: (l, t, w, h), color } => {
                fill.set_color(color);
                canvas.draw_rect(skia::Rect::from_xywh(l, t, w, h), &fill);
            }
            DrawCommand::Text(item) => draw_text(canvas, &shaper, item),
        }
    }
    canvas.restore();
}

fn draw_text(canvas: &skia::Canvas, shaper: &TextShaper, item: &TextItem) {
    if item.rotation != 0.0 {
        canvas.save();
        canvas.rotate(item.rotation, None);
        shaper.draw_anchored(canvas, &item.text, item.x, item.y, item.size, item.color, item.anchor);
        canvas.restore();
    } else {
        shaper.draw_anchored(canvas, &item.text, item.x, item.y, item.size, item.color, item.anchor);
    }
}
