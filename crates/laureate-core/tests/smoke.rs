// File: crates/laureate-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing SVG, PNG and HTML.

use laureate_core::{load_csv_reader, Chart, ChartError, RenderOptions};

const CSV: &str = "\
year,category,fullname
2000,physics,Zhores Alferov
2000,literature,Gao Xingjian
2001,chemistry,William S. Knowles
2001,peace,Kofi Annan
2001,medicine,Paul Nurse
";

fn chart() -> Chart {
    Chart::from_records(&load_csv_reader(CSV.as_bytes()).expect("load"))
}

#[test]
fn render_smoke_png() {
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart().render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart().render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (800, 400));
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is page background (opaque white in the light theme).
    assert_eq!(&px[..4], &[255, 255, 255, 255]);
}

#[test]
fn series_lines_are_stroked() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart().render_to_rgba8(&opts).expect("rgba render");

    // Column through the middle of the plot crosses both series.
    let x = w as usize / 2 + 20;
    let column = (0..h as usize).map(|y| &px[y * stride + x * 4..y * stride + x * 4 + 4]).collect::<Vec<_>>();
    let blue = column.iter().any(|p| p[2] > 150 && p[0] < 100);
    let orange = column.iter().any(|p| p[0] > 200 && p[1] > 80 && p[2] < 80);
    assert!(blue, "STEM line missing from column {x}");
    assert!(orange, "Non-STEM line missing from column {x}");
}

#[test]
fn render_smoke_svg() {
    let bytes = chart().render_to_svg_bytes(&RenderOptions::default()).expect("svg");
    let svg = String::from_utf8(bytes).expect("utf8");
    assert!(svg.contains("<svg"), "not an svg document");
    assert!(svg.contains("width=\"800\""), "{}", &svg[..svg.len().min(300)]);
    assert!(svg.contains("height=\"400\""));
    assert!(svg.contains("<path"), "series lines should be emitted as paths");

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart().render_to_svg(&RenderOptions::default(), &out).expect("write svg");
    assert!(std::fs::metadata(&out).expect("svg exists").len() > 0);
}

#[test]
fn render_smoke_html() {
    let html = chart().html_document(&RenderOptions::default()).expect("html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div id=\"lineChart\">"));
    assert!(html.contains("<svg"));
    assert!(!html.contains("<?xml"), "xml prolog should not be inlined");

    let out = std::path::PathBuf::from("target/test_out/smoke.html");
    chart().render_to_html(&RenderOptions::default(), &out).expect("write html");
    assert!(out.exists());
}

#[test]
fn empty_dataset_renders_nothing() {
    let chart = Chart::from_records(&[]);
    let out = std::path::PathBuf::from("target/test_out/empty.svg");
    let _ = std::fs::remove_file(&out);

    let err = chart.render_to_svg(&RenderOptions::default(), &out).unwrap_err();
    assert!(matches!(err.downcast_ref::<ChartError>(), Some(ChartError::EmptyDataset)), "{err:#}");
    assert!(!out.exists(), "no output should be written");
}
