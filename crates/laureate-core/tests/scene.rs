// File: crates/laureate-core/tests/scene.rs
// Purpose: Scene projection: line geometry, legend layout, colors and axis ticks.

use laureate_core::theme::CATEGORY10;
use laureate_core::{
    AggregationTable, AxisOrient, CategoryGroup, Chart, DrawCommand, Record, RenderOptions, TextAnchor,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn three_row_chart() -> Chart {
    Chart::from_records(&[
        Record::new(2000, "physics", "A"),
        Record::new(2000, "literature", "B"),
        Record::new(2001, "chemistry", "C"),
    ])
}

#[test]
fn small_scenario_lines_and_legend() {
    let scene = three_row_chart().scene(&RenderOptions::default()).expect("scene");

    assert_eq!(scene.lines.len(), 2);
    let stem = &scene.lines[0];
    assert_eq!(stem.group, CategoryGroup::Stem);
    assert_eq!(stem.points.len(), 2);
    // 2000 -> x 0, 2001 -> x 700; count 1 of 0..2 -> y 145.
    assert!(approx(stem.points[0].0, 0.0) && approx(stem.points[0].1, 145.0));
    assert!(approx(stem.points[1].0, 700.0) && approx(stem.points[1].1, 145.0));
    assert_eq!(stem.stroke_width, 2.0);

    let non_stem = &scene.lines[1];
    assert_eq!(non_stem.group, CategoryGroup::NonStem);
    assert_eq!(non_stem.points.len(), 1);

    let legend_groups = scene.legend.iter().map(|e| e.group).collect::<Vec<_>>();
    assert_eq!(legend_groups, vec![CategoryGroup::Stem, CategoryGroup::NonStem]);
}

#[test]
fn line_and_legend_colors_agree() {
    let scene = three_row_chart().scene(&RenderOptions::default()).expect("scene");
    for (i, (line, entry)) in scene.lines.iter().zip(&scene.legend).enumerate() {
        assert_eq!(line.group, entry.group);
        assert_eq!(line.color, entry.color);
        assert_eq!(line.color, CATEGORY10[i]);
    }
}

#[test]
fn legend_stacks_in_top_right() {
    let scene = three_row_chart().scene(&RenderOptions::default()).expect("scene");
    assert_eq!(scene.legend[0].swatch, (680.0, 0.0, 10.0, 10.0));
    assert_eq!(scene.legend[1].swatch, (680.0, 20.0, 10.0, 10.0));

    let label = scene.legend[1].label.as_ref().expect("legend label");
    assert_eq!(label.text, "Non-STEM");
    assert_eq!((label.x, label.y), (675.0, 29.0));
    assert_eq!(label.anchor, TextAnchor::End);
}

#[test]
fn title_and_axis_labels() {
    let scene = three_row_chart().scene(&RenderOptions::default()).expect("scene");
    assert_eq!(scene.origin, (70.0, 50.0));
    assert_eq!(scene.labels.len(), 3);

    let title = &scene.labels[0];
    assert_eq!(title.text, "Number of Nobel Laureates by Year (STEM vs Non-STEM)");
    assert_eq!((title.x, title.y, title.size), (350.0, -20.0, 16.0));

    let x_label = &scene.labels[1];
    assert_eq!(x_label.text, "Year");
    assert_eq!((x_label.x, x_label.y, x_label.size), (350.0, 330.0, 16.0));

    let y_label = &scene.labels[2];
    assert_eq!(y_label.text, "Number of Laureates");
    assert_eq!((y_label.x, y_label.y, y_label.rotation), (-145.0, -50.0, -90.0));
    assert_eq!(y_label.size, title.size, "axis labels share the title size");
    assert_eq!(y_label.anchor, TextAnchor::Middle);
}

#[test]
fn axis_ticks_use_their_formats() {
    let records = (1901..=2000).map(|y| Record::new(y, "peace", "x")).collect::<Vec<_>>();
    let scene = Chart::from_records(&records).scene(&RenderOptions::default()).expect("scene");

    assert_eq!(scene.x_axis.orient, AxisOrient::Bottom);
    assert_eq!(scene.x_axis.offset, 290.0);
    let x_labels = scene.x_axis.ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
    assert_eq!(x_labels.first(), Some(&"1910"));
    assert_eq!(x_labels.last(), Some(&"2000"));

    // Every year has exactly one record: count domain 0..2 in 0.2 steps.
    assert_eq!(scene.y_axis.orient, AxisOrient::Left);
    let y_labels = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
    assert_eq!(y_labels[..3], ["0.0", "0.2", "0.4"]);
    assert_eq!(y_labels.last(), Some(&"2.0"));
    assert_eq!(scene.y_axis.tick_labels.len(), scene.y_axis.ticks.len());
}

#[test]
fn large_counts_are_grouped() {
    let table = AggregationTable::from_pairs((0..2400).map(|_| (CategoryGroup::Stem, 2000)));
    let scene = Chart::new(table).scene(&RenderOptions::default()).expect("scene");
    let labels = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
    assert!(labels.contains(&"2,000"), "{labels:?}");
}

#[test]
fn labels_can_be_disabled() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let scene = three_row_chart().scene(&opts).expect("scene");
    assert!(scene.labels.is_empty());
    assert!(scene.legend.iter().all(|e| e.label.is_none()));
    assert!(scene.x_axis.tick_labels.is_empty());
    assert!(!scene.commands().iter().any(|c| matches!(c, DrawCommand::Text(_))));
    // Swatches are still drawn.
    assert_eq!(scene.commands().iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count(), 2);
}

#[test]
fn lines_are_drawn_first_in_group_order() {
    let scene = three_row_chart().scene(&RenderOptions::default()).expect("scene");
    let commands = scene.commands();
    match (&commands[0], &commands[1]) {
        (
            DrawCommand::Polyline { points: a, color: ca, .. },
            DrawCommand::Polyline { points: b, color: cb, .. },
        ) => {
            assert_eq!(a.len(), 2);
            assert_eq!(b.len(), 1);
            assert_eq!(*ca, CATEGORY10[0]);
            assert_eq!(*cb, CATEGORY10[1]);
        }
        other => panic!("unexpected leading commands: {other:?}"),
    }
}

#[test]
fn empty_chart_has_no_scene() {
    let chart = Chart::from_records(&[]);
    assert!(matches!(
        chart.scene(&RenderOptions::default()),
        Err(laureate_core::ChartError::EmptyDataset)
    ));
}
