use chartwire::markup::find_placeholders;
use chartwire::{ChartDefaults, ChartKind, Error, Placeholder, build_chart};

fn placeholder(html: &str) -> Placeholder {
    let mut found = find_placeholders(html);
    assert_eq!(found.len(), 1, "expected exactly one placeholder");
    found.remove(0)
}

const TWO_SERIES: &str = r#"
<div data-chart data-chart--type="line"
     data-chart--data='{"labels":["Jan","Feb"],"datasets":[{"label":"Sales","data":[12500,2000]},{"label":"Units","data":[310,342]}]}'
     data-chart--labels='["Sales","Units"]'>
  <canvas id="sales"></canvas>
</div>
"#;

#[test]
fn line_chart_builds_and_renders() {
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(TWO_SERIES), &defaults)
        .unwrap()
        .expect("line chart should build");
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.data.datasets.len(), 2);
    assert_eq!(chart.canvas.id.as_deref(), Some("sales"));
    assert!(chart.svg.contains("<svg"));
}

#[test]
fn unrecognized_type_is_skipped_quietly() {
    let html = r#"
<div data-chart data-chart--type="bar"
     data-chart--data='{"datasets":[{"data":[1,2]}]}'>
  <canvas></canvas>
</div>
"#;
    let defaults = ChartDefaults::default();
    let built = build_chart(&placeholder(html), &defaults).unwrap();
    assert!(built.is_none());
}

#[test]
fn missing_payload_is_an_error() {
    let html = r#"<div data-chart data-chart--type="line"><canvas></canvas></div>"#;
    let defaults = ChartDefaults::default();
    let err = build_chart(&placeholder(html), &defaults).unwrap_err();
    assert!(matches!(err, Error::MissingData));
}

#[test]
fn malformed_payload_names_the_attribute() {
    let html = r#"
<div data-chart data-chart--type="line" data-chart--data='{oops'>
  <canvas></canvas>
</div>
"#;
    let defaults = ChartDefaults::default();
    let err = build_chart(&placeholder(html), &defaults).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidJson {
            attr: "data-chart--data",
            ..
        }
    ));
}

#[test]
fn series_labels_must_be_an_array_of_strings() {
    let html = r#"
<div data-chart data-chart--type="line"
     data-chart--data='{"datasets":[{"data":[1]}]}'
     data-chart--labels='{"nope":1}'>
  <canvas></canvas>
</div>
"#;
    let defaults = ChartDefaults::default();
    let err = build_chart(&placeholder(html), &defaults).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidJson {
            attr: "data-chart--labels",
            ..
        }
    ));
}

#[test]
fn a_canvas_is_required() {
    let html = r#"
<div data-chart data-chart--type="line" data-chart--data='{"datasets":[{"data":[1]}]}'></div>
"#;
    let defaults = ChartDefaults::default();
    let err = build_chart(&placeholder(html), &defaults).unwrap_err();
    assert!(matches!(err, Error::CanvasCount(0)));
}

#[test]
fn a_second_canvas_is_rejected() {
    let html = r#"
<div data-chart data-chart--type="line" data-chart--data='{"datasets":[{"data":[1]}]}'>
  <canvas id="a"></canvas>
  <canvas id="b"></canvas>
</div>
"#;
    let defaults = ChartDefaults::default();
    let err = build_chart(&placeholder(html), &defaults).unwrap_err();
    assert!(matches!(err, Error::CanvasCount(2)));
}

#[test]
fn tooltip_formats_value_and_lowercases_label() {
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(TWO_SERIES), &defaults)
        .unwrap()
        .unwrap();
    assert_eq!(chart.tooltip_label(0, 1).unwrap(), "2,000 sales");
    assert_eq!(chart.tooltip_label(1, 0).unwrap(), "310 units");
}

#[test]
fn default_series_label_is_a_single_empty_string() {
    let html = r#"
<div data-chart data-chart--type="line"
     data-chart--data='{"datasets":[{"data":[12500]},{"data":[7]}]}'>
  <canvas></canvas>
</div>
"#;
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(html), &defaults).unwrap().unwrap();
    assert_eq!(chart.series_labels, vec![String::new()]);
    // trailing space stays even with the empty label
    assert_eq!(chart.tooltip_label(0, 0).unwrap(), "12,500 ");
    // only the first series has a label to look up
    assert!(matches!(
        chart.tooltip_label(1, 0).unwrap_err(),
        Error::LabelOutOfRange(1)
    ));
}

#[test]
fn tooltip_lookups_past_the_payload_fail() {
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(TWO_SERIES), &defaults)
        .unwrap()
        .unwrap();
    assert!(matches!(
        chart.tooltip_label(5, 0).unwrap_err(),
        Error::DatasetOutOfRange(5)
    ));
    assert!(matches!(
        chart.tooltip_label(0, 99).unwrap_err(),
        Error::PointOutOfRange(99)
    ));
}

#[test]
fn tick_labels_use_the_thousands_rule() {
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(TWO_SERIES), &defaults)
        .unwrap()
        .unwrap();
    assert_eq!(chart.tick_label(2500.0), "2,500");
    assert_eq!(chart.tick_label(0.5), "0.5");
}

#[test]
fn tooltip_background_is_fixed_per_chart_kind() {
    let mut defaults = ChartDefaults::default();
    defaults.tooltips.background_color = "hotpink".to_string();
    defaults.tooltips.body_font_size = 18;
    let chart = build_chart(&placeholder(TWO_SERIES), &defaults)
        .unwrap()
        .unwrap();
    // the line constructor pins the background; other fields flow through
    assert_eq!(chart.tooltip.background_color, "rgba(0, 0, 0, 0.8)");
    assert_eq!(chart.tooltip.body_font_size, 18);
}

#[test]
fn border_color_reaches_the_rendering() {
    let html = r##"
<div data-chart data-chart--type="line"
     data-chart--data='{"labels":["a","b"],"datasets":[{"data":[1,2],"borderColor":"#36a2eb"}]}'>
  <canvas></canvas>
</div>
"##;
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(html), &defaults).unwrap().unwrap();
    assert!(chart.svg.to_lowercase().contains("#36a2eb"));
}

#[test]
fn null_points_break_the_line_not_the_build() {
    let html = r#"
<div data-chart data-chart--type="line"
     data-chart--data='{"labels":["a","b","c"],"datasets":[{"data":[1,null,3]}]}'>
  <canvas></canvas>
</div>
"#;
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(html), &defaults).unwrap().unwrap();
    assert!(chart.svg.contains("<svg"));
}

#[test]
fn empty_datasets_render_empty_axes() {
    let html = r#"
<div data-chart data-chart--type="line" data-chart--data='{"datasets":[]}'>
  <canvas></canvas>
</div>
"#;
    let defaults = ChartDefaults::default();
    let chart = build_chart(&placeholder(html), &defaults).unwrap().unwrap();
    assert!(chart.svg.contains("<svg"));
    assert!(chart.data.datasets.is_empty());
}
