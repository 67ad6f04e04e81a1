use chartwire::ChartDefaults;

#[test]
fn registry_matches_the_shared_page_setup() {
    let d = ChartDefaults::default();
    assert_eq!(
        (d.padding.left, d.padding.right, d.padding.top, d.padding.bottom),
        (40, 65, 65, 25)
    );
    assert!(d.responsive);
    assert!(!d.maintain_aspect_ratio);
    assert!(!d.legend_display);

    assert_eq!(d.tooltips.background_color, "rgba(0, 0, 0, 0.8)");
    assert_eq!(d.tooltips.body_font_size, 14);
    assert_eq!(d.tooltips.body_font_style, "bold");
    assert_eq!(d.tooltips.corner_radius, 0);
    assert!(!d.tooltips.display_colors);
    assert_eq!((d.tooltips.x_padding, d.tooltips.y_padding), (10, 15));
    assert_eq!((d.tooltips.x_align.as_str(), d.tooltips.y_align.as_str()), ("center", "bottom"));
    assert_eq!(d.tooltips.label_color, "#fff");

    assert!(d.linear_scale.begin_at_zero);
    assert!(d.linear_scale.grid_lines);
    assert_eq!(d.linear_scale.ticks.font_color, "#999");
    assert_eq!(d.linear_scale.ticks.font_family, "Ubuntu, Helvetica, sans-serif");
    assert_eq!(d.linear_scale.ticks.font_size, 14);
    assert_eq!(d.linear_scale.ticks.max_ticks_limit, 4);

    assert!(!d.category_scale.grid_lines);
    assert!(d.category_scale.auto_skip);
    assert_eq!(d.category_scale.max_rotation, 0);
    assert_eq!(d.category_scale.ticks.max_ticks_limit, 4);
}

#[test]
fn partial_theme_overrides_merge_over_the_builtins() {
    let theme = r#"{"legend_display": true, "padding": {"left": 10}}"#;
    let d: ChartDefaults = serde_json::from_str(theme).unwrap();
    assert!(d.legend_display);
    assert_eq!(d.padding.left, 10);
    // untouched fields keep their defaults
    assert_eq!(d.padding.right, 65);
    assert!(d.responsive);
    assert_eq!(d.tooltips.body_font_size, 14);
}

#[test]
fn nested_theme_sections_merge_field_by_field() {
    let theme = r#"{"tooltips": {"body_font_size": 18}, "linear_scale": {"begin_at_zero": false}}"#;
    let d: ChartDefaults = serde_json::from_str(theme).unwrap();
    assert_eq!(d.tooltips.body_font_size, 18);
    assert_eq!(d.tooltips.body_font_style, "bold");
    assert!(!d.linear_scale.begin_at_zero);
    assert_eq!(d.linear_scale.ticks.max_ticks_limit, 4);
}

#[test]
fn the_registry_round_trips_through_json() {
    let d = ChartDefaults::default();
    let text = serde_json::to_string(&d).unwrap();
    let back: ChartDefaults = serde_json::from_str(&text).unwrap();
    assert_eq!(back, d);
}
