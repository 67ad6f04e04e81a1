use crate::defaults::ChartDefaults;
use crate::error::{Error, Result};
use crate::format::thousands;
use crate::models::{ChartData, Dataset, PointValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::RGBAColor;
use std::path::Path;

/// Map a CSS font-family stack to a plotters font family.
/// Only the first family is considered; unknown names fall back to sans-serif.
fn map_font_family(family: &str) -> &'static str {
    let first = family
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    match first.as_str() {
        "serif" | "times" | "times new roman" | "georgia" => "serif",
        "monospace" | "courier" | "courier new" => "monospace",
        _ => "sans-serif",
    }
}

/// Render a line chart into an in-memory SVG document.
pub fn render_svg(
    data: &ChartData,
    defaults: &ChartDefaults,
    (width, height): (u32, u32),
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        draw_chart(root, data, defaults)?;
    }
    Ok(svg)
}

/// Render a line chart to a file; `.svg` gets the vector backend,
/// anything else the bitmap backend.
pub fn render_to_file<P: AsRef<Path>>(
    data: &ChartData,
    defaults: &ChartDefaults,
    (width, height): (u32, u32),
    out_path: P,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, data, defaults)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, data, defaults)?;
    }

    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, data: &ChartData, defaults: &ChartDefaults) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)
        .map_err(|e| Error::Render(format!("{:?}", e)))?;

    let point_count = data.point_count();
    let x_max = (point_count.saturating_sub(1)).max(1) as f64;

    let values: Vec<f64> = data
        .datasets
        .iter()
        .flat_map(|d| d.data.iter().filter_map(PointValue::as_f64))
        .collect();
    let (mut min_val, mut max_val) = if values.is_empty() {
        // No drawable points still yields empty axes
        (0.0, 1.0)
    } else {
        (
            values.iter().cloned().fold(f64::INFINITY, f64::min),
            values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        )
    };
    if defaults.linear_scale.begin_at_zero {
        min_val = min_val.min(0.0);
    }
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .margin_left(defaults.padding.left)
        .margin_right(defaults.padding.right)
        .margin_top(defaults.padding.top)
        .margin_bottom(defaults.padding.bottom)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, min_val..max_val)
        .map_err(|e| Error::Render(format!("{:?}", e)))?;

    // Axis label formatters: Y goes through the thousands rule, X looks
    // up the category name at the tick position.
    let y_label_fmt = |v: &f64| thousands(&v.to_string());
    let categories = &data.labels;
    let x_label_fmt = |x: &f64| {
        let idx = x.round() as usize;
        if idx < categories.len() {
            categories[idx].clone()
        } else {
            String::new()
        }
    };

    let x_label_count = if defaults.category_scale.auto_skip {
        point_count
            .min(defaults.category_scale.ticks.max_ticks_limit as usize)
            .max(1)
    } else {
        point_count.max(1)
    };
    let y_label_count = defaults.linear_scale.ticks.max_ticks_limit as usize;

    let ticks = &defaults.linear_scale.ticks;
    let tick_color = parse_css_color(&ticks.font_color).unwrap_or_else(|| BLACK.to_rgba());
    let tick_font = map_font_family(&ticks.font_family);

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(x_label_count)
        .y_labels(y_label_count)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((tick_font, ticks.font_size).into_font().color(&tick_color));
    if !defaults.category_scale.grid_lines {
        mesh.disable_x_mesh();
    }
    if !defaults.linear_scale.grid_lines {
        mesh.disable_y_mesh();
    }
    mesh.draw().map_err(|e| Error::Render(format!("{:?}", e)))?;

    for (idx, ds) in data.datasets.iter().enumerate() {
        let color = series_color(ds, idx);
        let segments = gap_segments(ds);
        let fill = ds.fill.unwrap_or(false);

        for (seg_idx, seg) in segments.iter().enumerate() {
            let stroke = ShapeStyle {
                color: color.clone(),
                filled: false,
                stroke_width: 2,
            };
            let anno = if fill {
                chart.draw_series(
                    AreaSeries::new(seg.clone(), 0.0, color.mix(0.2)).border_style(stroke),
                )
            } else {
                chart.draw_series(LineSeries::new(seg.clone(), stroke))
            }
            .map_err(|e| Error::Render(format!("{:?}", e)))?;

            // One legend entry per dataset, not per gap segment
            if defaults.legend_display && seg_idx == 0 {
                let legend_color = color.clone();
                anno.label(ds.label.clone().unwrap_or_default()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], legend_color.clone())
                });
            }
        }

        for seg in &segments {
            chart
                .draw_series(seg.iter().map(|&(x, y)| Circle::new((x, y), 3, color.filled())))
                .map_err(|e| Error::Render(format!("{:?}", e)))?;
        }
    }

    if defaults.legend_display {
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.85))
            .label_font((tick_font, ticks.font_size))
            .draw()
            .map_err(|e| Error::Render(format!("{:?}", e)))?;
    }

    root.present().map_err(|e| Error::Render(format!("{:?}", e)))?;
    Ok(())
}

/// Split a dataset into runs of consecutive drawable points; gaps break
/// the line.
fn gap_segments(ds: &Dataset) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (i, value) in ds.data.iter().enumerate() {
        match value.as_f64() {
            Some(y) => current.push((i as f64, y)),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Stroke color for a series: its declared border color when parseable,
/// otherwise a stable palette pick.
fn series_color(ds: &Dataset, idx: usize) -> RGBAColor {
    ds.border_color
        .as_deref()
        .and_then(parse_css_color)
        .unwrap_or_else(|| Palette99::pick(idx).to_rgba())
}

/// Parse a CSS color: `#rgb`, `#rrggbb`, `rgb()`, `rgba()`, or one of a
/// few named colors.
fn parse_css_color(s: &str) -> Option<RGBAColor> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(body) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return None;
        }
        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;
        let a = parts[3].parse::<f64>().ok()?;
        return Some(RGBAColor(r, g, b, a.clamp(0.0, 1.0)));
    }
    if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }
        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;
        return Some(RGBColor(r, g, b).to_rgba());
    }
    match s.to_ascii_lowercase().as_str() {
        "red" => Some(RED.to_rgba()),
        "green" => Some(GREEN.to_rgba()),
        "blue" => Some(BLUE.to_rgba()),
        "black" => Some(BLACK.to_rgba()),
        "white" => Some(WHITE.to_rgba()),
        "yellow" => Some(YELLOW.to_rgba()),
        "cyan" => Some(CYAN.to_rgba()),
        "magenta" => Some(MAGENTA.to_rgba()),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<RGBAColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(RGBColor(r * 17, g * 17, b * 17).to_rgba())
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(RGBColor(r, g, b).to_rgba())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_colors_parse() {
        assert_eq!(parse_css_color("#999"), Some(RGBAColor(153, 153, 153, 1.0)));
        assert_eq!(parse_css_color("#36a2eb"), Some(RGBAColor(54, 162, 235, 1.0)));
        assert_eq!(
            parse_css_color("rgba(0, 0, 0, 0.8)"),
            Some(RGBAColor(0, 0, 0, 0.8))
        );
        assert_eq!(parse_css_color("rgb(255, 99, 132)"), Some(RGBAColor(255, 99, 132, 1.0)));
        assert_eq!(parse_css_color("mauve-ish"), None);
    }

    #[test]
    fn font_stack_maps_to_generic_family() {
        assert_eq!(map_font_family("Ubuntu, Helvetica, sans-serif"), "sans-serif");
        assert_eq!(map_font_family("Courier New, monospace"), "monospace");
        assert_eq!(map_font_family(""), "sans-serif");
    }
}
