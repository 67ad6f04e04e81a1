use serde::{Deserialize, Serialize};

/// Padding around the drawing area, in pixels per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Padding {
            left: 40,
            right: 65,
            top: 65,
            bottom: 25,
        }
    }
}

/// Tick appearance shared by the scale presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickStyle {
    pub font_color: String,
    pub font_family: String,
    pub font_size: u32,
    pub max_ticks_limit: u32,
}

impl Default for TickStyle {
    fn default() -> Self {
        TickStyle {
            font_color: "#999".to_string(),
            font_family: "Ubuntu, Helvetica, sans-serif".to_string(),
            font_size: 14,
            max_ticks_limit: 4,
        }
    }
}

/// Preset for the numeric value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearScale {
    pub begin_at_zero: bool,
    pub grid_lines: bool,
    pub ticks: TickStyle,
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale {
            begin_at_zero: true,
            grid_lines: true,
            ticks: TickStyle::default(),
        }
    }
}

/// Preset for the category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScale {
    pub grid_lines: bool,
    pub auto_skip: bool,
    pub max_rotation: u32,
    pub ticks: TickStyle,
}

impl Default for CategoryScale {
    fn default() -> Self {
        CategoryScale {
            grid_lines: false,
            auto_skip: true,
            max_rotation: 0,
            ticks: TickStyle::default(),
        }
    }
}

/// Tooltip appearance applied to every chart; construction may override
/// the background per chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub background_color: String,
    pub body_font_size: u32,
    pub body_font_style: String,
    pub corner_radius: u32,
    pub display_colors: bool,
    pub x_padding: u32,
    pub y_padding: u32,
    pub x_align: String,
    pub y_align: String,
    pub label_color: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        TooltipStyle {
            background_color: "rgba(0, 0, 0, 0.8)".to_string(),
            body_font_size: 14,
            body_font_style: "bold".to_string(),
            corner_radius: 0,
            display_colors: false,
            x_padding: 10,
            y_padding: 15,
            x_align: "center".to_string(),
            y_align: "bottom".to_string(),
            label_color: "#fff".to_string(),
        }
    }
}

/// Shared defaults consumed by every chart construction.
///
/// Built once and passed by reference; a partial JSON document
/// deserializes over the built-ins, so a theme file only needs the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDefaults {
    pub padding: Padding,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend_display: bool,
    pub tooltips: TooltipStyle,
    pub linear_scale: LinearScale,
    pub category_scale: CategoryScale,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        ChartDefaults {
            padding: Padding::default(),
            responsive: true,
            maintain_aspect_ratio: false,
            legend_display: false,
            tooltips: TooltipStyle::default(),
            linear_scale: LinearScale::default(),
            category_scale: CategoryScale::default(),
        }
    }
}
