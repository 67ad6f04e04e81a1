use crate::defaults::{ChartDefaults, TooltipStyle};
use crate::error::{Error, Result};
use crate::format::thousands;
use crate::markup::{self, CanvasRef, Placeholder, DATA_ATTR, LABELS_ATTR};
use crate::models::ChartData;
use crate::viz;
use log::debug;

/// Tooltip background applied to line charts at construction.
const LINE_TOOLTIP_BACKGROUND: &str = "rgba(0, 0, 0, 0.8)";

/// Chart kinds a placeholder can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Multi-series line chart over a category axis
    Line,
    /// Anything else; skipped without constructing or complaining
    Unsupported,
}

impl ChartKind {
    /// Map the declared type tag to a kind. Absent or unrecognized tags
    /// are the no-op kind.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("line") => ChartKind::Line,
            _ => ChartKind::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Unsupported => "unsupported",
        }
    }
}

/// A constructed chart: parsed payloads, the canvas it is bound to, the
/// resolved tooltip style, and the rendered SVG document.
#[derive(Debug, Clone)]
pub struct ChartInstance {
    pub kind: ChartKind,
    pub data: ChartData,
    pub series_labels: Vec<String>,
    pub canvas: CanvasRef,
    pub tooltip: TooltipStyle,
    pub svg: String,
}

impl ChartInstance {
    /// Axis tick text for a numeric value: the thousands rule applied to
    /// its decimal form.
    pub fn tick_label(&self, value: f64) -> String {
        thousands(&value.to_string())
    }

    /// Tooltip body for the point at `datasets[dataset].data[index]`:
    /// the formatted value, a space, and the lowercased series label.
    pub fn tooltip_label(&self, dataset: usize, index: usize) -> Result<String> {
        let ds = self
            .data
            .datasets
            .get(dataset)
            .ok_or(Error::DatasetOutOfRange(dataset))?;
        let value = ds.data.get(index).ok_or(Error::PointOutOfRange(index))?;
        let label = self
            .series_labels
            .get(dataset)
            .ok_or(Error::LabelOutOfRange(dataset))?;
        Ok(format!("{} {}", thousands(&value.display()), label.to_lowercase()))
    }
}

/// Construct the chart a placeholder declares. Unsupported kinds yield
/// `Ok(None)`.
pub fn build_chart(
    placeholder: &Placeholder,
    defaults: &ChartDefaults,
) -> Result<Option<ChartInstance>> {
    match placeholder.kind {
        ChartKind::Line => build_line_chart(placeholder, defaults).map(Some),
        ChartKind::Unsupported => Ok(None),
    }
}

fn build_line_chart(placeholder: &Placeholder, defaults: &ChartDefaults) -> Result<ChartInstance> {
    let raw = placeholder.data.as_deref().ok_or(Error::MissingData)?;
    let data: ChartData = serde_json::from_str(raw).map_err(|e| Error::InvalidJson {
        attr: DATA_ATTR,
        source: e,
    })?;

    let series_labels: Vec<String> = match placeholder.labels.as_deref() {
        Some(raw) => serde_json::from_str(raw).map_err(|e| Error::InvalidJson {
            attr: LABELS_ATTR,
            source: e,
        })?,
        None => vec![String::new()],
    };

    if placeholder.canvases.len() != 1 {
        return Err(Error::CanvasCount(placeholder.canvases.len()));
    }
    let canvas = placeholder.canvases[0].clone();

    let size = canvas.surface_size(defaults);
    let svg = viz::render_svg(&data, defaults, size)?;
    debug!(
        "built line chart on canvas {:?} ({} dataset(s), {}x{})",
        canvas.id,
        data.datasets.len(),
        size.0,
        size.1
    );

    let tooltip = TooltipStyle {
        background_color: LINE_TOOLTIP_BACKGROUND.to_string(),
        ..defaults.tooltips.clone()
    };

    Ok(ChartInstance {
        kind: ChartKind::Line,
        data,
        series_labels,
        canvas,
        tooltip,
        svg,
    })
}

/// Discover every placeholder in a document and construct its chart.
///
/// Placeholders are processed in document order and the first failure
/// halts the pass; the error propagates and later placeholders are not
/// constructed. Running this twice over the same document yields two
/// independent instance sets bound to the same canvases.
pub fn hydrate(html: &str, defaults: &ChartDefaults) -> Result<Vec<ChartInstance>> {
    let placeholders = markup::find_placeholders(html);
    let mut instances = Vec::new();
    for placeholder in &placeholders {
        if let Some(instance) = build_chart(placeholder, defaults)? {
            instances.push(instance);
        }
    }
    debug!(
        "hydrated {} chart(s) from {} placeholder(s)",
        instances.len(),
        placeholders.len()
    );
    Ok(instances)
}
