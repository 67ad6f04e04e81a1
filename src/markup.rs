use crate::chart::ChartKind;
use crate::defaults::ChartDefaults;
use log::debug;
use scraper::{Html, Selector};

/// Attribute flagging an element as a chart placeholder.
pub const CHART_ATTR: &str = "data-chart";
/// Chart kind discriminator.
pub const TYPE_ATTR: &str = "data-chart--type";
/// JSON chart payload (labels + datasets).
pub const DATA_ATTR: &str = "data-chart--data";
/// JSON array of series labels for tooltips.
pub const LABELS_ATTR: &str = "data-chart--labels";

/// Default drawing surface when the page is responsive and the canvas
/// carries no explicit size.
const RESPONSIVE_WIDTH: u32 = 800;
const RESPONSIVE_HEIGHT: u32 = 400;
/// Intrinsic HTML canvas size, used when responsiveness is off.
const INTRINSIC_WIDTH: u32 = 300;
const INTRINSIC_HEIGHT: u32 = 150;
/// Stock width:height ratio applied under `maintain_aspect_ratio`.
const ASPECT_RATIO: u32 = 2;

/// A canvas element found inside a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasRef {
    pub id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CanvasRef {
    /// Resolve the drawing surface size. Explicit attributes win; the
    /// rest follows the responsiveness flags.
    pub fn surface_size(&self, defaults: &ChartDefaults) -> (u32, u32) {
        if defaults.responsive {
            let width = self.width.unwrap_or(RESPONSIVE_WIDTH);
            let height = match self.height {
                Some(h) => h,
                None if defaults.maintain_aspect_ratio => width / ASPECT_RATIO,
                None => RESPONSIVE_HEIGHT,
            };
            (width, height)
        } else {
            (
                self.width.unwrap_or(INTRINSIC_WIDTH),
                self.height.unwrap_or(INTRINSIC_HEIGHT),
            )
        }
    }
}

/// One discovered chart container, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub id: Option<String>,
    pub kind: ChartKind,
    pub raw_kind: Option<String>,
    pub data: Option<String>,
    pub labels: Option<String>,
    pub canvases: Vec<CanvasRef>,
}

/// Scan a document for chart placeholders, in document order.
///
/// Discovery never fails; malformed placeholders surface as errors at
/// construction time.
pub fn find_placeholders(html: &str) -> Vec<Placeholder> {
    let document = Html::parse_document(html);
    let chart_sel = Selector::parse("[data-chart]").unwrap();
    let canvas_sel = Selector::parse("canvas").unwrap();

    let placeholders: Vec<Placeholder> = document
        .select(&chart_sel)
        .map(|el| {
            let attr = |name: &str| el.value().attr(name).map(str::to_string);
            let canvases = el
                .select(&canvas_sel)
                .map(|c| CanvasRef {
                    id: c.value().attr("id").map(str::to_string),
                    width: parse_dimension(c.value().attr("width")),
                    height: parse_dimension(c.value().attr("height")),
                })
                .collect();
            let raw_kind = attr(TYPE_ATTR);
            Placeholder {
                id: attr("id"),
                kind: ChartKind::from_tag(raw_kind.as_deref()),
                raw_kind,
                data: attr(DATA_ATTR),
                labels: attr(LABELS_ATTR),
                canvases,
            }
        })
        .collect();

    debug!("found {} chart placeholder(s)", placeholders.len());
    placeholders
}

/// Canvas dimension attributes that don't parse are treated as absent.
fn parse_dimension(attr: Option<&str>) -> Option<u32> {
    attr.and_then(|v| v.trim().parse::<u32>().ok())
}
