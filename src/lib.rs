//! chartwire
//!
//! Wires charts to server-rendered HTML. Pages flag elements with
//! `data-chart` attributes carrying a chart type and JSON payloads; this
//! crate discovers those placeholders, validates the payloads, and
//! renders each chart against its canvas with a shared set of styling
//! defaults. Pairs with the `chartwire` CLI.
//!
//! ### Features
//! - Scan a document for `data-chart` placeholders and their canvases
//! - Typed dispatch on the declared chart kind (unknown kinds are skipped)
//! - Line charts rendered to SVG in memory, or SVG/PNG files
//! - Thousands-separated tick labels and lowercased tooltip labels
//! - One defaults value for padding, tooltips, and axis presets, with
//!   partial overrides from a JSON theme
//!
//! ### Example
//! ```no_run
//! use chartwire::ChartDefaults;
//!
//! let html = std::fs::read_to_string("dashboard.html")?;
//! let defaults = ChartDefaults::default();
//! let charts = chartwire::hydrate(&html, &defaults)?;
//! for chart in &charts {
//!     println!("{} on canvas {:?}", chart.kind.as_str(), chart.canvas.id);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod defaults;
pub mod error;
pub mod format;
pub mod markup;
pub mod models;
pub mod viz;

pub use chart::{ChartInstance, ChartKind, build_chart, hydrate};
pub use defaults::{ChartDefaults, TooltipStyle};
pub use error::{Error, Result};
pub use markup::{CanvasRef, Placeholder, find_placeholders};
pub use models::{ChartData, Dataset, PointValue};
