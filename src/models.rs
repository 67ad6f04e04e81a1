use serde::{Deserialize, Serialize};

/// One value in a dataset's point sequence.
///
/// Payloads mix numbers, numeric strings, and `null` gaps; accept all
/// three and normalize at the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
    Number(f64),
    Text(String),
    Null,
}

impl PointValue {
    /// Decimal string form used by tooltip labels. Gaps render empty.
    pub fn display(&self) -> String {
        match self {
            PointValue::Number(n) => n.to_string(),
            PointValue::Text(s) => s.clone(),
            PointValue::Null => String::new(),
        }
    }

    /// Plottable numeric value, if any. Non-numeric text counts as a gap.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PointValue::Number(n) => Some(*n),
            PointValue::Text(s) => s.parse::<f64>().ok(),
            PointValue::Null => None,
        }
    }
}

/// One series of the chart payload (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<PointValue>,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub fill: Option<bool>,
}

/// The `data-chart--data` payload: x-axis category labels plus one or
/// more datasets. `labels` may be omitted; `datasets` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Longest point sequence across datasets and category labels.
    pub fn point_count(&self) -> usize {
        self.datasets
            .iter()
            .map(|d| d.data.len())
            .max()
            .unwrap_or(0)
            .max(self.labels.len())
    }
}
