use serde::{Deserialize, Serialize};

/// Chart-ready line series for the detail modal.
///
/// One tick label per value, in series order. The core generates these;
/// the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series label, e.g. "Bitcoin price (USD)"
    pub label: String,

    /// Day/month tick labels ("28/7")
    pub labels: Vec<String>,

    /// Prices in USD
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
