use chrono::Datelike;

use crate::models::chart::ChartSeries;
use crate::models::history::PriceHistory;

/// Turns raw series data into drawing-ready structures.
///
/// Pure computation, no I/O. The frontend receives labels, values, and
/// point geometry; it never re-derives them.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the detail modal's line chart from the 7-day series.
    /// Tick labels are day/month ("28/7"), one per point.
    pub fn history_chart(&self, history: &PriceHistory, asset_name: &str) -> ChartSeries {
        ChartSeries {
            label: format!("{asset_name} price (USD)"),
            labels: history
                .points
                .iter()
                .map(|p| format!("{}/{}", p.timestamp.day(), p.timestamp.month()))
                .collect(),
            values: history.prices(),
        }
    }

    /// Normalized sparkline geometry for a `width` x `height` canvas.
    ///
    /// X spreads the points evenly; y maps the series min..max onto the full
    /// height with the origin at the top (screen coordinates), so the max
    /// touches the top edge and the min the bottom. A flat series draws
    /// along the bottom edge; a single point pins to the bottom left.
    pub fn sparkline_path(&self, prices: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
        if prices.is_empty() {
            return Vec::new();
        }

        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = if max > min { max - min } else { 1.0 };
        let last = prices.len().saturating_sub(1).max(1) as f64;

        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let x = i as f64 / last * width;
                let y = height - (p - min) / range * height;
                (x, y)
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
