//! Hover text for drawn features.

use serde::Serialize;

use crate::model::Feature;

/// Tooltip text paired with the pixel rectangle it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
}

/// Multi-line description of a feature, one field per line, fixed order.
pub fn build_tooltip(feature: &Feature) -> String {
    format!(
        "Id: {}\nPosition: {}:{}-{}\nType: {} {}\nQuality: {}\nRank score: {}\n",
        feature.display_name,
        feature.chromosome,
        feature.start_pos,
        feature.end_pos,
        feature.subtype,
        feature.category,
        optional(feature.quality),
        optional(feature.rank_score),
    )
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "NA".to_string(), |v| v.to_string())
}
