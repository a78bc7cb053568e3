//! Data model for annotation query results and the viewport they are drawn in.
//!
//! These structures mirror the JSON returned by the annotation query service.
//! They are immutable once received; the renderer only reads them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Neutral color used when neither the category nor the schema default has one.
pub const FALLBACK_COLOR: &str = "black";

// ═══════════════════════════════════════════════════════════════════════
// Features
// ═══════════════════════════════════════════════════════════════════════

/// One genomic annotation record (a structural variant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Database identifier, compared against the active highlight
    #[serde(rename = "_id")]
    pub id: String,
    /// Chromosome name (e.g., "1", "X")
    pub chromosome: String,
    /// First base covered by the feature
    #[serde(rename = "position")]
    pub start_pos: u64,
    /// Last base covered by the feature
    #[serde(rename = "end")]
    pub end_pos: u64,
    /// Short category code that selects the glyph (del, dup, ...)
    #[serde(rename = "sub_category")]
    pub category: VariantCategory,
    /// Caller-specific variant type (e.g., "DEL", "DUP:TANDEM")
    #[serde(rename = "variant_type", default)]
    pub subtype: String,
    /// Broad variant class (e.g., "sv", "str")
    #[serde(rename = "category", default)]
    pub variant_class: String,
    /// Reported length in bases; negative for some callers' deletions
    #[serde(default)]
    pub length: i64,
    pub quality: Option<f64>,
    pub rank_score: Option<f64>,
    /// Human-facing name shown in tooltips
    #[serde(default)]
    pub display_name: String,
}

impl Feature {
    /// Genomic midpoint, used to center the label.
    pub fn midpoint(&self) -> f64 {
        (self.start_pos as f64 + self.end_pos as f64) / 2.0
    }

    /// Inclusive overlap test against a window.
    pub fn overlaps(&self, window: &ViewWindow) -> bool {
        self.start_pos <= window.end_pos && self.end_pos >= window.start_pos
    }
}

/// Closed set of categories with dedicated glyphs; anything else keeps its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VariantCategory {
    Deletion,
    Duplication,
    Other(String),
}

impl VariantCategory {
    /// Short wire code, also the color schema key.
    pub fn code(&self) -> &str {
        match self {
            VariantCategory::Deletion => "del",
            VariantCategory::Duplication => "dup",
            VariantCategory::Other(code) => code,
        }
    }

    /// Phrase from the fixed code table; unknown codes map to "".
    pub fn human_readable(&self) -> &'static str {
        match self {
            VariantCategory::Deletion => "deletion",
            VariantCategory::Duplication => "duplication",
            VariantCategory::Other(_) => "",
        }
    }
}

impl From<String> for VariantCategory {
    fn from(code: String) -> Self {
        match code.as_str() {
            "del" => VariantCategory::Deletion,
            "dup" => VariantCategory::Duplication,
            _ => VariantCategory::Other(code),
        }
    }
}

impl From<&str> for VariantCategory {
    fn from(code: &str) -> Self {
        VariantCategory::from(code.to_string())
    }
}

impl From<VariantCategory> for String {
    fn from(category: VariantCategory) -> Self {
        category.code().to_string()
    }
}

impl fmt::Display for VariantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Query result
// ═══════════════════════════════════════════════════════════════════════

/// Result of one annotation query, as delivered by the data-fetch service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    /// Start of the queried genomic window
    pub start_pos: u64,
    /// End of the queried genomic window
    pub end_pos: u64,
    /// Lane count reported upstream; the layout engine computes its own
    #[serde(default)]
    pub max_height_order: u32,
    pub data: QueryData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryData {
    #[serde(default)]
    pub variants: Vec<Feature>,
}

impl QueryResult {
    /// Parse a query result from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The genomic window this result was queried for.
    pub fn window(&self) -> ViewWindow {
        ViewWindow {
            start_pos: self.start_pos,
            end_pos: self.end_pos,
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.data.variants
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Viewport
// ═══════════════════════════════════════════════════════════════════════

/// Genomic interval currently visible on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub start_pos: u64,
    pub end_pos: u64,
}

impl ViewWindow {
    pub fn new(start_pos: u64, end_pos: u64) -> Self {
        Self { start_pos, end_pos }
    }

    /// Width of the window in bases; zero for a degenerate window.
    pub fn span(&self) -> u64 {
        self.end_pos.saturating_sub(self.start_pos)
    }
}

/// Viewport inputs supplied by the browser for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Current zoom resolution (bases per pixel bucket; higher = zoomed out)
    pub resolution: u32,
    /// Highest resolution at which annotations are still drawn
    pub max_resolution: u32,
    /// Whether the track is expanded to show every lane
    pub expanded: bool,
}

impl Viewport {
    pub fn new(canvas_width: f64, resolution: u32, max_resolution: u32, expanded: bool) -> Self {
        Self {
            canvas_width,
            resolution,
            max_resolution,
            expanded,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Colors
// ═══════════════════════════════════════════════════════════════════════

/// Category code → CSS color, with an optional `default` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSchema(pub HashMap<String, String>);

/// Which level of the color policy produced a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    Category,
    SchemaDefault,
    Fallback,
}

impl ColorSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, color: &str) -> Self {
        self.0.insert(key.to_string(), color.to_string());
        self
    }

    /// Resolve a color: category entry, then `default`, then [`FALLBACK_COLOR`].
    pub fn resolve(&self, category: &VariantCategory) -> (&str, ColorSource) {
        if let Some(color) = self.0.get(category.code()).filter(|c| !c.is_empty()) {
            return (color.as_str(), ColorSource::Category);
        }
        if let Some(color) = self.0.get("default").filter(|c| !c.is_empty()) {
            return (color.as_str(), ColorSource::SchemaDefault);
        }
        (FALLBACK_COLOR, ColorSource::Fallback)
    }
}
