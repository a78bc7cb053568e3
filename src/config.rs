//! Track configuration, loadable from JSON with per-field defaults.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::model::ColorSchema;
use crate::renderer::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Height reserved for a feature's glyph within a lane
    pub feature_height: f64,
    /// Label font size; also the label row height below the glyph
    pub text_size: f64,
    /// Viewport height of an expanded track; taller content scrolls
    pub visible_height: f64,
    /// Height of a track that passed the resolution gate but has no features
    pub empty_height: f64,
    /// Padding above the first lane and below the last
    pub title_margin: f64,
    pub highlight_color: String,
    pub colors: ColorSchema,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            feature_height: DEFAULT_FEATURE_HEIGHT,
            text_size: DEFAULT_TEXT_SIZE,
            visible_height: DEFAULT_VISIBLE_HEIGHT,
            empty_height: DEFAULT_EMPTY_HEIGHT,
            title_margin: DEFAULT_TITLE_MARGIN,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            colors: ColorSchema::default(),
        }
    }
}

impl TrackConfig {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Vertical pitch of one lane: glyph row plus label row.
    pub fn lane_height(&self) -> f64 {
        self.feature_height + self.text_size
    }
}
