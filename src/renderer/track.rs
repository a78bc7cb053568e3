//! Annotation track families.
//!
//! A track supplies its configuration, its glyph policy and the features it
//! draws out of a query result; the draw pass itself is shared.

use crate::config::TrackConfig;
use crate::model::{Feature, QueryResult};
use super::glyphs::{GlyphPolicy, VariantGlyphs};

pub trait AnnotationTrack {
    type Policy: GlyphPolicy;

    fn config(&self) -> &TrackConfig;

    fn glyph_policy(&self) -> &Self::Policy;

    /// The features of this family carried by a query result.
    fn features<'q>(&self, query: &'q QueryResult) -> &'q [Feature];

    /// Top y of a 1-based lane.
    fn lane_y(&self, lane: u32) -> f64 {
        let cfg = self.config();
        cfg.title_margin + f64::from(lane.saturating_sub(1)) * cfg.lane_height()
    }

    /// Full drawing height for `lanes` lanes.
    fn content_height(&self, lanes: u32) -> f64 {
        let cfg = self.config();
        f64::from(lanes) * cfg.lane_height() + 2.0 * cfg.title_margin
    }

    /// Height the container should take for `lanes` lanes of content.
    ///
    /// Collapsed tracks always size as a single lane; expanded tracks are
    /// capped at the visible height and scroll beyond it.
    fn container_height(&self, lanes: u32, expanded: bool) -> f64 {
        if expanded {
            self.content_height(lanes).min(self.config().visible_height)
        } else {
            self.content_height(lanes.min(1))
        }
    }
}

/// Structural-variant track.
#[derive(Debug, Clone, Default)]
pub struct VariantTrack {
    config: TrackConfig,
    glyphs: VariantGlyphs,
}

impl VariantTrack {
    pub fn new(config: TrackConfig) -> Self {
        Self {
            config,
            glyphs: VariantGlyphs,
        }
    }
}

impl AnnotationTrack for VariantTrack {
    type Policy = VariantGlyphs;

    fn config(&self) -> &TrackConfig {
        &self.config
    }

    fn glyph_policy(&self) -> &VariantGlyphs {
        &self.glyphs
    }

    fn features<'q>(&self, query: &'q QueryResult) -> &'q [Feature] {
        query.features()
    }
}
