//! Glyph dispatch — picks the shape for a feature's category, resolves its
//! color, and draws the highlight overlay.

use log::warn;

use crate::error::Diagnostic;
use crate::model::{ColorSchema, ColorSource, Feature, VariantCategory};
use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Shape used to represent a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    /// Sine wave of the given peak-to-trough height, hanging below the lane y
    WaveLine { height: f64 },
    /// Two parallel lines, the second `gap` pixels below the first
    DoubleLine { gap: f64 },
    Line,
}

/// Per-family mapping from features to glyphs and labels.
pub trait GlyphPolicy {
    /// Dedicated glyph for the feature, or `None` to fall back to [`Glyph::Line`].
    fn glyph(&self, feature: &Feature) -> Option<Glyph>;

    /// Text drawn under the glyph.
    fn label(&self, feature: &Feature) -> String;
}

/// Structural variants: deletions wave, duplications double up.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantGlyphs;

impl GlyphPolicy for VariantGlyphs {
    fn glyph(&self, feature: &Feature) -> Option<Glyph> {
        match feature.category {
            VariantCategory::Deletion => Some(Glyph::WaveLine { height: WAVE_HEIGHT }),
            VariantCategory::Duplication => Some(Glyph::DoubleLine { gap: DUP_LINE_GAP }),
            VariantCategory::Other(_) => None,
        }
    }

    fn label(&self, feature: &Feature) -> String {
        format!(
            "{} - {} {}; length: {}",
            feature.variant_class,
            feature.subtype,
            feature.category.human_readable(),
            feature.length
        )
    }
}

/// Resolve a color through the schema, recording a diagnostic on fallback.
pub(crate) fn feature_color<'a>(
    colors: &'a ColorSchema,
    feature: &Feature,
    diagnostics: &mut Vec<Diagnostic>,
) -> &'a str {
    let (color, source) = colors.resolve(&feature.category);
    if source != ColorSource::Category {
        let diag = Diagnostic::MissingColor {
            feature_id: feature.id.clone(),
            category: feature.category.code().to_string(),
            used: color.to_string(),
        };
        warn!("{diag}");
        diagnostics.push(diag);
    }
    color
}

/// Draw a feature's glyph between `x1` and `x2` at lane top `y`.
pub(crate) fn draw_feature<P: GlyphPolicy + ?Sized>(
    svg: &mut SvgBuilder,
    policy: &P,
    feature: &Feature,
    x1: f64,
    x2: f64,
    y: f64,
    color: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Glyph {
    let glyph = policy.glyph(feature).unwrap_or_else(|| {
        let diag = Diagnostic::UnrecognizedCategory {
            feature_id: feature.id.clone(),
            category: feature.category.code().to_string(),
        };
        warn!("{diag}");
        diagnostics.push(diag);
        Glyph::Line
    });

    match glyph {
        Glyph::WaveLine { height } => svg.wave_line(x1, x2, y + height / 2.0, height, color),
        Glyph::DoubleLine { gap } => {
            svg.line(x1, y + gap, x2, y + gap, color, LINE_WIDTH);
            svg.line(x1, y, x2, y, color, LINE_WIDTH);
        }
        Glyph::Line => svg.line(x1, y, x2, y, color, LINE_WIDTH),
    }
    glyph
}

/// Translucent box over `[start, end]` spanning the whole track height.
pub(crate) fn draw_highlight(svg: &mut SvgBuilder, start: f64, end: f64, height: f64, color: &str) {
    svg.rect(start, 0.0, end - start + 1.0, height, color);
}
