//! Track renderer — converts a query result into an SVG track frame.
//!
//! One draw pass runs to completion: validate the window, take the
//! resolution snapshot, filter, lay out lanes, then draw glyphs, highlight
//! and labels. Every piece of per-pass state is rebuilt from scratch.

pub mod constants;
mod glyphs;
mod layout;
mod svg_builder;
mod track;

use log::debug;

use crate::error::{Diagnostic, RenderError};
use crate::model::{Feature, QueryResult, Viewport};
use crate::resolution::ResolutionGate;
use crate::tooltip::{build_tooltip, HoverRegion};
use crate::transform::RenderContext;

pub use glyphs::{Glyph, GlyphPolicy, VariantGlyphs};
pub use layout::{assign_lanes, LanePolicy, LaneRecord, LayoutItem, Placement, TrackLayout};
pub use svg_builder::{estimate_text_width, SvgBuilder};
pub use track::{AnnotationTrack, VariantTrack};

use glyphs::{draw_feature, draw_highlight, feature_color};

// ═══════════════════════════════════════════════════════════════════════
// Frame
// ═══════════════════════════════════════════════════════════════════════

/// Everything produced by one draw pass.
#[derive(Debug, Clone)]
pub struct TrackFrame {
    pub svg: String,
    /// Height the track container should take
    pub container_height: f64,
    /// Height of the drawn content; exceeds the container when it scrolls
    pub content_height: f64,
    pub scale: f64,
    pub lane_count: u32,
    /// Feature ids in draw order, parallel to `placements`
    pub feature_ids: Vec<String>,
    pub placements: Vec<Placement>,
    pub hover_regions: Vec<HoverRegion>,
    pub highlights: usize,
    pub diagnostics: Vec<Diagnostic>,
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Run a full draw pass for `track`.
///
/// Fails only on a degenerate window or canvas, before anything is drawn.
pub fn render_track<T: AnnotationTrack>(
    track: &T,
    query: &QueryResult,
    viewport: &Viewport,
    highlighted_id: Option<&str>,
) -> Result<TrackFrame, RenderError> {
    let window = query.window();
    let ctx = RenderContext::new(window, viewport.canvas_width)?;
    let gate = ResolutionGate::snapshot(viewport);
    let cfg = track.config();
    let policy = track.glyph_policy();

    let mut features: Vec<&Feature> = if gate.is_open() {
        track
            .features(query)
            .iter()
            .filter(|f| f.overlaps(&window))
            .collect()
    } else {
        Vec::new()
    };
    features.sort_by_key(|f| f.start_pos);

    let labels: Vec<String> = features.iter().map(|f| policy.label(f)).collect();
    let items: Vec<LayoutItem> = features
        .iter()
        .zip(&labels)
        .map(|(f, label)| LayoutItem {
            draw_start: ctx.x(f.start_pos as f64),
            draw_end: ctx.x(f.end_pos as f64),
            label_center: ctx.x(f.midpoint()),
            label_width: estimate_text_width(label, cfg.text_size),
        })
        .collect();

    let lane_policy = if viewport.expanded {
        LanePolicy::Stacked
    } else {
        LanePolicy::SingleLane
    };
    let layout = assign_lanes(&items, lane_policy);

    if query.max_height_order != 0 && query.max_height_order != layout.lane_count {
        debug!(
            "upstream reported {} lanes, layout computed {}",
            query.max_height_order, layout.lane_count
        );
    }

    let (container_height, content_height) = if !gate.is_open() {
        (0.0, 0.0)
    } else if features.is_empty() {
        (cfg.empty_height, cfg.empty_height)
    } else {
        let lanes = if viewport.expanded { layout.lane_count } else { 1 };
        (
            track.container_height(lanes, viewport.expanded),
            track.content_height(lanes),
        )
    };

    let mut svg = SvgBuilder::new(viewport.canvas_width, content_height);
    let mut diagnostics = Vec::new();
    let mut hover_regions = Vec::with_capacity(features.len());
    let mut feature_ids = Vec::with_capacity(features.len());
    let mut placements = Vec::with_capacity(features.len());
    let mut highlights = 0;

    for ((feature, label), placement) in features.iter().zip(&labels).zip(&layout.placements) {
        if !viewport.expanded && placement.lane != 1 {
            continue;
        }
        let y = track.lane_y(placement.lane);
        let color = feature_color(&cfg.colors, feature, &mut diagnostics);

        draw_feature(
            &mut svg,
            policy,
            feature,
            placement.draw_start,
            placement.draw_end,
            y,
            color,
            &mut diagnostics,
        );

        if highlighted_id == Some(feature.id.as_str()) {
            draw_highlight(
                &mut svg,
                placement.draw_start,
                placement.draw_end,
                content_height,
                &cfg.highlight_color,
            );
            highlights += 1;
        }

        svg.text(
            label,
            ctx.x(feature.midpoint()),
            y + cfg.feature_height,
            cfg.text_size,
            placement.label_start,
        );

        hover_regions.push(HoverRegion {
            x: cfg.title_margin + placement.draw_start,
            y: (cfg.title_margin + y - cfg.feature_height / 2.0).max(0.0),
            width: placement.draw_end - placement.draw_start,
            height: cfg.feature_height + cfg.text_size,
            text: build_tooltip(feature),
        });
        feature_ids.push(feature.id.clone());
        placements.push(*placement);
    }

    debug!(
        "drew {} features in {}-{} (scale {:.6}, {} lanes, gate {})",
        placements.len(),
        window.start_pos,
        window.end_pos,
        ctx.scale,
        layout.lane_count,
        if gate.is_open() { "open" } else { "closed" }
    );

    Ok(TrackFrame {
        svg: svg.build(),
        container_height,
        content_height,
        scale: ctx.scale,
        lane_count: layout.lane_count,
        feature_ids,
        placements,
        hover_regions,
        highlights,
        diagnostics,
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Canvas
// ═══════════════════════════════════════════════════════════════════════

/// Holds the last successfully rendered frame of one track.
///
/// Draw passes take `&mut self`, so they cannot overlap on one canvas; a
/// failed pass leaves the previous frame in place.
#[derive(Debug, Default)]
pub struct TrackCanvas {
    frame: Option<TrackFrame>,
}

impl TrackCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&TrackFrame> {
        self.frame.as_ref()
    }

    pub fn redraw<T: AnnotationTrack>(
        &mut self,
        track: &T,
        query: &QueryResult,
        viewport: &Viewport,
        highlighted_id: Option<&str>,
    ) -> Result<&TrackFrame, RenderError> {
        let frame = render_track(track, query, viewport, highlighted_id)?;
        Ok(&*self.frame.insert(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackConfig;
    use crate::model::{ColorSchema, QueryData, VariantCategory};
    use pretty_assertions::assert_eq;

    fn feature(id: &str, category: &str, start: u64, end: u64) -> Feature {
        Feature {
            id: id.into(),
            chromosome: "1".into(),
            start_pos: start,
            end_pos: end,
            category: VariantCategory::from(category),
            subtype: category.to_uppercase(),
            variant_class: "sv".into(),
            length: (end - start) as i64,
            quality: Some(30.0),
            rank_score: Some(5.0),
            display_name: id.into(),
        }
    }

    fn query(start: u64, end: u64, variants: Vec<Feature>) -> QueryResult {
        QueryResult {
            start_pos: start,
            end_pos: end,
            max_height_order: 1,
            data: QueryData { variants },
        }
    }

    fn track() -> VariantTrack {
        VariantTrack::new(TrackConfig {
            colors: ColorSchema::new()
                .with("del", "#c0392b")
                .with("dup", "#2980b9")
                .with("default", "#555"),
            ..TrackConfig::default()
        })
    }

    #[test]
    fn deletion_scales_to_canvas() {
        let q = query(0, 2000, vec![feature("v1", "del", 1000, 1500)]);
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, false), None).unwrap();
        assert_eq!(frame.scale, 0.5);
        let p = frame.placements[0];
        assert_eq!((p.lane, p.draw_start, p.draw_end), (1, 500.0, 750.0));
        // lane 1 top is 2.0, wave centered 3.5 below it
        assert!(frame.svg.contains("d=\"M500.0,5.5"));
        assert!(frame.svg.contains("stroke=\"#c0392b\""));
        assert!(frame.diagnostics.is_empty());
    }

    #[test]
    fn collapsed_identical_dups_share_lane_one() {
        let q = query(
            0,
            2000,
            vec![feature("a", "dup", 100, 900), feature("b", "dup", 100, 900)],
        );
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, false), None).unwrap();
        assert_eq!(frame.placements.len(), 2);
        assert!(frame.placements.iter().all(|p| p.lane == 1));
        assert_eq!(frame.svg.matches(r#"y1="6.0""#).count(), 2);
        assert_eq!(frame.svg.matches(r#"y1="2.0""#).count(), 2);
        assert_eq!(frame.container_height, 32.0);
        let [a, b] = [frame.placements[0], frame.placements[1]];
        assert!(b.label_start >= a.label_end);
    }

    #[test]
    fn expanded_stacks_overlaps() {
        let q = query(
            0,
            2000,
            vec![feature("a", "dup", 100, 900), feature("b", "dup", 100, 900)],
        );
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, true), None).unwrap();
        let lanes: Vec<u32> = frame.placements.iter().map(|p| p.lane).collect();
        assert_eq!(lanes, vec![1, 2]);
        assert_eq!(frame.lane_count, 2);
        assert_eq!(frame.content_height, 60.0);
        assert_eq!(frame.container_height, 60.0);
    }

    #[test]
    fn highlight_matches_exactly_one_feature() {
        let q = query(
            0,
            2000,
            vec![feature("a", "del", 100, 300), feature("b", "dup", 1200, 1600)],
        );
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, false), Some("b")).unwrap();
        assert_eq!(frame.highlights, 1);
        assert_eq!(frame.svg.matches("<rect").count(), 1);
        assert!(frame
            .svg
            .contains(r#"<rect x="600.0" y="0.0" width="201.0" height="32.0" fill="rgba(255,200,87,0.5)"/>"#));
    }

    #[test]
    fn closed_gate_collapses_to_zero() {
        let q = query(0, 2000, vec![feature("a", "del", 100, 300)]);
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 5, 4, false), None).unwrap();
        assert_eq!(frame.container_height, 0.0);
        assert!(frame.placements.is_empty());
        assert!(!frame.svg.contains("<path"));

        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 4, 4, false), None).unwrap();
        assert_eq!(frame.placements.len(), 1);
        assert!(frame.container_height > 0.0);
    }

    #[test]
    fn empty_window_uses_empty_height() {
        let q = query(0, 2000, vec![feature("a", "del", 5000, 6000)]);
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, false), None).unwrap();
        assert!(frame.placements.is_empty());
        assert_eq!(frame.container_height, TrackConfig::default().empty_height);
    }

    #[test]
    fn unknown_category_still_draws() {
        let q = query(0, 2000, vec![feature("x", "inv", 100, 300)]);
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, false), None).unwrap();
        assert_eq!(frame.placements.len(), 1);
        assert!(frame.svg.contains("stroke=\"#555\""));
        assert_eq!(frame.diagnostics.len(), 2);
    }

    #[test]
    fn hover_regions_carry_tooltips() {
        let q = query(0, 2000, vec![feature("v1", "del", 1000, 1500)]);
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, false), None).unwrap();
        let region = &frame.hover_regions[0];
        assert_eq!((region.x, region.y, region.width, region.height), (502.0, 0.0, 250.0, 28.0));
        assert!(region.text.starts_with("Id: v1\nPosition: 1:1000-1500\n"));
    }

    #[test]
    fn hover_regions_stay_on_canvas() {
        let q = query(
            0,
            2000,
            vec![feature("a", "dup", 100, 900), feature("b", "dup", 100, 900)],
        );
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, true), None).unwrap();
        let ys: Vec<f64> = frame.hover_regions.iter().map(|r| r.y).collect();
        // lane 2 top is 30.0
        assert_eq!(ys, vec![0.0, 23.0]);
    }

    #[test]
    fn huge_deletion_is_drawn_within_canvas() {
        let q = query(1000, 2000, vec![feature("big", "del", 0, 5_000_000)]);
        let frame = render_track(&track(), &q, &Viewport::new(1000.0, 1, 4, false), None).unwrap();
        assert_eq!(frame.placements.len(), 1);
        assert_eq!(frame.svg.matches("<path class=\"wave\"").count(), 1);
        assert!(frame.svg.len() < 50_000, "svg is {} bytes", frame.svg.len());
    }

    #[test]
    fn failed_redraw_keeps_previous_frame() {
        let mut canvas = TrackCanvas::new();
        let good = query(0, 2000, vec![feature("v1", "del", 1000, 1500)]);
        let vp = Viewport::new(1000.0, 1, 4, false);
        let svg = canvas.redraw(&track(), &good, &vp, None).unwrap().svg.clone();

        let bad = query(700, 700, vec![]);
        assert!(matches!(
            canvas.redraw(&track(), &bad, &vp, None),
            Err(RenderError::DegenerateWindow { .. })
        ));
        assert_eq!(canvas.frame().map(|f| f.svg.as_str()), Some(svg.as_str()));
    }
}
