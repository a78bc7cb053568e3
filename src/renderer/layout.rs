//! Height-order layout — assigns each feature a lane so that glyphs and
//! labels sharing a lane never overlap, and places each label against its
//! lane's running frontier.
//!
//! The accumulator lives only for one call of [`assign_lanes`]; nothing is
//! carried between draw passes.

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

/// Pixel extents of one feature before lane assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutItem {
    pub draw_start: f64,
    pub draw_end: f64,
    /// Pixel x the label is centered on
    pub label_center: f64,
    pub label_width: f64,
}

impl LayoutItem {
    fn natural_label_start(&self) -> f64 {
        self.label_center - self.label_width / 2.0
    }

    /// Leftmost pixel the feature occupies, glyph or label.
    fn footprint_start(&self) -> f64 {
        self.draw_start.min(self.natural_label_start())
    }
}

/// Per-lane frontier. A fresh lane starts zeroed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaneRecord {
    /// Right edge of the last label drawn on this lane
    pub latest_name_end: f64,
    /// Right edge of the last glyph drawn on this lane
    pub latest_track_end: f64,
    pub features: usize,
}

impl LaneRecord {
    fn frontier(&self) -> f64 {
        self.latest_name_end.max(self.latest_track_end)
    }

    fn accepts(&self, item: &LayoutItem) -> bool {
        self.features == 0 || self.frontier() <= item.footprint_start()
    }
}

/// How features are distributed over lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePolicy {
    /// Every feature on lane 1; labels still respect the frontier.
    SingleLane,
    /// Lowest lane whose frontier clears the feature's footprint.
    Stacked,
}

/// Final placement of one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// 1-based height order
    pub lane: u32,
    pub draw_start: f64,
    pub draw_end: f64,
    pub label_start: f64,
    pub label_end: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackLayout {
    pub placements: Vec<Placement>,
    pub lane_count: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// Lane assignment
// ═══════════════════════════════════════════════════════════════════════

/// Assign lanes to items given in ascending start order.
///
/// Items are trusted to be overlap-filtered against the view window; no
/// clipping happens here.
pub fn assign_lanes(items: &[LayoutItem], policy: LanePolicy) -> TrackLayout {
    let mut lanes: Vec<LaneRecord> = Vec::new();
    let mut placements = Vec::with_capacity(items.len());

    for item in items {
        let idx = match policy {
            LanePolicy::SingleLane => 0,
            LanePolicy::Stacked => lanes
                .iter()
                .position(|rec| rec.accepts(item))
                .unwrap_or(lanes.len()),
        };
        if idx == lanes.len() {
            lanes.push(LaneRecord::default());
        }
        let rec = &mut lanes[idx];

        let label_start = item.natural_label_start().max(rec.latest_name_end);
        let label_end = label_start + item.label_width;
        rec.latest_name_end = label_end;
        rec.latest_track_end = rec.latest_track_end.max(item.draw_end);
        rec.features += 1;

        placements.push(Placement {
            lane: idx as u32 + 1,
            draw_start: item.draw_start,
            draw_end: item.draw_end,
            label_start,
            label_end,
        });
    }

    TrackLayout {
        placements,
        lane_count: lanes.len() as u32,
    }
}
