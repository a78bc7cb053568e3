//! Shared constants for the track renderer (all in canvas pixels).

// ── Track dimensions ────────────────────────────────────────────────
pub const DEFAULT_FEATURE_HEIGHT: f64 = 18.0;
pub const DEFAULT_TEXT_SIZE: f64 = 10.0;
pub const DEFAULT_VISIBLE_HEIGHT: f64 = 100.0; // expanded viewport; content overflows for scroll
pub const DEFAULT_EMPTY_HEIGHT: f64 = 4.0; // chrome of an admitted but empty track
pub const DEFAULT_TITLE_MARGIN: f64 = 2.0;
pub const DEFAULT_MAX_RESOLUTION: u32 = 4;

// ── Glyphs ──────────────────────────────────────────────────────────
pub(crate) const WAVE_HEIGHT: f64 = 7.0; // deletion wave amplitude, peak to trough
pub(crate) const WAVE_LENGTH: f64 = 8.0; // pixels per full sine period
pub(crate) const WAVE_STEP: f64 = 1.0; // path sampling interval
pub(crate) const DUP_LINE_GAP: f64 = 4.0;
pub(crate) const LINE_WIDTH: f64 = 2.0;
pub(crate) const ARROW_HEAD: f64 = 5.0;
pub(crate) const POINT_RADIUS: f64 = 1.5;

// ── Text ────────────────────────────────────────────────────────────
pub(crate) const CHAR_WIDTH_FACTOR: f64 = 0.55;
pub(crate) const TEXT_COLOR: &str = "black";

// ── Colors ──────────────────────────────────────────────────────────
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "rgba(255,200,87,0.5)";
