//! annotrack — layout and SVG rendering of linear genomic annotation tracks.
//!
//! Takes an annotation query result (structural variants and their
//! genomic extents), maps it into the pixel space of the visible window,
//! stacks overlapping features into lanes, and draws one glyph and label per
//! feature plus an optional highlight overlay.
//!
//! # Example
//! ```no_run
//! use annotrack::{render_track, QueryResult, TrackConfig, VariantTrack, Viewport};
//!
//! let json = std::fs::read_to_string("query.json").unwrap();
//! let query = QueryResult::from_json(&json).unwrap();
//! let track = VariantTrack::new(TrackConfig::default());
//! let frame = render_track(&track, &query, &Viewport::new(1200.0, 1, 4, true), None).unwrap();
//! println!("{} lanes, {}px tall", frame.lane_count, frame.container_height);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod renderer;
pub mod resolution;
pub mod tooltip;
pub mod transform;

pub use config::TrackConfig;
pub use error::{Diagnostic, RenderError};
pub use model::*;
pub use renderer::{
    render_track, AnnotationTrack, Glyph, GlyphPolicy, LanePolicy, Placement, SvgBuilder,
    TrackCanvas, TrackFrame, VariantGlyphs, VariantTrack,
};
pub use resolution::{should_render, ResolutionGate};
pub use tooltip::{build_tooltip, HoverRegion};
pub use transform::{to_pixel_x, RenderContext};

/// Parse a query result (and optional track config) from JSON and render
/// the variant track to SVG.
pub fn render_json_to_svg(
    query_json: &str,
    config_json: Option<&str>,
    viewport: &Viewport,
    highlighted_id: Option<&str>,
) -> Result<String, RenderError> {
    let query = QueryResult::from_json(query_json)?;
    let config = match config_json {
        Some(json) => TrackConfig::from_json(json)?,
        None => TrackConfig::default(),
    };
    let track = VariantTrack::new(config);
    Ok(render_track(&track, &query, viewport, highlighted_id)?.svg)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for embedding in non-Rust browser shells
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

unsafe fn optional_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        None
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_str().ok()
    }
}

/// Render a variant track from a JSON query result and return SVG as a C string.
/// The caller must free the returned string with `annotrack_free_string`.
///
/// `config_json` and `highlighted_id` may be null. `max_resolution` of 0
/// selects the default threshold. Returns null on any error.
///
/// # Safety
/// `query_json` must be a valid null-terminated UTF-8 C string; the optional
/// pointers must be null or valid null-terminated C strings.
#[no_mangle]
pub unsafe extern "C" fn annotrack_render_json(
    query_json: *const c_char,
    config_json: *const c_char,
    canvas_width: f64,
    resolution: u32,
    max_resolution: u32,
    expanded: bool,
    highlighted_id: *const c_char,
) -> *mut c_char {
    let Some(query) = (unsafe { optional_str(query_json) }) else {
        return std::ptr::null_mut();
    };
    let config = unsafe { optional_str(config_json) };
    let highlight = unsafe { optional_str(highlighted_id) };

    let max_resolution = if max_resolution > 0 {
        max_resolution
    } else {
        renderer::constants::DEFAULT_MAX_RESOLUTION
    };
    let viewport = Viewport::new(canvas_width, resolution, max_resolution, expanded);

    let svg = match render_json_to_svg(query, config, &viewport, highlight) {
        Ok(svg) => svg,
        Err(e) => {
            log::error!("track render failed: {e}");
            return std::ptr::null_mut();
        }
    };
    match CString::new(svg) {
        Ok(svg) => svg.into_raw(),
        Err(e) => {
            log::error!("rendered svg has an interior NUL at byte {}", e.nul_position());
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by annotrack functions.
///
/// # Safety
/// `ptr` must be a string previously returned by an annotrack function, or null.
#[no_mangle]
pub unsafe extern "C" fn annotrack_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
