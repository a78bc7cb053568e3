//! Genomic → pixel coordinate transform.
//!
//! All arithmetic is done in `f64`: positions up to a few hundred million
//! bases stay exact, and single-base windows still get a finite scale.

use crate::error::RenderError;
use crate::model::ViewWindow;

/// Per-pass transform state. Rebuilt for every draw, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Pixels per base
    pub scale: f64,
    pub window_start: u64,
    pub canvas_width: f64,
}

impl RenderContext {
    /// Validate the window and canvas, then derive the scale.
    pub fn new(window: ViewWindow, canvas_width: f64) -> Result<Self, RenderError> {
        if window.end_pos <= window.start_pos {
            return Err(RenderError::DegenerateWindow {
                start: window.start_pos,
                end: window.end_pos,
            });
        }
        if !(canvas_width.is_finite() && canvas_width > 0.0) {
            return Err(RenderError::InvalidCanvasWidth(canvas_width));
        }
        Ok(Self {
            scale: canvas_width / window.span() as f64,
            window_start: window.start_pos,
            canvas_width,
        })
    }

    /// Pixel x of a genomic position.
    pub fn x(&self, genomic_pos: f64) -> f64 {
        (genomic_pos - self.window_start as f64) * self.scale
    }
}

/// `(pos - start) * width / (end - start)`, failing on a degenerate window.
pub fn to_pixel_x(genomic_pos: f64, window: ViewWindow, canvas_width: f64) -> Result<f64, RenderError> {
    if window.end_pos <= window.start_pos {
        return Err(RenderError::DegenerateWindow {
            start: window.start_pos,
            end: window.end_pos,
        });
    }
    let start = window.start_pos as f64;
    let end = window.end_pos as f64;
    Ok((genomic_pos - start) * canvas_width / (end - start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_canvas_edges() {
        let w = ViewWindow::new(0, 2000);
        assert_eq!(to_pixel_x(0.0, w, 1000.0).unwrap(), 0.0);
        assert_eq!(to_pixel_x(2000.0, w, 1000.0).unwrap(), 1000.0);
        assert_eq!(to_pixel_x(1000.0, w, 1000.0).unwrap(), 500.0);
    }

    #[test]
    fn monotonic_over_window() {
        let w = ViewWindow::new(12_345, 98_765);
        let mut prev = f64::NEG_INFINITY;
        for p in (12_345..98_765).step_by(997) {
            let x = to_pixel_x(p as f64, w, 1234.0).unwrap();
            assert!(x >= prev, "x must not decrease at {p}");
            prev = x;
        }
    }

    #[test]
    fn whole_chromosome_and_single_base_windows() {
        let chr1 = ViewWindow::new(0, 248_956_422);
        assert_eq!(to_pixel_x(248_956_422.0, chr1, 1500.0).unwrap(), 1500.0);
        assert!((to_pixel_x(124_478_211.0, chr1, 1500.0).unwrap() - 750.0).abs() < 1e-9);

        let one = ViewWindow::new(248_956_421, 248_956_422);
        assert_eq!(to_pixel_x(248_956_421.0, one, 1500.0).unwrap(), 0.0);
        assert_eq!(to_pixel_x(248_956_422.0, one, 1500.0).unwrap(), 1500.0);
    }

    #[test]
    fn degenerate_window_is_rejected() {
        let w = ViewWindow::new(500, 500);
        assert!(matches!(
            to_pixel_x(500.0, w, 100.0),
            Err(RenderError::DegenerateWindow { start: 500, end: 500 })
        ));
        assert!(RenderContext::new(ViewWindow::new(600, 500), 100.0).is_err());
    }

    #[test]
    fn context_matches_free_function() {
        let w = ViewWindow::new(0, 2000);
        let ctx = RenderContext::new(w, 1000.0).unwrap();
        assert_eq!(ctx.scale, 0.5);
        assert_eq!(ctx.x(1000.0), 500.0);
        assert_eq!(ctx.x(1500.0), 750.0);
    }

    #[test]
    fn zero_canvas_width_is_rejected() {
        let w = ViewWindow::new(0, 10);
        assert!(matches!(
            RenderContext::new(w, 0.0),
            Err(RenderError::InvalidCanvasWidth(_))
        ));
    }
}
