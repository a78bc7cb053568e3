//! SVG builder — the drawing surface for a track.
//!
//! Accumulates primitive elements (lines, wave lines, arrows, boxes, text,
//! points) and produces the final SVG string.

use std::f64::consts::TAU;

use super::constants::*;

/// Estimate the rendered width of a text string in pixels for a given font size.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR
}

/// Escape text content. Control characters other than tab and newlines are
/// not allowed in XML and are dropped.
fn escape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Escape a value placed inside a double-quoted attribute.
fn escape_attr(value: &str) -> String {
    escape(value).replace('"', "&quot;")
}

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: sans-serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1,
            y1,
            x2,
            y2,
            escape_attr(color),
            width
        ));
    }

    /// Horizontal sine wave from `x1` to `x2`, centered on `y`, `height` peak to trough.
    ///
    /// Only the part inside `[0, width]` is sampled; the phase stays anchored
    /// at `x1`, so a clipped wave matches the visible slice of the full one.
    pub fn wave_line(&mut self, x1: f64, x2: f64, y: f64, height: f64, color: &str) {
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (from, to) = (x1.max(0.0), x2.min(self.width));
        if from > to {
            return;
        }
        let amplitude = height / 2.0;
        let wave_y = |x: f64| y - amplitude * ((x - x1) / WAVE_LENGTH * TAU).sin();

        let mut d = format!("M{:.1},{:.1}", from, wave_y(from));
        let mut x = from + WAVE_STEP;
        while x < to {
            d.push_str(&format!(" L{:.1},{:.1}", x, wave_y(x)));
            x += WAVE_STEP;
        }
        d.push_str(&format!(" L{:.1},{:.1}", to, wave_y(to)));
        self.elements.push(format!(
            r#"<path class="wave" d="{}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            d,
            escape_attr(color),
            LINE_WIDTH
        ));
    }

    /// Horizontal arrow; the head points right when `direction >= 0`, left otherwise.
    pub fn arrow(&mut self, x1: f64, x2: f64, y: f64, direction: i8, color: &str, width: f64) {
        self.line(x1, y, x2, y, color, width);
        let (tip, back) = if direction >= 0 {
            (x2, x2 - ARROW_HEAD)
        } else {
            (x1, x1 + ARROW_HEAD)
        };
        let d = format!(
            "M{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1}",
            back,
            y - ARROW_HEAD,
            tip,
            y,
            back,
            y + ARROW_HEAD
        );
        self.elements.push(format!(
            r#"<path class="arrow" d="{}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            d,
            escape_attr(color),
            width
        ));
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x,
            y,
            w,
            h,
            escape_attr(fill)
        ));
    }

    /// Draw text centered on `x`, shifted right so it starts no earlier than
    /// `min_start`. Returns the right edge of the drawn text.
    pub fn text(&mut self, content: &str, x: f64, y: f64, size: f64, min_start: f64) -> f64 {
        let width = estimate_text_width(content, size);
        let start = (x - width / 2.0).max(min_start);
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="start">{}</text>"#,
            start,
            y,
            size,
            TEXT_COLOR,
            escape(content)
        ));
        start + width
    }

    /// Text rotated `angle` degrees around its anchor point.
    pub fn rotated_text(&mut self, content: &str, x: f64, y: f64, angle: f64, size: f64, color: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="middle" transform="rotate({:.1},{:.1},{:.1})">{}</text>"#,
            x,
            y,
            size,
            escape_attr(color),
            angle,
            x,
            y,
            escape(content)
        ));
    }

    pub fn point(&mut self, x: f64, y: f64, color: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            x,
            y,
            POINT_RADIUS,
            escape_attr(color)
        ));
    }

    pub fn points(&mut self, points: &[(f64, f64)], color: &str) {
        for &(x, y) in points {
            self.point(x, y, color);
        }
    }
}
