//! SVG document sink

use std::fmt::Write;

use super::sink::{LineSegment, LineSink};
use super::vertex::colors;
use crate::settings::Canvas;

/// `[r, g, b, a]` floats as a CSS color
fn css_color(color: [f32; 4]) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let [r, g, b, a] = color;
    if a >= 1.0 {
        format!("rgb({},{},{})", channel(r), channel(g), channel(b))
    } else {
        format!("rgba({},{},{},{:.3})", channel(r), channel(g), channel(b), a.max(0.0))
    }
}

/// Accumulates `<line>` elements for a canvas of fixed size
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f32,
    height: f32,
    body: String,
}

impl SvgCanvas {
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            body: String::new(),
        }
    }

    /// The complete SVG document
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            bg = css_color(colors::BACKGROUND),
            body = self.body,
        )
    }
}

impl LineSink for SvgCanvas {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn line(&mut self, segment: &LineSegment) {
        // Writing into a String cannot fail
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            css_color(segment.color),
            segment.stroke_width,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(colors::LADDER), "rgb(51,51,51)");
        assert_eq!(css_color([1.0, 0.0, 0.0, 0.5]), "rgba(255,0,0,0.500)");
    }

    #[test]
    fn test_svg_document() {
        let mut svg = SvgCanvas::new(&Canvas::default());
        svg.line(&LineSegment::new(
            Vec2::new(150.0, 30.0),
            Vec2::new(150.0, 320.0),
            3.0,
            colors::LADDER,
        ));
        let doc = svg.to_svg();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("viewBox=\"0 0 600 350\""));
        assert!(doc.contains("x1=\"150.00\" y1=\"30.00\" x2=\"150.00\" y2=\"320.00\""));
        assert!(doc.trim_end().ends_with("</svg>"));

        svg.clear();
        assert!(!svg.to_svg().contains("<line"));
    }
}
