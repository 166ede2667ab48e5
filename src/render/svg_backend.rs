use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign};

/// Renders frames into standalone SVG documents.
///
/// The output mirrors the chart's canonical vector form: an outer
/// frame-sized `<svg>`, one `<g>` translated by the margins, axis lines and
/// labels, and one `<circle>` per mark.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the most recent render pass.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let viewport = frame.layout.viewport;
        let margins = frame.layout.margins;

        let mut out = String::with_capacity(1024 + frame.circles.len() * 96);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            viewport.width, viewport.height
        ));
        out.push_str(&format!(
            "  <g transform=\"translate({},{})\">\n",
            fmt_coord(margins.left),
            fmt_coord(margins.top)
        ));

        for line in &frame.lines {
            out.push_str(&format!(
                "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                fmt_coord(line.x1),
                fmt_coord(line.y1),
                fmt_coord(line.x2),
                fmt_coord(line.y2),
                line.color.to_hex_rgb(),
                fmt_coord(line.stroke_width)
            ));
        }

        for circle in &frame.circles {
            out.push_str(&format!(
                "    <circle class=\"dot\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                fmt_coord(circle.cx),
                fmt_coord(circle.cy),
                fmt_coord(circle.radius),
                circle.fill.to_hex_rgb()
            ));
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            out.push_str(&format!(
                "    <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\" fill=\"{}\">{}</text>\n",
                fmt_coord(text.x),
                fmt_coord(text.y),
                fmt_coord(text.font_size_px),
                anchor,
                text.color.to_hex_rgb(),
                escape_text(&text.text)
            ));
        }

        out.push_str("  </g>\n</svg>\n");
        self.document = out;
        Ok(())
    }
}

// Short fixed-precision coordinates keep documents diff-friendly.
fn fmt_coord(value: f64) -> String {
    let mut formatted = format!("{value:.2}");
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    if formatted == "-0" {
        formatted = "0".to_owned();
    }
    formatted
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
