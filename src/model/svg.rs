//! SVG serialization of bone images.

use super::bone::{BoneImage, Element};
use std::fmt::Write;

const STROKE: &str = "fill:none;stroke:#000000;stroke-linecap:square;stroke-linejoin:round";
const TEXT: &str = "font-style:normal;font-weight:bold;fill:#000000;stroke:none;\
font-family:Sans;text-anchor:middle;dominant-baseline:central";

/// Render a strip as a standalone SVG document.
pub fn to_svg(image: &BoneImage) -> String {
    let scale = image.scale();
    let stroke_width = coord(2.0 * scale);
    let mut svg = String::new();

    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}">"#,
        coord(image.width()),
        coord(image.height())
    );

    for element in image.elements() {
        match *element {
            Element::Box { x, y, size } => {
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" style="{};stroke-width:{}" />"#,
                    coord(x),
                    coord(y),
                    coord(size),
                    coord(size),
                    STROKE,
                    stroke_width
                );
            }
            Element::Frame {
                x,
                y,
                width,
                height,
            } => {
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" style="{};stroke-width:{}" />"#,
                    coord(x),
                    coord(y),
                    coord(width),
                    coord(height),
                    STROKE,
                    stroke_width
                );
            }
            Element::Diagonal { x1, y1, x2, y2 } => {
                let _ = writeln!(
                    svg,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" style="{};stroke-width:{}" />"#,
                    coord(x1),
                    coord(y1),
                    coord(x2),
                    coord(y2),
                    STROKE,
                    stroke_width
                );
            }
            Element::Glyph { x, y, size, text } => {
                let _ = writeln!(
                    svg,
                    r#"  <text x="{}" y="{}" style="font-size:{}px;{}">{}</text>"#,
                    coord(x),
                    coord(y),
                    coord(size),
                    TEXT,
                    text
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn coord(value: f64) -> String {
    let text = format!("{:.3}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
