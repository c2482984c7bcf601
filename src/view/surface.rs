//! Work surface widget.
//!
//! Paints the slot row and read-off markers onto a braille canvas. One
//! braille dot is one surface unit, so the controller's geometry maps onto
//! the canvas without conversion apart from flipping the y axis.

use super::styles::SurfaceStyles;
use crate::model::{BoneImage, Element};
use crate::state::{Controller, Point};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line, Painter, Rectangle, Shape},
        Widget,
    },
};

/// Read-only view of the controller's slots and markers.
pub struct SurfaceView<'a> {
    controller: &'a Controller,
    styles: &'a SurfaceStyles,
}

impl<'a> SurfaceView<'a> {
    pub fn new(controller: &'a Controller, styles: &'a SurfaceStyles) -> Self {
        Self { controller, styles }
    }
}

impl Widget for SurfaceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let right = f64::from(area.width) * 2.0 - 1.0;
        let top = f64::from(area.height) * 4.0 - 1.0;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, right])
            .y_bounds([0.0, top])
            .paint(|ctx| {
                for slot in self.controller.slots() {
                    let image = self.controller.image_for(slot);
                    draw_image(ctx, image, f64::from(slot.x), top, self.styles);
                }
                ctx.layer();
                draw_markers(ctx, self.controller, top, self.styles);
            })
            .render(area, buf);
    }
}

fn draw_image(ctx: &mut Context, image: &BoneImage, left: f64, top: f64, styles: &SurfaceStyles) {
    let color = styles.line_for(image.kind());
    for element in image.elements() {
        match *element {
            Element::Box { x, y, size } => ctx.draw(&Rectangle {
                x: left + x,
                y: top - (y + size),
                width: size,
                height: size,
                color,
            }),
            Element::Frame {
                x,
                y,
                width,
                height,
            } => ctx.draw(&Rectangle {
                x: left + x,
                y: top - (y + height),
                width,
                height,
                color,
            }),
            Element::Diagonal { x1, y1, x2, y2 } => ctx.draw(&Line::new(
                left + x1,
                top - y1,
                left + x2,
                top - y2,
                color,
            )),
            // A terminal cell is two dots wide; shift left so the cell is centred.
            Element::Glyph { x, y, text, .. } => ctx.print(
                (left + x - 1.0).max(0.0),
                top - y,
                Span::styled(text.to_string(), styles.glyph_for(image.kind())),
            ),
        }
    }
}

fn draw_markers(ctx: &mut Context, controller: &Controller, top: f64, styles: &SurfaceStyles) {
    let geometry = controller.geometry();
    let markers = controller.markers();

    let circle = f64::from(geometry.circle_size());
    for (point, color) in [
        (markers.start, styles.start_circle),
        (markers.end, styles.end_circle),
    ] {
        if let Some(point) = point {
            let (x, y) = centre(point, circle, circle, top);
            ctx.draw(&Circle {
                x,
                y,
                radius: circle / 2.0,
                color,
            });
        }
    }

    let (width, height) = geometry.oval_size();
    let (width, height) = (f64::from(width), f64::from(height));
    for &point in &markers.ovals {
        let (x, y) = centre(point, width, height, top);
        ctx.draw(&Oval {
            x,
            y,
            x_radius: width / 2.0,
            y_radius: height / 2.0,
            color: styles.oval,
        });
    }
}

/// Canvas coordinates of the centre of a box whose top-left is `point`.
fn centre(point: Point, width: f64, height: f64, top: f64) -> (f64, f64) {
    (
        f64::from(point.x) + width / 2.0,
        top - (f64::from(point.y) + height / 2.0),
    )
}

/// Axis-aligned ellipse outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oval {
    pub x: f64,
    pub y: f64,
    pub x_radius: f64,
    pub y_radius: f64,
    pub color: Color,
}

impl Shape for Oval {
    fn draw(&self, painter: &mut Painter) {
        let steps = ((self.x_radius.max(self.y_radius) * 8.0) as usize).max(16);
        for step in 0..steps {
            let angle = std::f64::consts::TAU * step as f64 / steps as f64;
            let x = self.x + self.x_radius * angle.cos();
            let y = self.y + self.y_radius * angle.sin();
            if let Some((column, row)) = painter.get_point(x, y) {
                painter.paint(column, row, self.color);
            }
        }
    }
}
