//! Paints recorded shapes onto a ratatui braille canvas.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
};
use hawiyat_core::{CELL_WIDTH, Rgba};

use crate::chars::BAND_CHARS;
use crate::surface::{DisplayList, Shape, Surface};

/// Links are drawn as this many straight pieces to show the gradient.
const LINK_SEGMENTS: usize = 3;

/// Particles smaller than this are a single braille dot.
const DOT_RADIUS: f32 = 2.0;

/// Braille dots are sparse, so alpha is scaled up before compositing.
const ALPHA_GAIN: f32 = 1.8;

/// Glyphs are a full cell, so they need less gain than dots.
const GLYPH_GAIN: f32 = 1.2;

fn shade(color: Rgba, gain: f32) -> ratatui::style::Color {
    color.with_alpha(color.a * gain).over_black()
}

/// Paint `list` into `area`. The list's viewport is stretched over the area.
pub fn paint(frame: &mut Frame, area: Rect, list: &DisplayList) {
    let viewport = list.viewport();
    if viewport.is_empty() || area.is_empty() || list.is_empty() {
        return;
    }
    let width = viewport.width as f64;
    let height = viewport.height as f64;
    let columns = (viewport.width / CELL_WIDTH).ceil() as usize;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for shape in list.shapes() {
                paint_shape(ctx, shape, height, columns);
            }
        });
    frame.render_widget(canvas, area);
}

fn paint_shape(ctx: &mut Context, shape: &Shape, height: f64, columns: usize) {
    // Canvas y grows upward.
    let flip = |y: f32| height - y as f64;

    match *shape {
        Shape::Link(link) => {
            for segment in 0..LINK_SEGMENTS {
                let t0 = segment as f32 / LINK_SEGMENTS as f32;
                let t1 = (segment + 1) as f32 / LINK_SEGMENTS as f32;
                let x0 = link.from.x + (link.to.x - link.from.x) * t0;
                let y0 = link.from.y + (link.to.y - link.from.y) * t0;
                let x1 = link.from.x + (link.to.x - link.from.x) * t1;
                let y1 = link.from.y + (link.to.y - link.from.y) * t1;
                let color = shade(link.color_at((t0 + t1) / 2.0), ALPHA_GAIN);
                ctx.draw(&CanvasLine::new(x0 as f64, flip(y0), x1 as f64, flip(y1), color));
            }
        }
        Shape::Circle {
            center,
            radius,
            color,
        } => {
            let color = shade(color, ALPHA_GAIN);
            ctx.draw(&Points {
                coords: &[(center.x as f64, flip(center.y))],
                color,
            });
            if radius >= DOT_RADIUS {
                ctx.draw(&Circle {
                    x: center.x as f64,
                    y: flip(center.y),
                    radius: radius as f64,
                    color,
                });
            }
        }
        Shape::Glyph { at, glyph, color } => {
            let span = Span::styled(glyph.to_string(), Style::new().fg(shade(color, GLYPH_GAIN)));
            ctx.print(at.x as f64, flip(at.y), span);
        }
        Shape::Band {
            y,
            thickness,
            offset,
            color,
        } => {
            let ch = if thickness > 2.0 {
                BAND_CHARS[1]
            } else {
                BAND_CHARS[0]
            };
            let span = Span::from(ch.to_string().repeat(columns)).fg(shade(color, GLYPH_GAIN));
            ctx.print(offset.max(0.0) as f64, flip(y), span);
        }
    }
}
