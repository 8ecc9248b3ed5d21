//! Retained-mode drawing layer.
//!
//! Panel elements append [`DrawCommand`]s to a [`Scene`]; nothing touches
//! pixels until [`Scene::render`] replays the command list onto a [`Canvas`].
//! Composition therefore needs no font and no buffer, which keeps the layout
//! code pure and testable.

use rusttype::{point, Font, PositionedGlyph, Scale as FontScale};

use crate::color::Color;

/// Horizontal anchoring for text commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        fill: Color,
    },
    /// Rectangle outline drawn as four dashed edges (`dash = (on, off)` in
    /// pixels); used for the rain-bar forecast frame.
    DashedRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        thickness: f32,
        dash: (f32, f32),
    },
    /// Filled triangle; the trend arrows.
    Triangle {
        points: [(i32, i32); 3],
        fill: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: f32,
        color: Color,
    },
    /// Needle line, tapering towards the tip.
    TaperedLine {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: f32,
        color: Color,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
    },
    /// Ring segment between two dial angles (degrees, 0 = right, counted
    /// counter-clockwise on screen); one gauge zone.
    Wedge {
        cx: i32,
        cy: i32,
        outer_radius: f64,
        inner_radius: f64,
        start_deg: f64,
        end_deg: f64,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        size: f32,
        color: Color,
        anchor: Anchor,
    },
}

/// Ordered list of drawing commands for one render invocation.
#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay every command onto the canvas.
    pub fn render(&self, canvas: &mut Canvas, font: &Font) {
        for command in &self.commands {
            match *command {
                DrawCommand::Clear(color) => canvas.clear(color),
                DrawCommand::Rect { x, y, w, h, fill } => fill_rect(canvas, x, y, w, h, fill),
                DrawCommand::DashedRect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    thickness,
                    dash,
                } => {
                    let corners = [
                        ((x, y), (x + w, y)),
                        ((x + w, y), (x + w, y + h)),
                        ((x + w, y + h), (x, y + h)),
                        ((x, y + h), (x, y)),
                    ];
                    for ((x0, y0), (x1, y1)) in corners {
                        draw_dashed_line(canvas, x0, y0, x1, y1, thickness, dash, color);
                    }
                }
                DrawCommand::Triangle { points, fill } => fill_triangle(canvas, points, fill),
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => draw_thick_line_aa(canvas, x0, y0, x1, y1, thickness, color),
                DrawCommand::TaperedLine {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => draw_thick_line_tapered_aa(canvas, x0, y0, x1, y1, thickness, color),
                DrawCommand::Circle {
                    cx,
                    cy,
                    radius,
                    color,
                } => draw_circle(canvas, cx, cy, radius, color),
                DrawCommand::Wedge {
                    cx,
                    cy,
                    outer_radius,
                    inner_radius,
                    start_deg,
                    end_deg,
                    color,
                } => draw_wedge(
                    canvas,
                    cx,
                    cy,
                    outer_radius,
                    inner_radius,
                    start_deg,
                    end_deg,
                    color,
                ),
                DrawCommand::Text {
                    x,
                    y,
                    ref text,
                    size,
                    color,
                    anchor,
                } => draw_text(canvas, x, y, text, font, FontScale::uniform(size), color, anchor),
            }
        }
    }
}

/// Owned RGBA framebuffer the scene renders into.
pub struct Canvas {
    frame: Vec<u8>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: vec![0xff; width * height * 4],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Hand the buffer to the `image` crate for PNG encoding.
    pub fn into_image(self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width as u32, self.height as u32, self.frame)
            .expect("canvas buffer matches its dimensions")
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let idx = (y * self.width + x) * 4;
        Color::new(self.frame[idx], self.frame[idx + 1], self.frame[idx + 2])
    }
}

fn set_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Color, alpha: f32) {
    if x < 0 || y < 0 || x as usize >= canvas.width || y as usize >= canvas.height {
        return;
    }
    let idx = (y as usize * canvas.width + x as usize) * 4;
    let src = [color.r as f32, color.g as f32, color.b as f32];
    let dst = [
        canvas.frame[idx] as f32,
        canvas.frame[idx + 1] as f32,
        canvas.frame[idx + 2] as f32,
    ];
    let a = alpha.clamp(0.0, 1.0);
    let out = [
        (src[0] * a + dst[0] * (1.0 - a)).round() as u8,
        (src[1] * a + dst[1] * (1.0 - a)).round() as u8,
        (src[2] * a + dst[2] * (1.0 - a)).round() as u8,
        0xff,
    ];
    canvas.frame[idx..idx + 4].copy_from_slice(&out);
}

fn fill_rect(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, fill: Color) {
    for py in y..y + h {
        for px in x..x + w {
            set_pixel(canvas, px, py, fill, 1.0);
        }
    }
}

fn fill_triangle(canvas: &mut Canvas, points: [(i32, i32); 3], fill: Color) {
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);

    let edge = |a: (i32, i32), b: (i32, i32), px: f64, py: f64| -> f64 {
        (b.0 - a.0) as f64 * (py - a.1 as f64) - (b.1 - a.1) as f64 * (px - a.0 as f64)
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            let e0 = edge(points[0], points[1], px, py);
            let e1 = edge(points[1], points[2], px, py);
            let e2 = edge(points[2], points[0], px, py);
            let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0)
                || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
            if inside {
                set_pixel(canvas, x, y, fill, 1.0);
            }
        }
    }
}

fn draw_thick_line_aa(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: f32,
    color: Color,
) {
    let min_x = x0.min(x1) - thickness.ceil() as i32 - 1;
    let max_x = x0.max(x1) + thickness.ceil() as i32 + 1;
    let min_y = y0.min(y1) - thickness.ceil() as i32 - 1;
    let max_y = y0.max(y1) + thickness.ceil() as i32 + 1;
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let len_sq = (dx * dx + dy * dy).max(1.0);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 - x0 as f32;
            let py = y as f32 - y0 as f32;
            let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
            let lx = x0 as f32 + t * dx;
            let ly = y0 as f32 + t * dy;
            let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
            let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.01 {
                set_pixel(canvas, x, y, color, aa);
            }
        }
    }
}

fn draw_thick_line_tapered_aa(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: f32,
    color: Color,
) {
    let min_x = x0.min(x1) - thickness.ceil() as i32 - 1;
    let max_x = x0.max(x1) + thickness.ceil() as i32 + 1;
    let min_y = y0.min(y1) - thickness.ceil() as i32 - 1;
    let max_y = y0.max(y1) + thickness.ceil() as i32 + 1;
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let len_sq = (dx * dx + dy * dy).max(1.0);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 - x0 as f32;
            let py = y as f32 - y0 as f32;
            let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
            let lx = x0 as f32 + t * dx;
            let ly = y0 as f32 + t * dy;
            let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
            let local_thickness = thickness * (1.0 - t * 0.95); // 0.05 to avoid vanishing too soon
            let aa = (1.0 - (dist - local_thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.01 {
                set_pixel(canvas, x, y, color, aa);
            }
        }
    }
}

fn draw_dashed_line(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: f32,
    dash: (f32, f32),
    color: Color,
) {
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let length = (dx * dx + dy * dy).sqrt();
    if length < 1.0 {
        return;
    }
    let (on, off) = dash;
    let period = (on + off).max(1.0);
    let mut pos = 0.0f32;
    while pos < length {
        let seg_end = (pos + on).min(length);
        let (sx, sy) = (
            x0 as f32 + dx * (pos / length),
            y0 as f32 + dy * (pos / length),
        );
        let (ex, ey) = (
            x0 as f32 + dx * (seg_end / length),
            y0 as f32 + dy * (seg_end / length),
        );
        draw_thick_line_aa(
            canvas,
            sx.round() as i32,
            sy.round() as i32,
            ex.round() as i32,
            ey.round() as i32,
            thickness,
            color,
        );
        pos += period;
    }
}

fn draw_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: Color) {
    for y in -radius..=radius {
        for x in -radius..=radius {
            let dist = ((x * x + y * y) as f64).sqrt();
            let aa = if dist > radius as f64 {
                1.0 - (dist - radius as f64).min(1.0)
            } else {
                1.0
            };
            if dist <= radius as f64 + 1.0 && aa > 0.0 {
                set_pixel(canvas, cx + x, cy + y, color, aa as f32);
            }
        }
    }
}

/// Ring segment between `start_deg` and `end_deg` (dial degrees, 0 = right,
/// increasing counter-clockwise on screen, so 90 points straight up).
#[allow(clippy::too_many_arguments)]
fn draw_wedge(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    outer_radius: f64,
    inner_radius: f64,
    start_deg: f64,
    end_deg: f64,
    color: Color,
) {
    let (lo, hi) = if start_deg <= end_deg {
        (start_deg, end_deg)
    } else {
        (end_deg, start_deg)
    };
    let r = outer_radius.ceil() as i32 + 1;
    for y in -r..=r {
        for x in -r..=r {
            let dist = ((x * x + y * y) as f64).sqrt();
            if dist < inner_radius - 1.0 || dist > outer_radius + 1.0 {
                continue;
            }
            // Screen y grows downward; negate it to get dial angles.
            let angle = (-y as f64).atan2(x as f64).to_degrees();
            if angle < lo || angle > hi {
                continue;
            }
            let aa = if dist > outer_radius {
                1.0 - (dist - outer_radius).min(1.0)
            } else if dist < inner_radius {
                1.0 - (inner_radius - dist).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                set_pixel(canvas, cx + x, cy + y, color, aa as f32);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    font: &Font,
    scale: FontScale,
    color: Color,
    anchor: Anchor,
) {
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<PositionedGlyph> = font
        .layout(text, scale, point(0.0, 0.0 + v_metrics.ascent))
        .collect();
    // Bounding box for the whole string
    let (min_x, max_x, min_y, max_y) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
        (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
        |(min_x, max_x, min_y, max_y), bb| {
            (
                min_x.min(bb.min.x),
                max_x.max(bb.max.x),
                min_y.min(bb.min.y),
                max_y.max(bb.max.y),
            )
        },
    );
    let width_px = if min_x < max_x { max_x - min_x } else { 0 };
    let height_px = if min_y < max_y { max_y - min_y } else { 0 };
    let offset_x = match anchor {
        Anchor::Start => x,
        Anchor::Middle => x - width_px / 2,
        Anchor::End => x - width_px,
    };
    let offset_y = y - height_px / 2;
    for glyph in glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = offset_x + gx as i32 + bb.min.x - min_x;
                let py = offset_y + gy as i32 + bb.min.y - min_y;
                set_pixel(canvas, px, py, color, v);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_floods_the_buffer() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear(Color::new(10, 20, 30));
        assert_eq!(canvas.pixel(0, 0), Color::new(10, 20, 30));
        assert_eq!(canvas.pixel(3, 3), Color::new(10, 20, 30));
    }

    #[test]
    fn rect_fills_only_its_area() {
        let mut canvas = Canvas::new(10, 10);
        canvas.clear(Color::new(255, 255, 255));
        fill_rect(&mut canvas, 2, 2, 3, 3, Color::new(0, 0, 0));
        assert_eq!(canvas.pixel(3, 3), Color::new(0, 0, 0));
        assert_eq!(canvas.pixel(6, 6), Color::new(255, 255, 255));
    }

    #[test]
    fn wedge_covers_its_angular_band() {
        let mut canvas = Canvas::new(100, 100);
        canvas.clear(Color::new(255, 255, 255));
        // Quarter ring pointing up-right.
        draw_wedge(&mut canvas, 50, 50, 40.0, 20.0, 0.0, 90.0, Color::new(200, 0, 0));
        // 45 degrees up-right at radius 30 is inside the band.
        assert_eq!(canvas.pixel(71, 29), Color::new(200, 0, 0));
        // The mirrored point below the center is outside.
        assert_eq!(canvas.pixel(71, 71), Color::new(255, 255, 255));
        // Inside the inner radius stays clear.
        assert_eq!(canvas.pixel(52, 48), Color::new(255, 255, 255));
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut canvas = Canvas::new(4, 4);
        set_pixel(&mut canvas, -1, 0, Color::new(0, 0, 0), 1.0);
        set_pixel(&mut canvas, 0, 99, Color::new(0, 0, 0), 1.0);
        draw_circle(&mut canvas, -10, -10, 5, Color::new(0, 0, 0));
    }
}
