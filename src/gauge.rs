//! Semicircular gauge geometry.
//!
//! A [`Gauge`] maps a color scale's value range onto the top half of a dial:
//! the range is resampled into fine angular wedges for a smooth ring, and each
//! indicator value becomes a needle at its clamped angle. Minimum points left
//! (180°), maximum points right (0°), so the dial reads left to right.
//!
//! Everything here is a pure function of (scale, resolution, needle values);
//! the output is a set of [`DrawCommand`]s for the scene layer.

use bon::Builder;

use crate::color::{Color, ColorScale};
use crate::scene::{Anchor, DrawCommand, Scene};

/// One resampled slice of the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeZone {
    pub start_value: f64,
    pub end_value: f64,
    pub color: Color,
}

/// An indicator value with its display color.
#[derive(Debug, Clone, Copy)]
pub struct NeedleValue {
    pub value: f64,
    pub color: Color,
}

impl NeedleValue {
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// Visual parameters of one gauge.
#[derive(Debug, Clone, Builder)]
pub struct GaugeStyle {
    /// Number of boundary samples across the range; yields `resolution - 1`
    /// wedges.
    #[builder(default = 100)]
    pub resolution: usize,
    #[builder(default = 60.0)]
    pub outer_radius: f64,
    /// Ring thickness; inner radius = outer radius - thickness.
    #[builder(default = 14.0)]
    pub thickness: f64,
    #[builder(default = 0.9)]
    pub needle_length_factor: f64,
    #[builder(default = 3.0)]
    pub needle_width: f32,
    #[builder(default = 4)]
    pub pivot_radius: i32,
    #[builder(default = 18)]
    pub label_offset: i32,
    #[builder(default = 16.0)]
    pub label_size: f32,
    #[builder(default = "".to_string())]
    pub unit: String,
    #[builder(default = Color::new(50, 50, 50))]
    pub label_color: Color,
}

/// A color scale stretched over a semicircular dial.
#[derive(Debug, Clone)]
pub struct Gauge {
    scale: ColorScale,
    style: GaugeStyle,
}

impl Gauge {
    pub fn new(scale: ColorScale, style: GaugeStyle) -> Self {
        Self { scale, style }
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Dial angle in degrees for a value; out-of-range readings clamp to the
    /// nearest bound so the needle never leaves the dial.
    pub fn needle_angle(&self, value: f64) -> f64 {
        let min = self.scale.min_value();
        let max = self.scale.max_value();
        let v = value.clamp(min, max);
        180.0 * (1.0 - (v - min) / (max - min))
    }

    /// Resample the scale into equal value-width zones.
    ///
    /// `resolution` boundary samples produce `resolution - 1` contiguous
    /// zones covering the whole range; each zone takes the interpolated color
    /// at its start boundary.
    pub fn zones(&self) -> Vec<GaugeZone> {
        let min = self.scale.min_value();
        let max = self.scale.max_value();
        let bands = self.style.resolution.max(2) - 1;
        let step = (max - min) / bands as f64;
        (0..bands)
            .map(|i| {
                let start = min + step * i as f64;
                // The last boundary is pinned to max so rounding never leaves
                // a sliver uncovered.
                let end = if i + 1 == bands { max } else { min + step * (i + 1) as f64 };
                GaugeZone {
                    start_value: start,
                    end_value: end,
                    color: self.scale.color_at(start),
                }
            })
            .collect()
    }

    /// Emit the ring, needles and combined label centered at `(cx, cy)`.
    ///
    /// Needle label text keeps the raw (unclamped) values, joined by `/`,
    /// with the configured unit suffix.
    pub fn draw(&self, scene: &mut Scene, cx: i32, cy: i32, needles: &[NeedleValue]) {
        let outer = self.style.outer_radius;
        let inner = outer - self.style.thickness;

        for zone in self.zones() {
            // Increasing value maps to decreasing angle, hence the reversal.
            scene.push(DrawCommand::Wedge {
                cx,
                cy,
                outer_radius: outer,
                inner_radius: inner,
                start_deg: self.needle_angle(zone.end_value),
                end_deg: self.needle_angle(zone.start_value),
                color: zone.color,
            });
        }

        let needle_len = inner * self.style.needle_length_factor;
        for needle in needles {
            let angle = self.needle_angle(needle.value).to_radians();
            let tip_x = cx as f64 + angle.cos() * needle_len;
            let tip_y = cy as f64 - angle.sin() * needle_len;
            scene.push(DrawCommand::TaperedLine {
                x0: cx,
                y0: cy,
                x1: tip_x.round() as i32,
                y1: tip_y.round() as i32,
                thickness: self.style.needle_width,
                color: needle.color,
            });
            scene.push(DrawCommand::Circle {
                cx,
                cy,
                radius: self.style.pivot_radius,
                color: needle.color,
            });
        }

        if !needles.is_empty() {
            let label = needles
                .iter()
                .map(|n| format!("{}", n.value))
                .collect::<Vec<_>>()
                .join("/");
            scene.push(DrawCommand::Text {
                x: cx,
                y: cy + self.style.label_offset,
                text: format!("{}{}", label, self.style.unit),
                size: self.style.label_size,
                color: self.style.label_color,
                anchor: Anchor::Middle,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales;

    fn pressure_gauge() -> Gauge {
        Gauge::new(scales::pressure(), GaugeStyle::builder().build())
    }

    #[test]
    fn endpoints_and_midpoint_angles() {
        let gauge = pressure_gauge();
        assert_eq!(gauge.needle_angle(950.0), 180.0);
        assert_eq!(gauge.needle_angle(1040.0), 0.0);
        assert!((gauge.needle_angle(995.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn reference_pressure_angle() {
        let gauge = pressure_gauge();
        let expected = 180.0 * (1.0 - (1014.3 - 950.0) / 90.0);
        let angle = gauge.needle_angle(1014.3);
        assert!((angle - expected).abs() < 1e-9);
        assert!((angle - 51.4).abs() < 0.1);
    }

    #[test]
    fn out_of_range_values_clamp_to_the_bounds() {
        let gauge = pressure_gauge();
        assert_eq!(gauge.needle_angle(700.0), gauge.needle_angle(950.0));
        assert_eq!(gauge.needle_angle(2000.0), gauge.needle_angle(1040.0));
        for v in [-1e6, 949.999, 1040.001, 1e6] {
            let a = gauge.needle_angle(v);
            assert!((0.0..=180.0).contains(&a));
        }
    }

    #[test]
    fn zones_partition_the_range() {
        let gauge = pressure_gauge();
        let zones = gauge.zones();
        assert_eq!(zones.len(), 99);
        assert_eq!(zones[0].start_value, 950.0);
        assert_eq!(zones[zones.len() - 1].end_value, 1040.0);
        for pair in zones.windows(2) {
            assert_eq!(pair[0].end_value, pair[1].start_value, "no gaps, no overlap");
        }
    }

    #[test]
    fn zone_colors_come_from_the_start_boundary() {
        let gauge = pressure_gauge();
        for zone in gauge.zones() {
            assert_eq!(zone.color, gauge.scale().color_at(zone.start_value));
        }
    }

    #[test]
    fn two_needles_share_one_gauge() {
        let style = GaugeStyle::builder().unit("ppm".to_string()).build();
        let gauge = Gauge::new(scales::co2(), style);
        let indoor = NeedleValue::new(480.0, Color::new(0, 0, 0));
        let other = NeedleValue::new(600.0, Color::new(0, 127, 255));
        assert_ne!(gauge.needle_angle(480.0), gauge.needle_angle(600.0));

        let mut scene = Scene::new();
        gauge.draw(&mut scene, 100, 100, &[indoor, other]);
        let label = scene
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .expect("gauge label present");
        assert_eq!(label, "480/600ppm");

        let needle_lines = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::TaperedLine { .. }))
            .count();
        assert_eq!(needle_lines, 2);
    }

    #[test]
    fn wedge_angles_stay_on_the_semicircle() {
        let gauge = pressure_gauge();
        let mut scene = Scene::new();
        gauge.draw(&mut scene, 0, 0, &[]);
        for command in scene.commands() {
            if let DrawCommand::Wedge {
                start_deg, end_deg, ..
            } = command
            {
                assert!(*start_deg < *end_deg);
                assert!((0.0..=180.0).contains(start_deg));
                assert!((0.0..=180.0).contains(end_deg));
            }
        }
    }
}
