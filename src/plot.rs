//! Hourly and daily forecast charts.
//!
//! Each pane is a scatter-and-bar plot: the temperature series is resampled
//! by linear interpolation to a dense point cloud, every point colored
//! through the temperature scale, while precipitation renders as light-blue
//! bars against a secondary axis anchored to the pane bottom. The hourly
//! pane additionally carries vertical sunrise and sunset markers.

use chrono::{DateTime, Local};

use crate::color::{Color, ColorScale};
use crate::forecast::{DailySample, HourlySample};
use crate::scene::{Anchor, DrawCommand, Scene};
use crate::sun::SunTimes;

/// Dense point count for the hourly temperature cloud.
const HOURLY_POINTS: usize = 2000;
/// Dense point count per daily temperature series.
const DAILY_POINTS: usize = 1000;
/// Bars are suppressed entirely below this precipitation level.
const DRIZZLE_FLOOR: f64 = 0.1;
/// Minimum visible bar-axis ceiling, hourly (mm).
const HOURLY_MIN_CEILING: f64 = 0.5;
/// Minimum visible bar-axis ceiling, daily (mm).
const DAILY_MIN_CEILING: f64 = 5.0;

const BAR_COLOR: Color = Color::new(221, 221, 255);
const AXIS_COLOR: Color = Color::new(100, 100, 100);
const SUNRISE_COLOR: Color = Color::new(255, 195, 0);
const SUNSET_COLOR: Color = Color::new(255, 136, 0);

/// Pixel region one pane occupies.
#[derive(Debug, Clone, Copy)]
pub struct ChartArea {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ChartArea {
    /// Map a data point into the pane. `tx` in [0,1] across the x span,
    /// `v` between `y_min` and `y_max` (larger values higher on screen).
    fn to_px(&self, tx: f64, v: f64, y_min: f64, y_max: f64) -> (i32, i32) {
        let ty = if y_max > y_min {
            (v - y_min) / (y_max - y_min)
        } else {
            0.5
        };
        (
            self.x + (tx * self.w as f64).round() as i32,
            self.y + self.h - (ty * self.h as f64).round() as i32,
        )
    }
}

/// `numpy.interp` equivalent: resample `(x, y)` samples onto `points`
/// evenly spaced x positions across the sample span.
pub fn linear_resample(xs: &[f64], ys: &[f64], points: usize) -> Vec<(f64, f64)> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 || points < 2 {
        return xs.iter().copied().zip(ys.iter().copied()).collect();
    }
    let x0 = xs[0];
    let x1 = xs[xs.len() - 1];
    (0..points)
        .map(|i| {
            let x = x0 + (x1 - x0) * i as f64 / (points - 1) as f64;
            // xs is sorted; find the bracketing sample pair.
            let idx = match xs.binary_search_by(|probe| probe.total_cmp(&x)) {
                Ok(exact) => return (x, ys[exact]),
                Err(after) => after.clamp(1, xs.len() - 1),
            };
            let (xa, xb) = (xs[idx - 1], xs[idx]);
            let (ya, yb) = (ys[idx - 1], ys[idx]);
            let t = if xb > xa { (x - xa) / (xb - xa) } else { 0.0 };
            (x, ya + (yb - ya) * t)
        })
        .collect()
}

/// Bar-axis ceiling for a precipitation series; `None` means no bars at all.
fn bar_ceiling(precip: &[f64], min_ceiling: f64) -> Option<f64> {
    let max = precip.iter().copied().fold(0.0f64, f64::max);
    if max < DRIZZLE_FLOOR {
        None
    } else {
        Some(max.max(min_ceiling))
    }
}

/// Compose the next-24-hours pane.
pub fn hourly_chart(
    scene: &mut Scene,
    area: ChartArea,
    samples: &[HourlySample],
    temperature_scale: &ColorScale,
    sun: &SunTimes,
) {
    if samples.len() < 2 {
        return;
    }
    let xs: Vec<f64> = samples.iter().map(|s| s.date.timestamp() as f64).collect();
    let temps: Vec<f64> = samples.iter().map(|s| s.temperature).collect();
    let precip: Vec<f64> = samples.iter().map(|s| s.precipitation).collect();
    let span = Span::of(&xs);
    let (y_min, y_max) = padded_range(&temps);

    // Sun markers go in first so the temperature cloud stays on top.
    for (event, color) in [(sun.sunrise, SUNRISE_COLOR), (sun.sunset, SUNSET_COLOR)] {
        if let Some(tx) = span.fraction(event) {
            let (px, _) = area.to_px(tx, y_min, y_min, y_max);
            scene.push(DrawCommand::Line {
                x0: px,
                y0: area.y,
                x1: px,
                y1: area.y + area.h,
                thickness: 2.0,
                color,
            });
        }
    }

    precip_bars(scene, area, &xs, &precip, HOURLY_MIN_CEILING, 6);
    temperature_cloud(
        scene,
        area,
        &xs,
        &temps,
        HOURLY_POINTS,
        1,
        temperature_scale,
        y_min,
        y_max,
    );

    // Hour-of-day labels every six hours.
    for sample in samples.iter().step_by(6) {
        if let Some(tx) = span.fraction(sample.date) {
            let (px, _) = area.to_px(tx, y_min, y_min, y_max);
            scene.push(DrawCommand::Text {
                x: px,
                y: area.y + area.h + 10,
                text: sample.date.format("%H").to_string(),
                size: 14.0,
                color: AXIS_COLOR,
                anchor: Anchor::Middle,
            });
        }
    }
}

/// Compose the five-day pane: min and max series, marker dots at the raw
/// samples, daily precipitation bars.
pub fn daily_chart(
    scene: &mut Scene,
    area: ChartArea,
    samples: &[DailySample],
    temperature_scale: &ColorScale,
) {
    if samples.len() < 2 {
        return;
    }
    let xs: Vec<f64> = samples.iter().map(|s| s.date.timestamp() as f64).collect();
    let mins: Vec<f64> = samples.iter().map(|s| s.temp_min).collect();
    let maxs: Vec<f64> = samples.iter().map(|s| s.temp_max).collect();
    let precip: Vec<f64> = samples.iter().map(|s| s.precipitation_sum).collect();
    let span = Span::of(&xs);

    let mut all = mins.clone();
    all.extend_from_slice(&maxs);
    let (y_min, y_max) = padded_range(&all);

    precip_bars(scene, area, &xs, &precip, DAILY_MIN_CEILING, 40);
    for series in [&mins, &maxs] {
        temperature_cloud(
            scene,
            area,
            &xs,
            series,
            DAILY_POINTS,
            2,
            temperature_scale,
            y_min,
            y_max,
        );
        // Marker dots at the raw samples.
        for (x, v) in xs.iter().zip(series.iter()) {
            let tx = (x - xs[0]) / (xs[xs.len() - 1] - xs[0]);
            let (px, py) = area.to_px(tx, *v, y_min, y_max);
            scene.push(DrawCommand::Circle {
                cx: px,
                cy: py,
                radius: 4,
                color: temperature_scale.color_at(*v),
            });
        }
    }

    for sample in samples {
        if let Some(tx) = span.fraction(sample.date) {
            let (px, _) = area.to_px(tx, y_min, y_min, y_max);
            scene.push(DrawCommand::Text {
                x: px,
                y: area.y + area.h + 10,
                text: sample.date.format("%a %-d").to_string(),
                size: 14.0,
                color: AXIS_COLOR,
                anchor: Anchor::Middle,
            });
        }
    }
}

/// Resampled temperature point cloud, one small square per point.
#[allow(clippy::too_many_arguments)]
fn temperature_cloud(
    scene: &mut Scene,
    area: ChartArea,
    xs: &[f64],
    values: &[f64],
    points: usize,
    dot_size: i32,
    scale: &ColorScale,
    y_min: f64,
    y_max: f64,
) {
    let x0 = xs[0];
    let x1 = xs[xs.len() - 1];
    for (x, v) in linear_resample(xs, values, points) {
        let tx = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
        let (px, py) = area.to_px(tx, v, y_min, y_max);
        scene.push(DrawCommand::Rect {
            x: px,
            y: py,
            w: dot_size,
            h: dot_size,
            fill: scale.color_at(v),
        });
    }
}

fn precip_bars(
    scene: &mut Scene,
    area: ChartArea,
    xs: &[f64],
    precip: &[f64],
    min_ceiling: f64,
    bar_width: i32,
) {
    let Some(ceiling) = bar_ceiling(precip, min_ceiling) else {
        return;
    };
    let x0 = xs[0];
    let x1 = xs[xs.len() - 1];
    for (x, p) in xs.iter().zip(precip.iter()) {
        if *p <= 0.0 {
            continue;
        }
        let tx = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
        let height = ((p / ceiling) * area.h as f64).round() as i32;
        let px = area.x + (tx * area.w as f64).round() as i32;
        scene.push(DrawCommand::Rect {
            x: px - bar_width / 2,
            y: area.y + area.h - height,
            w: bar_width,
            h: height,
            fill: BAR_COLOR,
        });
    }
}

/// One-degree padding so the extremes don't sit on the pane border.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min - 1.0, max + 1.0)
}

/// Helper mapping timestamps onto [0,1] across a pane.
struct Span {
    start: f64,
    end: f64,
}

impl Span {
    fn of(xs: &[f64]) -> Self {
        Self {
            start: xs[0],
            end: xs[xs.len() - 1],
        }
    }

    /// Fraction across the span, or `None` when the moment falls outside it.
    fn fraction(&self, at: DateTime<Local>) -> Option<f64> {
        let x = at.timestamp() as f64;
        if x < self.start || x > self.end || self.end <= self.start {
            return None;
        }
        Some((x - self.start) / (self.end - self.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn resample_hits_endpoints_and_midpoints() {
        let xs = [0.0, 10.0];
        let ys = [0.0, 100.0];
        let out = linear_resample(&xs, &ys, 5);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], (0.0, 0.0));
        assert_eq!(out[2], (5.0, 50.0));
        assert_eq!(out[4], (10.0, 100.0));
    }

    #[test]
    fn resample_interpolates_piecewise() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 10.0, 0.0];
        let out = linear_resample(&xs, &ys, 7);
        // x = 2.0 sits halfway down the falling segment.
        let (x, y) = out[4];
        assert!((x - 2.0).abs() < 1e-9);
        assert!((y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        let out = linear_resample(&[1.0], &[7.0], 100);
        assert_eq!(out, vec![(1.0, 7.0)]);
    }

    #[test]
    fn drizzle_draws_no_bars() {
        assert_eq!(bar_ceiling(&[0.0, 0.05, 0.09], 0.5), None);
        assert_eq!(bar_ceiling(&[0.0, 0.3], 0.5), Some(0.5));
        assert_eq!(bar_ceiling(&[2.0, 0.3], 0.5), Some(2.0));
    }

    fn hourly_fixture() -> (Vec<HourlySample>, SunTimes) {
        let start = Local.with_ymd_and_hms(2026, 8, 31, 9, 0, 0).unwrap();
        let samples: Vec<HourlySample> = (0..25)
            .map(|i| HourlySample {
                date: start + TimeDelta::hours(i),
                temperature: 10.0 + i as f64 * 0.2,
                precipitation: if i == 3 { 1.2 } else { 0.0 },
            })
            .collect();
        let sun = SunTimes {
            sunrise: start + TimeDelta::hours(21),
            sunset: start + TimeDelta::hours(11),
        };
        (samples, sun)
    }

    #[test]
    fn hourly_pane_emits_cloud_bars_and_sun_markers() {
        let (samples, sun) = hourly_fixture();
        let mut scene = Scene::new();
        let area = ChartArea {
            x: 0,
            y: 125,
            w: 400,
            h: 250,
        };
        hourly_chart(&mut scene, area, &samples, &crate::scales::temperature(), &sun);

        let rects = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        // 2000 cloud points plus one rain bar.
        assert_eq!(rects, HOURLY_POINTS + 1);

        let sun_lines = scene
            .commands()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::Line { color, .. }
                    if *color == SUNRISE_COLOR || *color == SUNSET_COLOR
                )
            })
            .count();
        assert_eq!(sun_lines, 2);
    }

    #[test]
    fn sun_marker_outside_the_window_is_dropped() {
        let (samples, _) = hourly_fixture();
        let sun = SunTimes {
            sunrise: samples[0].date - TimeDelta::hours(2),
            sunset: samples[24].date + TimeDelta::hours(2),
        };
        let mut scene = Scene::new();
        let area = ChartArea {
            x: 0,
            y: 125,
            w: 400,
            h: 250,
        };
        hourly_chart(&mut scene, area, &samples, &crate::scales::temperature(), &sun);
        let sun_lines = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(sun_lines, 0);
    }

    #[test]
    fn daily_pane_draws_both_series_with_markers() {
        let start = Local.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        let samples: Vec<DailySample> = (0..5)
            .map(|i| DailySample {
                date: start + TimeDelta::days(i),
                temp_min: 5.0 + i as f64,
                temp_max: 15.0 + i as f64,
                precipitation_sum: 0.0,
            })
            .collect();
        let mut scene = Scene::new();
        let area = ChartArea {
            x: 400,
            y: 125,
            w: 400,
            h: 250,
        };
        daily_chart(&mut scene, area, &samples, &crate::scales::temperature());

        let dots = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(dots, 10, "one marker per raw sample per series");

        let rects = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 2 * DAILY_POINTS, "two dense series, no rain bars");
    }
}
