//! Canonical scale tables for each metric.
//!
//! These are part of the visual-parity contract with the deployed panel:
//! changing a stop changes the rendered colors. Each function builds a fresh
//! validated [`ColorScale`] so a render invocation owns its configuration
//! outright instead of reaching for process-wide statics.

use crate::color::{Color, ColorScale, ColorStop};

/// Which scale a panel element binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
    Co2,
}

/// Build the canonical scale for a metric.
pub fn scale_for(metric: Metric) -> ColorScale {
    match metric {
        Metric::Temperature => temperature(),
        Metric::Humidity => humidity(),
        Metric::Pressure => pressure(),
        Metric::Co2 => co2(),
    }
}

fn build(stops: &[(f64, (u8, u8, u8))]) -> ColorScale {
    let stops = stops
        .iter()
        .map(|&(value, (r, g, b))| ColorStop::new(value, Color::new(r, g, b)))
        .collect();
    // The tables below are compile-time constants; a failure here is a typo
    // in this file, not a runtime condition.
    ColorScale::new(stops).expect("canonical scale table is malformed")
}

/// Outdoor/indoor temperature, -4..36 °C.
pub fn temperature() -> ColorScale {
    build(&[
        (-4.0, (29, 70, 154)),
        (-2.0, (20, 98, 169)),
        (0.0, (22, 116, 182)),
        (2.0, (54, 138, 199)),
        (4.0, (63, 163, 218)),
        (6.0, (78, 192, 238)),
        (8.0, (174, 220, 216)),
        (10.0, (168, 214, 173)),
        (12.0, (158, 208, 127)),
        (14.0, (174, 211, 82)),
        (16.0, (208, 217, 62)),
        (18.0, (252, 222, 4)),
        (20.0, (251, 203, 12)),
        (22.0, (252, 183, 22)),
        (24.0, (250, 163, 26)),
        (26.0, (246, 138, 31)),
        (28.0, (242, 106, 47)),
        (30.0, (236, 81, 57)),
        (32.0, (237, 42, 42)),
        (34.0, (195, 32, 39)),
        (36.0, (155, 27, 29)),
    ])
}

/// Relative humidity, 0..100 %.
pub fn humidity() -> ColorScale {
    build(&[
        (0.0, (228, 78, 93)),
        (10.0, (197, 106, 125)),
        (20.0, (160, 138, 166)),
        (30.0, (130, 173, 209)),
        (40.0, (97, 183, 218)),
        (50.0, (104, 206, 247)),
        (60.0, (102, 203, 242)),
        (70.0, (96, 178, 234)),
        (80.0, (89, 154, 233)),
        (90.0, (86, 131, 232)),
        (100.0, (79, 105, 216)),
    ])
}

/// Barometric pressure, 950..1040 mb.
pub fn pressure() -> ColorScale {
    build(&[
        (950.0, (6, 4, 192)),
        (962.9, (12, 68, 254)),
        (975.7, (6, 192, 255)),
        (988.6, (63, 255, 192)),
        (1001.4, (189, 249, 58)),
        (1014.3, (252, 191, 2)),
        (1027.1, (255, 64, 0)),
        (1040.0, (189, 0, 0)),
    ])
}

/// Indoor CO2 concentration, 400..1200 ppm.
pub fn co2() -> ColorScale {
    build(&[
        (400.0, (29, 70, 154)),
        (440.0, (20, 98, 169)),
        (480.0, (22, 116, 182)),
        (520.0, (54, 138, 199)),
        (560.0, (63, 163, 218)),
        (600.0, (78, 192, 238)),
        (640.0, (174, 220, 216)),
        (680.0, (168, 214, 173)),
        (720.0, (158, 208, 127)),
        (760.0, (174, 211, 82)),
        (800.0, (208, 217, 62)),
        (840.0, (252, 222, 4)),
        (880.0, (251, 203, 12)),
        (920.0, (252, 183, 22)),
        (960.0, (250, 163, 26)),
        (1000.0, (246, 138, 31)),
        (1040.0, (242, 106, 47)),
        (1080.0, (236, 81, 57)),
        (1120.0, (237, 42, 42)),
        (1160.0, (195, 32, 39)),
        (1200.0, (155, 27, 29)),
    ])
}
