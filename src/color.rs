//! Piecewise-linear color scales.
//!
//! A [`ColorScale`] is an ordered list of `(value, color)` stops. Looking up a
//! value clamps below the first stop and above the last, and linearly
//! interpolates each channel between the bracketing pair everywhere else.
//! Every colored element on the panel (temperature block, readouts, gauge
//! wedges, forecast points) goes through [`ColorScale::color_at`].

/// Color representation for panel elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// `#rrggbb`, each channel zero-padded to two hex digits.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)` with decimal channel values.
    pub fn rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One `(value, color)` anchor point of a scale.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub value: f64,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// Malformed scale definitions are rejected when the scale is built,
/// never per lookup.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    #[error("color scale needs at least 2 stops, got {0}")]
    TooFewStops(usize),
    #[error("color scale stops must be strictly ascending (stop {index} has value {value}, previous was {previous})")]
    NotAscending {
        index: usize,
        value: f64,
        previous: f64,
    },
    #[error("color scale stop {index} has a non-finite value")]
    NonFinite { index: usize },
}

/// An ordered sequence of color stops, strictly ascending in value.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// Build a scale, validating the stop list once up front.
    ///
    /// Duplicate values count as non-ascending; a degenerate scale would make
    /// the bracketing lookup ambiguous.
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, ScaleError> {
        if stops.len() < 2 {
            return Err(ScaleError::TooFewStops(stops.len()));
        }
        for (index, stop) in stops.iter().enumerate() {
            if !stop.value.is_finite() {
                return Err(ScaleError::NonFinite { index });
            }
            if index > 0 && stop.value <= stops[index - 1].value {
                return Err(ScaleError::NotAscending {
                    index,
                    value: stop.value,
                    previous: stops[index - 1].value,
                });
            }
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Smallest stop value.
    pub fn min_value(&self) -> f64 {
        self.stops[0].value
    }

    /// Largest stop value.
    pub fn max_value(&self) -> f64 {
        self.stops[self.stops.len() - 1].value
    }

    /// Interpolated color for `value`, clamped to the scale's range.
    pub fn color_at(&self, value: f64) -> Color {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if value <= first.value {
            return first.color;
        }
        if value >= last.value {
            return last.color;
        }

        // Interior: find the bracketing pair. An exact stop hit collapses the
        // bracket to that stop so the stop's color is returned untouched.
        let mut prev = first;
        let mut next = last;
        for pair in self.stops.windows(2) {
            if pair[0].value == value {
                prev = pair[0];
                next = pair[0];
                break;
            }
            if pair[1].value == value {
                prev = pair[1];
                next = pair[1];
                break;
            }
            if pair[0].value < value && value < pair[1].value {
                prev = pair[0];
                next = pair[1];
                break;
            }
        }

        if prev.color == next.color {
            return prev.color;
        }

        let t = (value - prev.value) / (next.value - prev.value);
        Color::new(
            lerp_channel(prev.color.r, next.color.r, t),
            lerp_channel(prev.color.g, next.color.g, t),
            lerp_channel(prev.color.b, next.color.b, t),
        )
    }
}

/// Round-half-up per channel; output always lands in 0-255 because `t`
/// is within [0, 1] here.
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}
