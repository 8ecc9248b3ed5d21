//! Weather-station e-paper dashboard renderer.
//!
//! Reads a station snapshot (JSON), a forecast cache (SQLite) and sunrise
//! times, composes a fixed 800×480 panel as a retained list of draw commands,
//! then rasterizes it to a PNG suitable for an e-paper display.
//!
//! The crate splits into data inputs ([`station`], [`forecast`], [`sun`],
//! [`settings`]), value-to-color mapping ([`color`], [`scales`]), geometry
//! ([`gauge`], [`plot`]), and rendering ([`scene`], [`layout`]).

pub mod color;
pub mod error;
pub mod forecast;
pub mod gauge;
pub mod layout;
pub mod plot;
pub mod scales;
pub mod scene;
pub mod settings;
pub mod station;
pub mod sun;

pub use color::{Color, ColorScale, ColorStop, ScaleError};
pub use error::PanelError;
pub use gauge::{Gauge, GaugeStyle, GaugeZone, NeedleValue};
pub use layout::{compose, default_layout, PanelData, PanelStyle};
pub use scene::{Canvas, DrawCommand, Scene};
pub use settings::Settings;
pub use station::StationSnapshot;

use std::path::Path;

use chrono::{DateTime, Local};
use rusttype::Font;

/// Run the whole pipeline: load inputs, compose the panel, write the PNG.
///
/// `output_override` takes precedence over the configured output path.
pub fn run(
    config: &Path,
    output_override: Option<&Path>,
    now: DateTime<Local>,
) -> Result<(), PanelError> {
    let settings = Settings::from_file(config)?;
    let output = output_override.unwrap_or(&settings.display.output);

    let snapshot = StationSnapshot::from_file(&settings.inputs.station)?;
    let window = forecast::load(&settings.inputs.forecast_db, now)?;
    log::info!(
        "forecast window: {} hourly samples, {} daily samples",
        window.hourly.len(),
        window.daily.len()
    );
    let sun_times = sun::next_sun_events(
        settings.location.latitude,
        settings.location.longitude,
        now,
    )?;
    log::info!(
        "next sunrise {}, next sunset {}",
        sun_times.sunrise.format("%H:%M"),
        sun_times.sunset.format("%H:%M")
    );

    let data = PanelData {
        main: snapshot.main_module(),
        outdoor: snapshot.module(&settings.modules.outdoor)?,
        indoor: snapshot.module(&settings.modules.indoor)?,
        rain: snapshot.module(&settings.modules.rain)?,
        forecast: &window,
        sun: sun_times,
    };

    let style = PanelStyle::default();
    let scene = compose(&data, &default_layout(&settings), &style)?;

    let font_bytes = std::fs::read(&settings.display.font)?;
    let font = Font::try_from_vec(font_bytes)
        .ok_or_else(|| PanelError::Font(settings.display.font.clone()))?;

    let mut canvas = Canvas::new(style.width, style.height);
    scene.render(&mut canvas, &font);
    canvas.into_image().save(output)?;
    log::info!("wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_surfaces_as_a_settings_error() {
        let result = run(
            Path::new("/nonexistent/weather-panel/config.toml"),
            None,
            Local::now(),
        );
        assert!(matches!(result, Err(PanelError::Settings(_))));
    }
}
