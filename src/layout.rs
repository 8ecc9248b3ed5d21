//! Panel composition.
//!
//! The panel is a fixed 800×480 arrangement. Each visual element is a
//! declarative [`Element`] record (kind + pixel origin); [`compose`] walks the
//! element list and turns each record into scene commands using the render
//! data. Positions live in [`default_layout`], not scattered through drawing
//! code, so moving an element is a data change.

use crate::color::Color;
use crate::forecast::ForecastWindow;
use crate::gauge::{Gauge, GaugeStyle, NeedleValue};
use crate::plot::{self, ChartArea};
use crate::scales;
use crate::scene::{Anchor, DrawCommand, Scene};
use crate::settings::Settings;
use crate::station::{ModuleReadings, StationError, Trend};
use crate::sun::SunTimes;

/// Which station module an element binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleSlot {
    Main,
    Outdoor,
    Indoor,
    Rain,
}

/// What an element renders.
#[derive(Debug, Clone)]
pub enum ElementKind {
    OutdoorTemperature,
    Pressure,
    OutdoorHumidity,
    RainBar,
    ForecastCharts,
    IndoorRow { slot: ModuleSlot, icon: String },
    SunReadout,
    Battery { slot: ModuleSlot, label: char },
    Co2Gauge,
}

/// One positioned element record.
#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub origin: (i32, i32),
}

impl Element {
    fn new(kind: ElementKind, origin: (i32, i32)) -> Self {
        Self { kind, origin }
    }
}

/// The deployed panel arrangement.
pub fn default_layout(settings: &Settings) -> Vec<Element> {
    vec![
        Element::new(ElementKind::OutdoorTemperature, (10, 20)),
        Element::new(ElementKind::Pressure, (408, 60)),
        Element::new(ElementKind::OutdoorHumidity, (408, 110)),
        Element::new(ElementKind::RainBar, (550, 30)),
        Element::new(ElementKind::ForecastCharts, (0, 125)),
        Element::new(
            ElementKind::IndoorRow {
                slot: ModuleSlot::Indoor,
                icon: settings.display.indoor_module_icon.clone(),
            },
            (10, 433),
        ),
        Element::new(
            ElementKind::IndoorRow {
                slot: ModuleSlot::Main,
                icon: settings.display.main_module_icon.clone(),
            },
            (10, 468),
        ),
        Element::new(ElementKind::SunReadout, (500, 405)),
        Element::new(
            ElementKind::Battery {
                slot: ModuleSlot::Outdoor,
                label: 'O',
            },
            (772, 436),
        ),
        Element::new(
            ElementKind::Battery {
                slot: ModuleSlot::Rain,
                label: 'R',
            },
            (772, 453),
        ),
        Element::new(
            ElementKind::Battery {
                slot: ModuleSlot::Indoor,
                label: 'L',
            },
            (772, 470),
        ),
        // Pivot height leaves room below the dial for the reading label.
        Element::new(ElementKind::Co2Gauge, (433, 460)),
    ]
}

/// Everything one render invocation reads.
#[derive(Debug, Clone, Copy)]
pub struct PanelData<'a> {
    pub main: ModuleReadings<'a>,
    pub outdoor: ModuleReadings<'a>,
    pub indoor: ModuleReadings<'a>,
    pub rain: ModuleReadings<'a>,
    pub forecast: &'a ForecastWindow,
    pub sun: SunTimes,
}

impl<'a> PanelData<'a> {
    fn module(&self, slot: ModuleSlot) -> ModuleReadings<'a> {
        match slot {
            ModuleSlot::Main => self.main,
            ModuleSlot::Outdoor => self.outdoor,
            ModuleSlot::Indoor => self.indoor,
            ModuleSlot::Rain => self.rain,
        }
    }
}

/// Trend arrow palette.
#[derive(Debug, Clone)]
pub struct TrendStyle {
    pub max_on: Color,
    pub max_off: Color,
    pub min_on: Color,
    pub min_off: Color,
    pub minmax_text: Color,
}

impl Default for TrendStyle {
    fn default() -> Self {
        Self {
            max_on: Color::new(255, 0, 0),
            max_off: Color::new(255, 150, 150),
            min_on: Color::new(0, 0, 255),
            min_off: Color::new(150, 150, 255),
            minmax_text: Color::new(100, 100, 100),
        }
    }
}

/// Rain-bar palette and extent.
#[derive(Debug, Clone)]
pub struct RainStyle {
    pub width: i32,
    pub height: i32,
    pub day_fill: Color,
    pub hour_fill: Color,
    pub frame_fill: Color,
    pub frame_stroke: Color,
    pub dry_text: Color,
}

impl Default for RainStyle {
    fn default() -> Self {
        Self {
            width: 230,
            height: 60,
            day_fill: Color::new(100, 100, 255),
            hour_fill: Color::new(150, 150, 255),
            frame_fill: Color::new(245, 245, 255),
            frame_stroke: Color::new(125, 125, 255),
            dry_text: Color::new(220, 220, 255),
        }
    }
}

/// Sun readout palette.
#[derive(Debug, Clone)]
pub struct SunStyle {
    pub sunrise: Color,
    pub sunset: Color,
}

impl Default for SunStyle {
    fn default() -> Self {
        Self {
            sunrise: Color::new(255, 195, 0),
            sunset: Color::new(255, 136, 0),
        }
    }
}

/// Full panel style; one instance per render.
#[derive(Debug, Clone)]
pub struct PanelStyle {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub trend: TrendStyle,
    pub rain: RainStyle,
    pub sun: SunStyle,
    pub co2_gauge: GaugeStyle,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            background: Color::new(255, 255, 255),
            trend: TrendStyle::default(),
            rain: RainStyle::default(),
            sun: SunStyle::default(),
            co2_gauge: GaugeStyle::builder()
                .outer_radius(52.0)
                .thickness(12.0)
                .unit("ppm".to_string())
                .label_offset(12)
                .label_size(15.0)
                .build(),
        }
    }
}

/// Compose the whole panel into a scene.
///
/// The scene is complete or the call fails; a missing upstream field aborts
/// composition rather than leaving a half-drawn panel.
pub fn compose(
    data: &PanelData,
    layout: &[Element],
    style: &PanelStyle,
) -> Result<Scene, StationError> {
    let mut scene = Scene::new();
    scene.push(DrawCommand::Clear(style.background));

    for element in layout {
        let (x, y) = element.origin;
        match &element.kind {
            ElementKind::OutdoorTemperature => {
                outdoor_temperature(&mut scene, x, y, data.outdoor, style)?
            }
            ElementKind::Pressure => pressure(&mut scene, x, y, data.main, style)?,
            ElementKind::OutdoorHumidity => outdoor_humidity(&mut scene, x, y, data.outdoor)?,
            ElementKind::RainBar => rain_bar(
                &mut scene,
                x,
                y,
                data.rain,
                data.forecast.today_precipitation_sum,
                style,
            )?,
            ElementKind::ForecastCharts => forecast_charts(&mut scene, x, y, data),
            ElementKind::IndoorRow { slot, icon } => {
                indoor_row(&mut scene, x, y, icon, data.module(*slot))?
            }
            ElementKind::SunReadout => sun_readout(&mut scene, x, y, &data.sun, style),
            ElementKind::Battery { slot, label } => {
                battery(&mut scene, x, y, *label, data.module(*slot))?
            }
            ElementKind::Co2Gauge => co2_gauge(&mut scene, x, y, data, style)?,
        }
    }

    Ok(scene)
}

/// `21.46` becomes `("21", "5")`; one decimal digit, matching the big
/// int-part / small decimal-digit readout split used across the panel.
fn split_number(value: f64) -> (String, String) {
    let text = format!("{:.1}", value);
    match text.split_once('.') {
        Some((int_part, decimal)) => (int_part.to_string(), decimal.to_string()),
        None => (text, "0".to_string()),
    }
}

/// Bare number without a trailing `.0` (station integers arrive as floats).
fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn text(x: i32, y: i32, text: String, size: f32, color: Color, anchor: Anchor) -> DrawCommand {
    DrawCommand::Text {
        x,
        y,
        text,
        size,
        color,
        anchor,
    }
}

fn trend_arrows(
    scene: &mut Scene,
    x: i32,
    up_y: i32,
    down_y: i32,
    trend: Trend,
    style: &TrendStyle,
) {
    let max_color = if trend == Trend::Up {
        style.max_on
    } else {
        style.max_off
    };
    scene.push(DrawCommand::Triangle {
        points: [(x, up_y), (x + 10, up_y - 15), (x + 20, up_y)],
        fill: max_color,
    });

    let min_color = if trend == Trend::Down {
        style.min_on
    } else {
        style.min_off
    };
    scene.push(DrawCommand::Triangle {
        points: [(x, down_y), (x + 10, down_y + 15), (x + 20, down_y)],
        fill: min_color,
    });
}

fn outdoor_temperature(
    scene: &mut Scene,
    x: i32,
    y: i32,
    outdoor: ModuleReadings,
    style: &PanelStyle,
) -> Result<(), StationError> {
    let temp = outdoor.temperature()?;
    let (int_part, decimal) = split_number(temp);
    let fill = scales::temperature().color_at(temp);
    let white = Color::new(255, 255, 255);

    scene.push(DrawCommand::Rect {
        x,
        y,
        w: 180,
        h: 95,
        fill,
    });
    scene.push(text(x + 130, y + 75, int_part, 92.0, white, Anchor::End));
    scene.push(text(x + 132, y + 82, ".".to_string(), 54.0, white, Anchor::Start));
    scene.push(text(x + 150, y + 85, decimal, 36.0, white, Anchor::Start));
    scene.push(text(x + 140, y + 22, "°C".to_string(), 26.0, white, Anchor::Start));

    // Max/min with trend arrows to the right of the block.
    trend_arrows(scene, x + 185, y + 70, y + 80, outdoor.temp_trend(), &style.trend);
    scene.push(text(
        x + 250,
        y + 66,
        plain_number(outdoor.max_temp()?),
        16.0,
        style.trend.minmax_text,
        Anchor::End,
    ));
    scene.push(text(
        x + 250,
        y + 89,
        plain_number(outdoor.min_temp()?),
        16.0,
        style.trend.minmax_text,
        Anchor::End,
    ));
    Ok(())
}

fn pressure(
    scene: &mut Scene,
    x: i32,
    y: i32,
    main: ModuleReadings,
    style: &PanelStyle,
) -> Result<(), StationError> {
    let value = main.pressure()?;
    let (int_part, decimal) = split_number(value);
    let color = scales::pressure().color_at(value);

    scene.push(text(x, y, int_part, 44.0, color, Anchor::End));
    scene.push(text(x - 2, y + 8, ".".to_string(), 28.0, color, Anchor::Start));
    scene.push(text(x + 13, y + 8, decimal, 20.0, color, Anchor::Start));
    scene.push(text(x + 25, y - 22, "mb".to_string(), 16.0, color, Anchor::End));

    trend_arrows(scene, x + 32, y - 18, y - 10, main.pressure_trend(), &style.trend);
    Ok(())
}

fn outdoor_humidity(
    scene: &mut Scene,
    x: i32,
    y: i32,
    outdoor: ModuleReadings,
) -> Result<(), StationError> {
    let value = outdoor.humidity()?;
    let color = scales::humidity().color_at(value);
    scene.push(text(x, y, plain_number(value), 44.0, color, Anchor::End));
    scene.push(text(x + 5, y + 1, "%".to_string(), 28.0, color, Anchor::Start));
    Ok(())
}

fn rain_bar(
    scene: &mut Scene,
    x: i32,
    y: i32,
    rain: ModuleReadings,
    forecast_sum: f64,
    style: &PanelStyle,
) -> Result<(), StationError> {
    let round1 = |v: f64| (v * 10.0).round() / 10.0;
    let hour = round1(rain.sum_rain_1()?);
    let day = round1(rain.sum_rain_24()?);
    let rs = &style.rain;
    let width = rs.width as f64;

    if day == 0.0 && hour == 0.0 {
        scene.push(text(
            x + 65,
            y + 35,
            "Dry".to_string(),
            52.0,
            rs.dry_text,
            Anchor::Middle,
        ));
        return Ok(());
    }

    // The bar spans whichever is larger, the measured 24 h total or today's
    // forecast; in the forecast case a dashed frame marks the full extent.
    let tenth_width = if forecast_sum <= day {
        width / (day * 10.0)
    } else {
        scene.push(DrawCommand::Rect {
            x,
            y,
            w: rs.width,
            h: rs.height,
            fill: rs.frame_fill,
        });
        scene.push(DrawCommand::DashedRect {
            x,
            y,
            w: rs.width,
            h: rs.height,
            color: rs.frame_stroke,
            thickness: 1.5,
            dash: (9.0, 5.0),
        });
        width / (forecast_sum * 10.0)
    };

    let day_width = ((day - hour) * 10.0 * tenth_width).round() as i32;
    let hour_width = (hour * 10.0 * tenth_width).round() as i32;

    scene.push(DrawCommand::Rect {
        x: x + day_width,
        y,
        w: hour_width,
        h: rs.height,
        fill: rs.hour_fill,
    });
    if day != hour {
        scene.push(DrawCommand::Rect {
            x,
            y,
            w: day_width,
            h: rs.height,
            fill: rs.day_fill,
        });
    }

    scene.push(text(
        x,
        y + 80,
        format!("{:.1}", day),
        16.0,
        Color::new(50, 50, 255),
        Anchor::Start,
    ));
    scene.push(text(
        x + rs.width / 2,
        y + 80,
        format!("{:.1}", hour),
        16.0,
        rs.hour_fill,
        Anchor::Middle,
    ));
    scene.push(text(
        x + rs.width,
        y + 80,
        format!("{:.1}", forecast_sum),
        16.0,
        rs.day_fill,
        Anchor::End,
    ));
    Ok(())
}

fn forecast_charts(scene: &mut Scene, x: i32, y: i32, data: &PanelData) {
    let temperature = scales::temperature();
    let hourly_area = ChartArea {
        x: x + 15,
        y: y + 15,
        w: 360,
        h: 220,
    };
    let daily_area = ChartArea {
        x: x + 425,
        y: y + 15,
        w: 360,
        h: 220,
    };
    plot::hourly_chart(
        scene,
        hourly_area,
        &data.forecast.hourly,
        &temperature,
        &data.sun,
    );
    plot::daily_chart(scene, daily_area, &data.forecast.daily, &temperature);
}

fn indoor_row(
    scene: &mut Scene,
    x: i32,
    y: i32,
    icon: &str,
    module: ModuleReadings,
) -> Result<(), StationError> {
    let temp = module.temperature()?;
    let humidity = module.humidity()?;
    let co2 = module.co2()?;

    scene.push(text(
        x,
        y - 8,
        icon.to_string(),
        22.0,
        Color::new(50, 50, 50),
        Anchor::Start,
    ));

    let (int_part, decimal) = split_number(temp);
    let temp_color = scales::temperature().color_at(temp);
    scene.push(text(x + 95, y, int_part, 22.0, temp_color, Anchor::End));
    scene.push(text(x + 93, y + 2, ".".to_string(), 22.0, temp_color, Anchor::Start));
    scene.push(text(x + 105, y, decimal, 22.0, temp_color, Anchor::Start));
    scene.push(text(x + 120, y, "°C".to_string(), 22.0, temp_color, Anchor::Start));

    scene.push(text(
        x + 229,
        y,
        format!("{}%", plain_number(humidity)),
        22.0,
        scales::humidity().color_at(humidity),
        Anchor::End,
    ));
    scene.push(text(
        x + 350,
        y,
        format!("{}ppm", plain_number(co2)),
        22.0,
        scales::co2().color_at(co2),
        Anchor::End,
    ));
    Ok(())
}

fn sun_readout(scene: &mut Scene, x: i32, y: i32, sun: &SunTimes, style: &PanelStyle) {
    // Up triangle for sunrise, down triangle for sunset.
    scene.push(DrawCommand::Triangle {
        points: [(x + 10, y + 38), (x + 20, y + 22), (x + 30, y + 38)],
        fill: style.sun.sunrise,
    });
    scene.push(text(
        x + 98,
        y + 30,
        sun.sunrise.format("%H:%M").to_string(),
        22.0,
        style.sun.sunrise,
        Anchor::Start,
    ));

    scene.push(DrawCommand::Triangle {
        points: [(x + 10, y + 62), (x + 20, y + 78), (x + 30, y + 62)],
        fill: style.sun.sunset,
    });
    scene.push(text(
        x + 98,
        y + 68,
        sun.sunset.format("%H:%M").to_string(),
        22.0,
        style.sun.sunset,
        Anchor::Start,
    ));
}

fn battery(
    scene: &mut Scene,
    x: i32,
    y: i32,
    label: char,
    module: ModuleReadings,
) -> Result<(), StationError> {
    scene.push(text(
        x,
        y + 4,
        label.to_string(),
        13.0,
        Color::new(50, 50, 50),
        Anchor::Start,
    ));
    scene.push(DrawCommand::Circle {
        cx: x + 18,
        cy: y,
        radius: 6,
        color: module.battery()?.color(),
    });
    Ok(())
}

fn co2_gauge(
    scene: &mut Scene,
    x: i32,
    y: i32,
    data: &PanelData,
    style: &PanelStyle,
) -> Result<(), StationError> {
    let gauge = Gauge::new(scales::co2(), style.co2_gauge.clone());
    let needles = [
        NeedleValue::new(data.indoor.co2()?, Color::new(0, 0, 0)),
        NeedleValue::new(data.main.co2()?, Color::new(0, 127, 255)),
    ];
    gauge.draw(scene, x, y, &needles);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{DailySample, HourlySample};
    use crate::station::StationSnapshot;
    use chrono::{Local, TimeDelta, TimeZone};

    const SNAPSHOT: &str = r#"{
        "devices": [{
            "dashboard_data": {
                "Temperature": 21.4, "Humidity": 45, "Pressure": 1014.3,
                "CO2": 600, "pressure_trend": "up"
            },
            "modules": [
                {
                    "module_name": "Outdoor Module",
                    "battery_vp": 5200,
                    "dashboard_data": {
                        "Temperature": 12.7, "Humidity": 81,
                        "max_temp": 14.1, "min_temp": 8.9,
                        "temp_trend": "down"
                    }
                },
                {
                    "module_name": "Indoor 1",
                    "battery_vp": 4800,
                    "dashboard_data": {
                        "Temperature": 20.1, "Humidity": 52, "CO2": 480
                    }
                },
                {
                    "module_name": "Rain",
                    "battery_vp": 4400,
                    "dashboard_data": { "sum_rain_1": 0.3, "sum_rain_24": 2.1 }
                }
            ]
        }]
    }"#;

    fn forecast_fixture() -> ForecastWindow {
        let start = Local.with_ymd_and_hms(2026, 8, 31, 9, 0, 0).unwrap();
        ForecastWindow {
            hourly: (0..25)
                .map(|i| HourlySample {
                    date: start + TimeDelta::hours(i),
                    temperature: 12.0,
                    precipitation: 0.0,
                })
                .collect(),
            daily: (1..6)
                .map(|i| DailySample {
                    date: start + TimeDelta::days(i),
                    temp_min: 8.0,
                    temp_max: 16.0,
                    precipitation_sum: 0.0,
                })
                .collect(),
            today_precipitation_sum: 4.2,
        }
    }

    fn sun_fixture() -> SunTimes {
        let start = Local.with_ymd_and_hms(2026, 8, 31, 9, 0, 0).unwrap();
        SunTimes {
            sunrise: start + TimeDelta::hours(21),
            sunset: start + TimeDelta::hours(11),
        }
    }

    #[test]
    fn full_panel_composes_without_a_font() {
        let snapshot = StationSnapshot::from_json(SNAPSHOT).unwrap();
        let forecast = forecast_fixture();
        let data = PanelData {
            main: snapshot.main_module(),
            outdoor: snapshot.module("Outdoor Module").unwrap(),
            indoor: snapshot.module("Indoor 1").unwrap(),
            rain: snapshot.module("Rain").unwrap(),
            forecast: &forecast,
            sun: sun_fixture(),
        };
        let settings = Settings::for_tests();
        let scene = compose(&data, &default_layout(&settings), &PanelStyle::default()).unwrap();

        assert!(matches!(scene.commands()[0], DrawCommand::Clear(_)));
        // Outdoor block fill: temperature color for 12.7 °C.
        let expected = scales::temperature().color_at(12.7);
        assert!(scene.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Rect { w: 180, h: 95, fill, .. } if *fill == expected
        )));
        // CO2 gauge label combines both indoor readings and must sit on the
        // canvas: text is vertically centered on y, so the center needs
        // half a glyph height of clearance above the bottom edge.
        let style = PanelStyle::default();
        let label_y = scene
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { y, text, .. } if text == "480/600ppm" => Some(*y),
                _ => None,
            })
            .expect("co2 gauge label present");
        let clearance = (style.co2_gauge.label_size / 2.0).ceil() as i32;
        assert!(
            label_y + clearance <= style.height as i32,
            "gauge label at y={} clips below the {}-px canvas",
            label_y,
            style.height
        );
        // Three battery dots.
        let batteries = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { radius: 6, .. }))
            .count();
        assert_eq!(batteries, 3);
    }

    #[test]
    fn missing_module_field_aborts_composition() {
        let snapshot = StationSnapshot::from_json(SNAPSHOT).unwrap();
        let forecast = forecast_fixture();
        let data = PanelData {
            main: snapshot.main_module(),
            outdoor: snapshot.module("Rain").unwrap(), // wrong module on purpose
            indoor: snapshot.module("Indoor 1").unwrap(),
            rain: snapshot.module("Rain").unwrap(),
            forecast: &forecast,
            sun: sun_fixture(),
        };
        let settings = Settings::for_tests();
        let result = compose(&data, &default_layout(&settings), &PanelStyle::default());
        assert!(matches!(result, Err(StationError::MissingField { .. })));
    }

    #[test]
    fn dry_day_renders_the_dry_caption() {
        let mut scene = Scene::new();
        let snapshot = StationSnapshot::from_json(
            r#"{"devices":[{"dashboard_data":{},
                "modules":[{"module_name":"Rain","battery_vp":5000,
                "dashboard_data":{"sum_rain_1":0.0,"sum_rain_24":0.0}}]}]}"#,
        )
        .unwrap();
        let rain = snapshot.module("Rain").unwrap();
        rain_bar(&mut scene, 550, 30, rain, 0.0, &PanelStyle::default()).unwrap();
        assert!(scene.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, .. } if text == "Dry"
        )));
        assert!(!scene
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Rect { .. })));
    }

    #[test]
    fn forecast_beyond_measured_rain_draws_the_dashed_frame() {
        let mut scene = Scene::new();
        let snapshot = StationSnapshot::from_json(
            r#"{"devices":[{"dashboard_data":{},
                "modules":[{"module_name":"Rain","battery_vp":5000,
                "dashboard_data":{"sum_rain_1":0.4,"sum_rain_24":1.0}}]}]}"#,
        )
        .unwrap();
        let rain = snapshot.module("Rain").unwrap();
        rain_bar(&mut scene, 550, 30, rain, 6.0, &PanelStyle::default()).unwrap();
        assert!(scene
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::DashedRect { .. })));
        // Bar widths scale against the forecast total, not the measured day.
        let day_width: f64 = 230.0 / 60.0 * 6.0; // (day - hour) * 10 * tenth
        assert!(scene.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Rect { w, .. } if (*w - day_width.round() as i32).abs() <= 1
        )));
    }

    #[test]
    fn number_splitting_keeps_one_decimal_digit() {
        assert_eq!(split_number(21.46), ("21".to_string(), "5".to_string()));
        assert_eq!(split_number(-3.44), ("-3".to_string(), "4".to_string()));
        assert_eq!(split_number(7.0), ("7".to_string(), "0".to_string()));
        assert_eq!(plain_number(45.0), "45");
        assert_eq!(plain_number(45.5), "45.5");
    }
}
