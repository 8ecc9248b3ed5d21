//! Sunrise/sunset lookup for the panel's sun readout and the hourly chart
//! markers.
//!
//! The astronomical math lives in the `sunrise` crate; this module only picks
//! which events to show: if today's sunrise (or sunset) is already past at
//! render time, tomorrow's is shown instead, so the panel always points at
//! the next upcoming event.

use chrono::{DateTime, Local, TimeDelta};
use sunrise::{Coordinates, SolarDay, SolarEvent};

#[derive(Debug, thiserror::Error)]
pub enum SunError {
    #[error("site coordinates ({latitude}, {longitude}) are out of range")]
    BadCoordinates { latitude: f64, longitude: f64 },
}

/// The next upcoming sunrise and sunset.
#[derive(Debug, Clone, Copy)]
pub struct SunTimes {
    pub sunrise: DateTime<Local>,
    pub sunset: DateTime<Local>,
}

/// Compute the next sunrise and sunset for a site, relative to `now`.
pub fn next_sun_events(
    latitude: f64,
    longitude: f64,
    now: DateTime<Local>,
) -> Result<SunTimes, SunError> {
    let today = events_on(latitude, longitude, now)?;
    let tomorrow = events_on(latitude, longitude, now + TimeDelta::days(1))?;

    Ok(SunTimes {
        sunrise: if today.sunrise >= now {
            today.sunrise
        } else {
            tomorrow.sunrise
        },
        sunset: if today.sunset >= now {
            today.sunset
        } else {
            tomorrow.sunset
        },
    })
}

fn events_on(
    latitude: f64,
    longitude: f64,
    day: DateTime<Local>,
) -> Result<SunTimes, SunError> {
    let site = Coordinates::new(latitude, longitude).ok_or(SunError::BadCoordinates {
        latitude,
        longitude,
    })?;
    let solar = SolarDay::new(site, day.date_naive());
    Ok(SunTimes {
        sunrise: solar.event_time(SolarEvent::Sunrise).with_timezone(&Local),
        sunset: solar.event_time(SolarEvent::Sunset).with_timezone(&Local),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const LAT: f64 = 50.85;
    const LON: f64 = 4.35;

    #[test]
    fn sunrise_precedes_sunset_on_the_same_day() {
        let midnight = Local.with_ymd_and_hms(2026, 6, 21, 0, 5, 0).unwrap();
        let events = next_sun_events(LAT, LON, midnight).unwrap();
        assert!(events.sunrise < events.sunset);
        assert!(events.sunrise >= midnight);
    }

    #[test]
    fn past_events_roll_over_to_tomorrow() {
        let late = Local.with_ymd_and_hms(2026, 6, 21, 23, 50, 0).unwrap();
        let events = next_sun_events(LAT, LON, late).unwrap();
        // Both events of the 21st are long past by 23:50 at this latitude.
        assert!(events.sunrise > late);
        assert!(events.sunset > late);
        // And the rolled-over sunrise is within the next day.
        assert!(events.sunrise < late + TimeDelta::days(1) + TimeDelta::hours(12));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let now = Local.with_ymd_and_hms(2026, 6, 21, 12, 0, 0).unwrap();
        assert!(matches!(
            next_sun_events(123.0, 4.35, now),
            Err(SunError::BadCoordinates { .. })
        ));
    }
}
