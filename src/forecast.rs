//! SQLite forecast cache reader.
//!
//! A separate fetch job keeps `open_meteo_hourly` and `open_meteo_daily`
//! tables up to date; this module only reads them. The connection is opened
//! read-only for the duration of one [`load`] call and dropped afterwards.
//!
//! Timestamps are stored as ISO-8601 text with a UTC offset (that is how the
//! fetch job serializes them); rows are parsed, sorted and windowed here so
//! the composer sees exactly the next 24 hours and the next five days.

use std::path::Path;

use chrono::{DateTime, DurationRound, FixedOffset, Local, TimeDelta};
use rusqlite::{Connection, OpenFlags};

#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("unparseable forecast timestamp '{0}'")]
    BadTimestamp(String),
    #[error("forecast table '{0}' has no usable rows")]
    Empty(&'static str),
}

/// One hourly forecast row.
#[derive(Debug, Clone)]
pub struct HourlySample {
    pub date: DateTime<Local>,
    pub temperature: f64,
    pub precipitation: f64,
}

/// One daily forecast row.
#[derive(Debug, Clone)]
pub struct DailySample {
    pub date: DateTime<Local>,
    pub temp_min: f64,
    pub temp_max: f64,
    pub precipitation_sum: f64,
}

/// The slice of the cache one render consumes.
#[derive(Debug, Clone)]
pub struct ForecastWindow {
    /// Now (truncated to the hour) through +24 h, inclusive.
    pub hourly: Vec<HourlySample>,
    /// Tomorrow through five days out.
    pub daily: Vec<DailySample>,
    /// Today's precipitation total, for the rain-bar forecast extent.
    pub today_precipitation_sum: f64,
}

/// Read and window the forecast cache at `path`.
pub fn load(path: &Path, now: DateTime<Local>) -> Result<ForecastWindow, ForecastError> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    load_from(&conn, now)
}

/// Same as [`load`] against an already open connection (used by tests).
pub fn load_from(conn: &Connection, now: DateTime<Local>) -> Result<ForecastWindow, ForecastError> {
    let mut hourly = read_hourly(conn)?;
    let mut daily = read_daily(conn)?;
    hourly.sort_by_key(|row| row.date);
    daily.sort_by_key(|row| row.date);

    let window_start = now.duration_trunc(TimeDelta::hours(1)).unwrap_or(now);
    let window_end = window_start + TimeDelta::hours(24);
    let hourly: Vec<HourlySample> = hourly
        .into_iter()
        .filter(|row| row.date >= window_start && row.date <= window_end)
        .collect();

    if daily.is_empty() {
        return Err(ForecastError::Empty("open_meteo_daily"));
    }
    let today_precipitation_sum = daily[0].precipitation_sum;
    let daily: Vec<DailySample> = daily.into_iter().skip(1).take(5).collect();

    Ok(ForecastWindow {
        hourly,
        daily,
        today_precipitation_sum,
    })
}

fn read_hourly(conn: &Connection) -> Result<Vec<HourlySample>, ForecastError> {
    let mut stmt =
        conn.prepare("SELECT date, temperature_2m, precipitation FROM open_meteo_hourly")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, f64>(1)?,
            row.get::<_, f64>(2)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (raw_date, temperature, precipitation) = row?;
        out.push(HourlySample {
            date: parse_timestamp(&raw_date)?,
            temperature,
            precipitation,
        });
    }
    Ok(out)
}

fn read_daily(conn: &Connection) -> Result<Vec<DailySample>, ForecastError> {
    let mut stmt = conn.prepare(
        "SELECT date, temperature_2m_min, temperature_2m_max, precipitation_sum \
         FROM open_meteo_daily",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, f64>(1)?,
            row.get::<_, f64>(2)?,
            row.get::<_, f64>(3)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (raw_date, temp_min, temp_max, precipitation_sum) = row?;
        out.push(DailySample {
            date: parse_timestamp(&raw_date)?,
            temp_min,
            temp_max,
            precipitation_sum,
        });
    }
    Ok(out)
}

/// The fetch job writes either `2026-08-31T14:00:00+02:00` or the
/// space-separated variant; accept both (with or without fractional seconds).
fn parse_timestamp(raw: &str) -> Result<DateTime<Local>, ForecastError> {
    let parsed: Option<DateTime<FixedOffset>> = DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%:z").ok())
        .or_else(|| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z").ok());
    parsed
        .map(|dt| dt.with_timezone(&Local))
        .ok_or_else(|| ForecastError::BadTimestamp(raw.to_string()))
}
