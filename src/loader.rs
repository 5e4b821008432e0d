//! CSV loading and filtering for city trip data.
//!
//! Reads the file mapped to the chosen city, derives month/weekday/hour from
//! the start timestamp, and applies the month/day filters in one pass. A row
//! that fails to parse fails the whole load; rows are never dropped silently.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::config;
use crate::input::Filters;

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV row as exported by the city data files. The leading unnamed index
/// column is ignored; demographic columns are absent for some cities.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// A single trip with its derived time fields.
///
/// The derived fields are computed once at load time and never touched
/// again, so they stay consistent with `start_time` for the lifetime of the
/// dataset.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,

    // derived from start_time at load
    pub month: u32,
    pub day_of_week: String,
    pub hour: u32,
}

impl Trip {
    fn from_raw(raw: RawTrip) -> Result<Self> {
        let start = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
            .with_context(|| format!("unparseable start time {:?}", raw.start_time))?;

        Ok(Trip {
            month: start.month(),
            day_of_week: start.format("%A").to_string(),
            hour: start.hour(),
            start_time: start,
            end_time: raw.end_time,
            duration_secs: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year,
        })
    }
}

/// The filtered in-memory dataset for one session iteration, plus capability
/// flags for the demographic columns the source file actually carries.
#[derive(Debug, Default)]
pub struct Dataset {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Loads and filters the CSV for the selected city.
///
/// # Errors
///
/// Fails when the city key has no mapped file, the file cannot be opened, or
/// any row is malformed (including an unparseable start timestamp). Errors
/// carry the failing path and row number.
pub fn load(data_dir: &Path, filters: &Filters) -> Result<Dataset> {
    let file_name = config::csv_for_city(&filters.city)
        .ok_or_else(|| anyhow!("unknown city key: {}", filters.city))?;
    let path = data_dir.join(file_name);

    debug!(path = %path.display(), "Opening city data file");
    let file =
        File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
    let rdr = csv::Reader::from_reader(file);

    let dataset = from_csv_reader(rdr, filters)
        .with_context(|| format!("failed to load {}", path.display()))?;

    info!(
        city = %filters.city,
        month = %filters.month,
        day = %filters.day,
        rows = dataset.len(),
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Reads, derives, and filters trips from an open CSV reader.
///
/// Capability flags come from the header row, not from per-row inspection.
pub fn from_csv_reader<R: std::io::Read>(
    mut rdr: csv::Reader<R>,
    filters: &Filters,
) -> Result<Dataset> {
    let headers = rdr.headers().context("failed to read CSV headers")?;
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let month_filter = match filters.month.as_str() {
        "all" => None,
        name => Some(
            config::month_number(name)
                .ok_or_else(|| anyhow!("unknown month name: {name}"))?,
        ),
    };
    let day_filter = match filters.day.as_str() {
        "all" => None,
        name => Some(config::title_case(name)),
    };

    let mut trips = Vec::new();
    for (idx, record) in rdr.deserialize().enumerate() {
        // Header is line 1, so data row N is line N + 1.
        let raw: RawTrip =
            record.with_context(|| format!("malformed record at line {}", idx + 2))?;
        let trip =
            Trip::from_raw(raw).with_context(|| format!("bad record at line {}", idx + 2))?;

        if let Some(month) = month_filter {
            if trip.month != month {
                continue;
            }
        }
        if let Some(ref day) = day_filter {
            if trip.day_of_week != *day {
                continue;
            }
        }
        trips.push(trip);
    }

    Ok(Dataset {
        trips,
        has_gender,
        has_birth_year,
    })
}
