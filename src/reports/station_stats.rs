//! Statistics on the most popular stations and trips.

use serde::Serialize;
use std::time::Instant;

use crate::loader::Dataset;
use crate::reports::utility::mode;

/// Most frequent start station, end station, and (start, end) pair.
/// All three use maximum-count selection; ties go to the station seen first.
#[derive(Debug, Serialize)]
pub struct StationStats {
    pub top_start_station: Option<(String, usize)>,
    pub top_end_station: Option<(String, usize)>,
    pub top_trip: Option<(String, String, usize)>,
    pub elapsed_secs: f64,
}

impl StationStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let started = Instant::now();

        let top_start_station = mode(dataset.trips.iter().map(|t| t.start_station.clone()));
        let top_end_station = mode(dataset.trips.iter().map(|t| t.end_station.clone()));
        let top_trip = mode(
            dataset
                .trips
                .iter()
                .map(|t| (t.start_station.clone(), t.end_station.clone())),
        )
        .map(|((start, end), count)| (start, end, count));

        StationStats {
            top_start_station,
            top_end_station,
            top_trip,
            elapsed_secs: started.elapsed().as_secs_f64(),
        }
    }

    pub fn render(&self) {
        println!("\nCalculating the most popular stations and trip...\n");

        match &self.top_start_station {
            Some((station, count)) => {
                println!("The most commonly used start station is: {station} ({count} trips)");
            }
            None => println!("No trips matched the filter."),
        }
        if let Some((station, count)) = &self.top_end_station {
            println!("The most commonly used end station is: {station} ({count} trips)");
        }
        if let Some((start, end, count)) = &self.top_trip {
            println!(
                "The most common trip is: {start} -> {end} ({count} trips)"
            );
        }

        println!("\nThis took {:.6} seconds.", self.elapsed_secs);
        crate::output::rule();
    }
}
