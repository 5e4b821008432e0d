//! Statistics on total and average trip duration.

use serde::Serialize;
use std::time::Instant;

use crate::loader::Dataset;
use crate::reports::utility::mean;

/// Sum and arithmetic mean of trip durations, in seconds.
///
/// An empty filter result carries a zero total and no mean; the render path
/// prints a no-data line instead of a NaN.
#[derive(Debug, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_secs: f64,
    pub mean_secs: Option<f64>,
    pub elapsed_secs: f64,
}

impl DurationStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let started = Instant::now();

        let durations: Vec<f64> = dataset.trips.iter().map(|t| t.duration_secs).collect();
        let total_secs = durations.iter().sum();
        let mean_secs = if durations.is_empty() {
            None
        } else {
            Some(mean(&durations))
        };

        DurationStats {
            trip_count: durations.len(),
            total_secs,
            mean_secs,
            elapsed_secs: started.elapsed().as_secs_f64(),
        }
    }

    pub fn render(&self) {
        println!("\nCalculating trip duration...\n");

        println!("Total travel time: {} seconds", self.total_secs);
        match self.mean_secs {
            Some(mean_secs) => println!("Average travel time: {mean_secs} seconds"),
            None => println!("No trips matched the filter."),
        }

        println!("\nThis took {:.6} seconds.", self.elapsed_secs);
        crate::output::rule();
    }
}
