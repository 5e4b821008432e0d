//! Statistics on the most frequent times of travel.

use serde::Serialize;
use std::time::Instant;

use crate::config;
use crate::loader::Dataset;
use crate::reports::utility::mode;

/// Most common month, weekday, and start hour over the filtered trips.
#[derive(Debug, Serialize)]
pub struct TimeStats {
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<String>,
    pub most_common_hour: Option<u32>,
    pub elapsed_secs: f64,
}

impl TimeStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let started = Instant::now();

        let most_common_month = mode(dataset.trips.iter().map(|t| t.month)).map(|(m, _)| m);
        let most_common_day =
            mode(dataset.trips.iter().map(|t| t.day_of_week.clone())).map(|(d, _)| d);
        let most_common_hour = mode(dataset.trips.iter().map(|t| t.hour)).map(|(h, _)| h);

        TimeStats {
            most_common_month,
            most_common_day,
            most_common_hour,
            elapsed_secs: started.elapsed().as_secs_f64(),
        }
    }

    pub fn render(&self) {
        println!("\nCalculating the most frequent times of travel...\n");

        match self.most_common_month {
            Some(month) => println!(
                "The most common month for travel is: {}",
                month_name(month)
            ),
            None => println!("No trips matched the filter."),
        }
        if let Some(day) = &self.most_common_day {
            println!("The most common day of the week for travel is: {day}");
        }
        if let Some(hour) = self.most_common_hour {
            println!("The most common start hour for travel is: {hour}");
        }

        println!("\nThis took {:.6} seconds.", self.elapsed_secs);
        crate::output::rule();
    }
}

/// Title-cased month name for a 1-indexed month number.
fn month_name(month: u32) -> String {
    config::MONTHS
        .get(month as usize - 1)
        .map(|name| config::title_case(name))
        .unwrap_or_else(|| month.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Trip;
    use chrono::NaiveDate;

    fn trip(month: u32, day: &str, hour: u32) -> Trip {
        Trip {
            start_time: NaiveDate::from_ymd_opt(2017, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            end_time: None,
            duration_secs: 60.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
            month,
            day_of_week: day.to_string(),
            hour,
        }
    }

    #[test]
    fn test_most_common_values() {
        let dataset = Dataset {
            trips: vec![
                trip(6, "Monday", 8),
                trip(6, "Monday", 8),
                trip(5, "Sunday", 17),
            ],
            ..Default::default()
        };

        let stats = TimeStats::from_dataset(&dataset);
        assert_eq!(stats.most_common_month, Some(6));
        assert_eq!(stats.most_common_day.as_deref(), Some("Monday"));
        assert_eq!(stats.most_common_hour, Some(8));
    }

    #[test]
    fn test_empty_dataset_yields_none() {
        let stats = TimeStats::from_dataset(&Dataset::default());
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_hour, None);
    }

    #[test]
    fn test_render_does_not_panic_on_empty() {
        TimeStats::from_dataset(&Dataset::default()).render();
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
