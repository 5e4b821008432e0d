//! Statistics on the riders: user types, gender, and birth years.

use serde::Serialize;
use std::time::Instant;

use crate::loader::Dataset;
use crate::reports::utility::{descending_counts, mode};

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub most_common: i32,
    pub most_recent: i32,
    pub earliest: i32,
}

/// Rider breakdowns. User-type counts are always present; gender and birth
/// year sections exist only when the source file carries those columns and
/// at least one row has a value.
#[derive(Debug, Serialize)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
    pub elapsed_secs: f64,
}

impl UserStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let started = Instant::now();

        let user_types = descending_counts(
            dataset
                .trips
                .iter()
                .filter_map(|t| t.user_type.clone()),
        );

        let genders = if dataset.has_gender {
            Some(descending_counts(
                dataset.trips.iter().filter_map(|t| t.gender.clone()),
            ))
        } else {
            None
        };

        let birth_years = if dataset.has_birth_year {
            birth_year_stats(dataset)
        } else {
            None
        };

        UserStats {
            user_types,
            genders,
            birth_years,
            elapsed_secs: started.elapsed().as_secs_f64(),
        }
    }

    pub fn render(&self) {
        println!("\nCalculating user stats...\n");

        println!("Counts of user types:");
        if self.user_types.is_empty() {
            println!("  (no data)");
        }
        for (user_type, count) in &self.user_types {
            println!("  {user_type}: {count}");
        }

        if let Some(genders) = &self.genders {
            println!("\nCounts of gender:");
            if genders.is_empty() {
                println!("  (no data)");
            }
            for (gender, count) in genders {
                println!("  {gender}: {count}");
            }
        }

        if let Some(birth_years) = &self.birth_years {
            println!("\nThe most common birth year: {}", birth_years.most_common);
            println!("The most recent birth year: {}", birth_years.most_recent);
            println!("The earliest birth year: {}", birth_years.earliest);
        }

        println!("\nThis took {:.6} seconds.", self.elapsed_secs);
        crate::output::rule();
    }
}

fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    // Birth years arrive as floats with blanks; blanks are skipped.
    let years: Vec<i32> = dataset
        .trips
        .iter()
        .filter_map(|t| t.birth_year)
        .map(|y| y as i32)
        .collect();

    let (most_common, _) = mode(years.iter().copied())?;
    let most_recent = *years.iter().max()?;
    let earliest = *years.iter().min()?;

    Some(BirthYearStats {
        most_common,
        most_recent,
        earliest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Trip;
    use chrono::NaiveDate;

    fn trip(user_type: &str, gender: Option<&str>, birth_year: Option<f64>) -> Trip {
        Trip {
            start_time: NaiveDate::from_ymd_opt(2017, 6, 5)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            end_time: None,
            duration_secs: 60.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: Some(user_type.to_string()),
            gender: gender.map(str::to_string),
            birth_year,
            month: 6,
            day_of_week: "Monday".to_string(),
            hour: 8,
        }
    }

    #[test]
    fn test_user_types_descending_order() {
        let dataset = Dataset {
            trips: vec![
                trip("Subscriber", None, None),
                trip("Subscriber", None, None),
                trip("Customer", None, None),
            ],
            ..Default::default()
        };

        let stats = UserStats::from_dataset(&dataset);
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn test_demographics_absent_without_columns() {
        let dataset = Dataset {
            trips: vec![trip("Subscriber", None, None)],
            has_gender: false,
            has_birth_year: false,
        };

        let stats = UserStats::from_dataset(&dataset);
        assert!(stats.genders.is_none());
        assert!(stats.birth_years.is_none());
    }

    #[test]
    fn test_gender_counts_skip_blank_cells() {
        let dataset = Dataset {
            trips: vec![
                trip("Subscriber", Some("Male"), None),
                trip("Subscriber", Some("Female"), None),
                trip("Subscriber", Some("Male"), None),
                trip("Customer", None, None),
            ],
            has_gender: true,
            has_birth_year: false,
        };

        let stats = UserStats::from_dataset(&dataset);
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
        );
    }

    #[test]
    fn test_birth_year_figures() {
        let dataset = Dataset {
            trips: vec![
                trip("Subscriber", None, Some(1992.0)),
                trip("Subscriber", None, Some(1992.0)),
                trip("Subscriber", None, Some(1985.0)),
                trip("Customer", None, Some(2000.0)),
                trip("Customer", None, None),
            ],
            has_gender: false,
            has_birth_year: true,
        };

        let stats = UserStats::from_dataset(&dataset);
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                most_common: 1992,
                most_recent: 2000,
                earliest: 1985,
            })
        );
    }

    #[test]
    fn test_birth_year_column_with_only_blanks() {
        let dataset = Dataset {
            trips: vec![trip("Subscriber", None, None)],
            has_gender: false,
            has_birth_year: true,
        };

        let stats = UserStats::from_dataset(&dataset);
        assert!(stats.birth_years.is_none());
    }

    #[test]
    fn test_empty_dataset_renders_without_panic() {
        let stats = UserStats::from_dataset(&Dataset::default());
        assert!(stats.user_types.is_empty());
        stats.render();
    }
}
