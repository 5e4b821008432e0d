//! Interactive five-row paging over the filtered dataset.

use anyhow::Result;
use std::io::BufRead;

use crate::input::confirm;
use crate::loader::{Dataset, Trip};

const PAGE_SIZE: usize = 5;

/// Offers the raw trip records five at a time.
///
/// The first prompt asks whether to view individual trips at all; each later
/// prompt advances the window by five rows. Anything other than "yes" stops.
/// A window past the end prints the partial tail and the loop ends once the
/// window start reaches the row count. Returns the number of rows shown.
pub fn page(reader: &mut impl BufRead, dataset: &Dataset) -> Result<usize> {
    if !confirm(reader, "\nView individual trip data? Enter 'yes' / 'no'. ")? {
        return Ok(0);
    }

    let mut shown = 0;
    let mut start = 0;
    loop {
        let end = (start + PAGE_SIZE).min(dataset.len());
        for (offset, trip) in dataset.trips[start..end].iter().enumerate() {
            print_trip(start + offset, trip, dataset);
        }
        shown += end - start;

        start += PAGE_SIZE;
        if start >= dataset.len() {
            break;
        }
        if !confirm(reader, "\nView the next five rows? Enter 'yes' / 'no'. ")? {
            break;
        }
    }

    Ok(shown)
}

fn print_trip(index: usize, trip: &Trip, dataset: &Dataset) {
    println!("--- Trip {index} ---");
    println!("  Start Time:    {}", trip.start_time);
    if let Some(end_time) = &trip.end_time {
        println!("  End Time:      {end_time}");
    }
    println!("  Trip Duration: {} seconds", trip.duration_secs);
    println!("  Start Station: {}", trip.start_station);
    println!("  End Station:   {}", trip.end_station);
    println!("  User Type:     {}", trip.user_type.as_deref().unwrap_or("-"));
    if dataset.has_gender {
        println!("  Gender:        {}", trip.gender.as_deref().unwrap_or("-"));
    }
    if dataset.has_birth_year {
        match trip.birth_year {
            Some(year) => println!("  Birth Year:    {}", year as i32),
            None => println!("  Birth Year:    -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn dataset(rows: usize) -> Dataset {
        let trips = (0..rows)
            .map(|i| Trip {
                start_time: NaiveDate::from_ymd_opt(2017, 6, 5)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
                end_time: Some("2017-06-05 08:25:00".to_string()),
                duration_secs: 60.0 + i as f64,
                start_station: format!("Station {i}"),
                end_station: "Damen Ave".to_string(),
                user_type: Some("Subscriber".to_string()),
                gender: None,
                birth_year: None,
                month: 6,
                day_of_week: "Monday".to_string(),
                hour: 8,
            })
            .collect();

        Dataset {
            trips,
            has_gender: false,
            has_birth_year: false,
        }
    }

    #[test]
    fn test_decline_shows_nothing() {
        let mut input = Cursor::new("no\n");
        let shown = page(&mut input, &dataset(7)).unwrap();
        assert_eq!(shown, 0);
    }

    #[test]
    fn test_accept_on_empty_dataset_does_not_error() {
        let mut input = Cursor::new("yes\n");
        let shown = page(&mut input, &dataset(0)).unwrap();
        assert_eq!(shown, 0);
    }

    #[test]
    fn test_seven_rows_two_yes_answers() {
        // First window shows rows 0..5, second the partial tail 5..7, then
        // the loop ends on its own without a third prompt.
        let mut input = Cursor::new("yes\nyes\n");
        let shown = page(&mut input, &dataset(7)).unwrap();
        assert_eq!(shown, 7);
    }

    #[test]
    fn test_decline_after_first_window() {
        let mut input = Cursor::new("yes\nno\n");
        let shown = page(&mut input, &dataset(12)).unwrap();
        assert_eq!(shown, 5);
    }

    #[test]
    fn test_exact_multiple_stops_without_extra_prompt() {
        // 10 rows: two windows, and the second "yes" consumes the only
        // continue prompt. EOF afterwards must not be reached.
        let mut input = Cursor::new("yes\nyes\n");
        let shown = page(&mut input, &dataset(10)).unwrap();
        assert_eq!(shown, 10);
    }

    #[test]
    fn test_eof_mid_paging_declines() {
        let mut input = Cursor::new("yes\n");
        let shown = page(&mut input, &dataset(12)).unwrap();
        assert_eq!(shown, 5);
    }
}
