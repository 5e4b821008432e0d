//! Static vocabularies for the interactive prompts.
//!
//! The city map, month list, and day list are fixed at compile time; the
//! collector validates every answer against one of these sets.

/// Maps each city key to the CSV file holding its trip records.
pub static CITY_DATA: &[(&str, &str)] = &[
    ("chicago", "chicago.csv"),
    ("new york", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

pub static CITIES: &[&str] = &["chicago", "new york", "washington"];

pub static MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub static DAYS: &[&str] = &[
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Returns the CSV file name for a city key, if the city is known.
pub fn csv_for_city(city: &str) -> Option<&'static str> {
    CITY_DATA
        .iter()
        .find(|(key, _)| *key == city)
        .map(|(_, file)| *file)
}

/// Returns the 1-indexed month number for a lowercase month name.
pub fn month_number(month: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == month)
        .map(|i| i as u32 + 1)
}

/// Title-cases a single token: "monday" -> "Monday".
pub fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
