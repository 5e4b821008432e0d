//! Interactive input collection.
//!
//! Validation is a pure function over a line of input; the looping collector
//! is parameterized over any [`BufRead`] so tests can feed scripted answers
//! instead of a live console.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};

use crate::config;

const RETRY_MESSAGE: &str =
    "Program cannot move on without valid input, please re-enter selection.";

/// The (city, month, day) selection for one session iteration.
///
/// City is always a concrete key; month and day are either a vocabulary
/// member or the sentinel "all" (no filtering).
#[derive(Debug, Clone)]
pub struct Filters {
    pub city: String,
    pub month: String,
    pub day: String,
}

/// Normalizes a raw answer and checks it against a vocabulary.
///
/// Returns the lowercased, trimmed token when it is a vocabulary member, or
/// when it equals "all" and `allow_all` is set. Returns `None` otherwise.
pub fn validate(raw: &str, vocabulary: &[&str], allow_all: bool) -> Option<String> {
    let token = raw.trim().to_lowercase();
    if vocabulary.contains(&token.as_str()) || (allow_all && token == "all") {
        Some(token)
    } else {
        None
    }
}

/// Prompts until the reader supplies a valid vocabulary member.
///
/// Invalid answers print a retry message and loop; there is no retry limit.
/// EOF on the reader is an error, since the interactive stream is gone and
/// no valid answer can ever arrive.
pub fn collect(
    reader: &mut impl BufRead,
    prompt: &str,
    vocabulary: &[&str],
    allow_all: bool,
) -> Result<String> {
    loop {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("input stream closed while waiting for a selection");
        }

        match validate(&line, vocabulary, allow_all) {
            Some(token) => return Ok(token),
            None => println!("{RETRY_MESSAGE}"),
        }
    }
}

/// Asks a yes/no question. Only "yes" (case-insensitive) is affirmative;
/// any other answer, empty input, or EOF declines.
pub fn confirm(reader: &mut impl BufRead, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}

/// Greets the user and gathers the city/month/day filter triple.
///
/// The "all" sentinel is accepted for month and day only; a city answer must
/// name one of the known cities, since "all" has no backing data file.
pub fn get_filters(reader: &mut impl BufRead) -> Result<Filters> {
    println!("Hello! Let's explore some US bikeshare data!");

    let city = collect(
        reader,
        "Please select a city to explore (chicago, new york, washington): ",
        config::CITIES,
        false,
    )?;
    let month = collect(
        reader,
        "Month to filter by (january, february, ... december), or 'all' for no month filter: ",
        config::MONTHS,
        true,
    )?;
    let day = collect(
        reader,
        "Day of the week to filter by (sunday ... saturday), or 'all' for no day filter: ",
        config::DAYS,
        true,
    )?;

    crate::output::rule();
    Ok(Filters { city, month, day })
}
