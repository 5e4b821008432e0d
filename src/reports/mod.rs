//! Statistics reporters over a filtered dataset.
//!
//! Each reporter builds a serializable stats record in one pass over the
//! trips, then renders it to the console. Reporters never mutate the
//! dataset, and every one of them tolerates an empty filter result.

pub mod duration_stats;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;
pub mod utility;
