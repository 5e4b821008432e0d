//! Output helpers for report records.
//!
//! The user-facing report text is printed by each reporter's `render`; these
//! helpers route the underlying records into the structured log.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

/// Logs a stats record using Rust's debug pretty-print format.
pub fn log_pretty<T: std::fmt::Debug>(record: &T) {
    debug!("{:#?}", record);
}

/// Logs a stats record as a single-line JSON object.
pub fn log_json<T: Serialize>(record: &T) -> Result<()> {
    debug!("{}", serde_json::to_string(record)?);
    Ok(())
}

/// Prints the section divider used between reports.
pub fn rule() {
    println!("{}", "-".repeat(40));
}
