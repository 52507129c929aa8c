//! Shared utilities for integration tests.

pub mod harness;

use chrono::{DateTime, Utc};

/// Fixed timestamp used by seeded notes unless overridden.
pub fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2023-06-01T12:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}
