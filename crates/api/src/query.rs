//! Shared query parameter types for API handlers.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Length of the default reporting window in days.
const DEFAULT_RANGE_DAYS: i64 = 30;

/// Inclusive date-range query parameters (`?start_date=&end_date=`),
/// ISO `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRangeQuery {
    /// Resolve the range, defaulting to the trailing 30 days ending today.
    ///
    /// The default is evaluated at call time, so it is a moving window;
    /// callers that need determinism (tests) must pass explicit bounds.
    pub fn resolve(&self) -> (NaiveDate, NaiveDate) {
        let today = Utc::now().date_naive();
        let start = self
            .start_date
            .unwrap_or_else(|| today - Duration::days(DEFAULT_RANGE_DAYS));
        let end = self.end_date.unwrap_or(today);
        (start, end)
    }
}

/// The resolved range echoed back in statistics responses.
#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
