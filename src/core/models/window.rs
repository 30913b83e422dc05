use chrono::{DateTime, FixedOffset};

/// The UTC day a settlement covers, as the half-open interval
/// `[date T00:00:00Z, date T23:59:59Z)`.
///
/// The upper bound drops the final second of the day. Upstream filters with
/// `created_at__lt`, so a transaction stamped exactly `23:59:59Z` is never
/// part of that day's settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateWindow {
    start: String,
    end: String,
}

impl DateWindow {
    /// The date string is not checked for calendar correctness.
    pub fn for_date(date: &str) -> Self {
        DateWindow {
            start: format!("{}T00:00:00Z", date),
            end: format!("{}T23:59:59Z", date),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether `created_at` falls inside the window. Unparseable timestamps
    /// (or a window built from a malformed date) contain nothing.
    pub fn contains(&self, created_at: &str) -> bool {
        match (parse(&self.start), parse(&self.end), parse(created_at)) {
            (Some(start), Some(end), Some(at)) => start <= at && at < end,
            _ => false,
        }
    }
}

fn parse(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp).ok()
}
