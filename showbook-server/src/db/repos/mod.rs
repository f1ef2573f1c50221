//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses LEFT JOINs with filtered counts for listings (no N+1)
//! - Takes `now` from the caller so upcoming/past is decided at read time
//! - Wraps every write in its own transaction

pub mod artists;
pub mod shows;
pub mod venues;

use chrono::{DateTime, Utc};

pub use artists::{Artist, ArtistDetail, ArtistRepo, ArtistShow, ArtistSummary};
pub use shows::{ShowListing, ShowRepo};
pub use venues::{Venue, VenueArea, VenueDetail, VenueRepo, VenueShow, VenueSummary};

/// A show starting exactly at `now` counts as upcoming.
pub fn is_upcoming(start_time: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    start_time >= now
}

/// Split rows into `(upcoming, past)` by start time, preserving order.
pub fn split_upcoming<T>(
    rows: Vec<T>,
    now: &DateTime<Utc>,
    start_time: impl Fn(&T) -> &DateTime<Utc>,
) -> (Vec<T>, Vec<T>) {
    rows.into_iter()
        .partition(|row| is_upcoming(start_time(row), now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn boundary_is_upcoming() {
        let now = Utc::now();
        assert!(is_upcoming(&now, &now));
        assert!(is_upcoming(&(now + Duration::seconds(1)), &now));
        assert!(!is_upcoming(&(now - Duration::seconds(1)), &now));
    }

    #[test]
    fn split_puts_each_row_in_exactly_one_bucket() {
        let now = Utc::now();
        let rows = vec![
            now - Duration::days(2),
            now + Duration::hours(1),
            now,
            now - Duration::minutes(5),
        ];
        let (upcoming, past) = split_upcoming(rows, &now, |t| t);
        assert_eq!(upcoming, vec![now + Duration::hours(1), now]);
        assert_eq!(past, vec![now - Duration::days(2), now - Duration::minutes(5)]);
    }
}
