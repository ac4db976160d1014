use chrono::{DateTime, Utc};

/// A question is shown to voters once it is published and has something to
/// vote for. `now` is captured once by the caller and shared by every record
/// in the same pass.
pub fn is_visible(pub_date: DateTime<Utc>, choice_count: usize, now: DateTime<Utc>) -> bool {
    pub_date <= now && choice_count > 0
}
