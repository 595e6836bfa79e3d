//! Id generation for new entities.

use chrono::Utc;

/// Hands out ids derived from the current time in milliseconds.
///
/// Ids are strictly increasing: when two entities are created within the same
/// millisecond (or the clock steps backwards) the next id is the previous one
/// plus one.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Start after the largest id already in use.
    pub fn seeded(existing: impl IntoIterator<Item = i64>) -> Self {
        Self {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
