use chrono::NaiveDate;

use super::EventStore;
use crate::models::{DateRange, Event, NewEvent};

impl EventStore {
    /// Stores a new event and returns its id.
    pub async fn insert(&self, new_event: &NewEvent) -> Result<i64, sqlx::Error> {
        let id = sqlx::query("INSERT INTO events (event, date) VALUES (?, ?)")
            .bind(&new_event.event)
            .bind(new_event.date)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::info!(event_id = id, date = %new_event.date, "Event stored");
        Ok(id)
    }

    pub async fn all(&self) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT id, event, date FROM events ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Events dated within `range`, both bounds included.
    pub async fn by_date_range(&self, range: DateRange) -> Result<Vec<Event>, sqlx::Error> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, event, date FROM events WHERE date BETWEEN ? AND ? ORDER BY id",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            start = %range.start,
            end = %range.end,
            count = events.len(),
            "Range query"
        );
        Ok(events)
    }

    pub async fn by_date(&self, date: NaiveDate) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT id, event, date FROM events WHERE date = ? ORDER BY id")
            .bind(date)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn by_id(&self, id: i64) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT id, event, date FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns `false` when no event had that id.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(event_id = id, "Event deleted");
        }
        Ok(deleted)
    }
}
