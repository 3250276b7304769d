//! Per-process cache of the last successful ticket query.
//!
//! Reset rule: the cache stops being fresh when its TTL elapses or when
//! `invalidate` is called (manual refresh, any successful write). Rows are
//! only replaced by the next successful reload, so stale rows remain
//! available as a fallback when a reload fails.

use std::time::{Duration, Instant};

use super::models::Ticket;

pub struct TicketCache {
    ttl: Duration,
    rows: Option<Vec<Ticket>>,
    fetched_at: Option<Instant>,
}

impl TicketCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            rows: None,
            fetched_at: None,
        }
    }

    /// Rows from the last load, if it happened within the TTL.
    pub fn fresh(&self) -> Option<&[Ticket]> {
        let fetched_at = self.fetched_at?;
        if fetched_at.elapsed() <= self.ttl {
            self.rows.as_deref()
        } else {
            None
        }
    }

    /// Rows from the last successful load regardless of age.
    pub fn stale(&self) -> Option<&[Ticket]> {
        self.rows.as_deref()
    }

    pub fn store(&mut self, rows: Vec<Ticket>) {
        self.rows = Some(rows);
        self.fetched_at = Some(Instant::now());
    }

    /// Force the next read to reload. Keeps the rows as a stale fallback.
    pub fn invalidate(&mut self) {
        self.fetched_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::models::{TicketPriority, TicketStatus};
    use chrono::Utc;

    fn ticket(id: i64) -> Ticket {
        Ticket {
            id,
            recording_id: None,
            ticket_number: format!("TKT-{:04}", id),
            title: "t".to_string(),
            description: String::new(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            notes: String::new(),
            created_at: Utc::now(),
            updated_at: None,
            recording: None,
        }
    }

    #[test]
    fn empty_cache_has_nothing() {
        let cache = TicketCache::new(Duration::from_secs(60));
        assert!(cache.fresh().is_none());
        assert!(cache.stale().is_none());
    }

    #[test]
    fn stored_rows_are_fresh_within_ttl() {
        let mut cache = TicketCache::new(Duration::from_secs(60));
        cache.store(vec![ticket(1)]);
        assert_eq!(cache.fresh().unwrap().len(), 1);
    }

    #[test]
    fn rows_expire_after_ttl() {
        let mut cache = TicketCache::new(Duration::from_millis(10));
        cache.store(vec![ticket(1)]);
        std::thread::sleep(Duration::from_millis(25));
        assert!(cache.fresh().is_none());
        // Still available as a stale fallback.
        assert_eq!(cache.stale().unwrap().len(), 1);
    }

    #[test]
    fn invalidate_keeps_stale_rows() {
        let mut cache = TicketCache::new(Duration::from_secs(60));
        cache.store(vec![ticket(1), ticket(2)]);
        cache.invalidate();
        assert!(cache.fresh().is_none());
        assert_eq!(cache.stale().unwrap().len(), 2);
    }

    #[test]
    fn store_replaces_rows_wholesale() {
        let mut cache = TicketCache::new(Duration::from_secs(60));
        cache.store(vec![ticket(1), ticket(2)]);
        cache.store(vec![ticket(3)]);
        let rows = cache.fresh().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 3);
    }
}
