// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of the user's notifications.
//!
//! The [`NotificationStore`] is the single source of truth the inbox view
//! renders from. It is owned by the application root and mutated only inside
//! the update loop, so no locking is involved: a fetch replaces the whole
//! map in one synchronous step, and a successful mark-read flips one entry
//! in place. Entries absent from the most recent fetch disappear.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A single notification as known to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Server-assigned identifier.
    pub id: u64,
    /// Short human-readable summary line.
    pub summary: String,
    /// Optional longer body text.
    pub body: Option<String>,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
    /// Whether the user has read this notification.
    pub is_read: bool,
}

impl Notification {
    /// Returns the key this notification is stored under.
    #[must_use]
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Map from stringified notification id to [`Notification`].
///
/// Invariant: every entry present was produced by the latest completed
/// fetch, except for `is_read` flips applied in place afterwards.
#[derive(Debug, Default)]
pub struct NotificationStore {
    entries: HashMap<String, Notification>,
}

impl NotificationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire contents of the store with a fresh fetch result.
    ///
    /// Entries not present in `notifications` are dropped. Duplicate ids in
    /// the input collapse to the last occurrence.
    pub fn replace_all(&mut self, notifications: Vec<Notification>) {
        self.entries = notifications
            .into_iter()
            .map(|n| (n.key(), n))
            .collect();
    }

    /// Marks the entry with the given key as read, leaving all other
    /// entries untouched.
    ///
    /// Returns `false` when no entry exists under `key` — which happens when
    /// an intervening fetch purged the entry between click time and the
    /// server round-trip completing. Callers treat that as a no-op.
    pub fn mark_read(&mut self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    }

    /// Returns the entry stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Notification> {
        self.entries.get(key)
    }

    /// Returns the number of entries in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of unread entries.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.entries.values().filter(|n| !n.is_read).count()
    }

    /// Returns all entries ordered newest first (ties broken by id) for
    /// rendering. The map itself has no ordering.
    #[must_use]
    pub fn sorted_for_display(&self) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self.entries.values().collect();
        notifications.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn notification(id: u64, is_read: bool) -> Notification {
        Notification {
            id,
            summary: format!("notification {id}"),
            body: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, id as u32 % 60).unwrap(),
            is_read,
        }
    }

    #[test]
    fn replace_all_keys_entries_by_stringified_id() {
        let mut store = NotificationStore::new();
        store.replace_all(vec![notification(1, false), notification(2, false)]);

        assert_eq!(store.len(), 2);
        assert!(store.get("1").is_some());
        assert!(store.get("2").is_some());
        assert!(store.get("3").is_none());
    }

    #[test]
    fn replace_all_drops_entries_missing_from_new_fetch() {
        let mut store = NotificationStore::new();
        store.replace_all(vec![notification(1, false), notification(2, false)]);
        store.replace_all(vec![notification(2, false)]);

        assert_eq!(store.len(), 1);
        assert!(store.get("1").is_none());
        assert!(store.get("2").is_some());
    }

    #[test]
    fn mark_read_flips_only_the_target_entry() {
        let mut store = NotificationStore::new();
        store.replace_all(vec![notification(1, false), notification(2, false)]);

        assert!(store.mark_read("1"));

        assert!(store.get("1").unwrap().is_read);
        assert!(!store.get("2").unwrap().is_read);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut store = NotificationStore::new();
        store.replace_all(vec![notification(1, true)]);

        assert!(store.mark_read("1"));
        assert!(store.get("1").unwrap().is_read);
    }

    #[test]
    fn mark_read_on_absent_key_is_a_no_op() {
        let mut store = NotificationStore::new();
        store.replace_all(vec![notification(2, false)]);

        assert!(!store.mark_read("1"));
        assert_eq!(store.len(), 1);
        assert!(!store.get("2").unwrap().is_read);
    }

    #[test]
    fn read_state_survives_until_next_fetch() {
        let mut store = NotificationStore::new();
        store.replace_all(vec![notification(1, false), notification(2, false)]);
        store.mark_read("1");

        // A later fetch fully replaces the contents, including read state.
        store.replace_all(vec![notification(2, false)]);
        assert!(store.get("1").is_none());
        assert!(!store.get("2").unwrap().is_read);
    }

    #[test]
    fn unread_count_ignores_read_entries() {
        let mut store = NotificationStore::new();
        store.replace_all(vec![
            notification(1, false),
            notification(2, true),
            notification(3, false),
        ]);

        assert_eq!(store.unread_count(), 2);
        store.mark_read("3");
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn sorted_for_display_orders_newest_first() {
        let mut store = NotificationStore::new();
        let mut older = notification(1, false);
        older.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut newer = notification(2, false);
        newer.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        store.replace_all(vec![older, newer]);

        let sorted = store.sorted_for_display();
        assert_eq!(sorted[0].id, 2);
        assert_eq!(sorted[1].id, 1);
    }

    #[test]
    fn sorted_for_display_breaks_timestamp_ties_by_id() {
        let mut store = NotificationStore::new();
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut a = notification(7, false);
        a.created_at = ts;
        let mut b = notification(9, false);
        b.created_at = ts;
        store.replace_all(vec![a, b]);

        let sorted = store.sorted_for_display();
        assert_eq!(sorted[0].id, 9);
        assert_eq!(sorted[1].id, 7);
    }
}
