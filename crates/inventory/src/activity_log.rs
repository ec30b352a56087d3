//! Caller-owned activity log.

use chrono::{DateTime, Utc};

use stockledger_core::Quantity;

/// Timestamp layout used in activity messages (`2024-05-01 09:30:00.000000`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Ordered, human-readable record of stock additions.
///
/// The ledger only ever appends to it; reading and printing is up to the owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog(Vec<String>);

impl ActivityLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub(crate) fn record_addition(&mut self, at: DateTime<Utc>, item: &str, quantity: Quantity) {
        self.0.push(format!(
            "{}: Added {} of {}",
            at.format(TIMESTAMP_FORMAT),
            quantity,
            item
        ));
    }
}

impl From<Vec<String>> for ActivityLog {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl From<ActivityLog> for Vec<String> {
    fn from(log: ActivityLog) -> Self {
        log.0
    }
}

impl IntoIterator for ActivityLog {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
