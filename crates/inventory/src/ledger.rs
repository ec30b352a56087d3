use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainResult, Quantity};

use crate::activity_log::ActivityLog;

/// Threshold used by `low_stock` callers when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 5.0;

/// In-memory stock ledger: item name -> quantity, in insertion order.
///
/// Item names are case-sensitive. `remove` deletes an entry once it drops to
/// zero or below; `add` never deletes, so a brand-new entry may start at zero
/// or a negative quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: IndexMap<String, Quantity>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`, recording the addition in `log`.
    ///
    /// An empty `item` is ignored (neither ledger nor log change). A quantity
    /// that is not a finite number fails with `InvalidArgument` before any
    /// mutation.
    pub fn add(&mut self, item: &str, quantity: f64, log: &mut ActivityLog) -> DomainResult<()> {
        self.add_at(item, quantity, log, Utc::now())
    }

    /// Same as [`Ledger::add`], stamping the log message with `at`.
    pub fn add_at(
        &mut self,
        item: &str,
        quantity: f64,
        log: &mut ActivityLog,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        if item.is_empty() {
            return Ok(());
        }
        let quantity = Quantity::new(quantity)?;

        let current = self.entries.get(item).copied().unwrap_or(Quantity::ZERO);
        let updated = current.checked_add(quantity)?;
        self.entries.insert(item.to_owned(), updated);

        log.record_addition(at, item, quantity);
        Ok(())
    }

    /// Remove `quantity` of `item`.
    ///
    /// Returns `false` when the item is absent or the quantity is rejected;
    /// rejections are reported through `tracing` and not propagated.
    pub fn remove(&mut self, item: &str, quantity: f64) -> bool {
        match self.try_remove(item, quantity) {
            Ok(removed) => removed,
            Err(err) => {
                tracing::warn!(item, error = %err, "stock removal rejected");
                false
            }
        }
    }

    /// Typed form of [`Ledger::remove`]: `Ok(false)` for an absent item,
    /// `Err(InvalidArgument)` for a quantity that is not a number.
    pub fn try_remove(&mut self, item: &str, quantity: f64) -> DomainResult<bool> {
        let quantity = Quantity::new(quantity)?;
        let Some(current) = self.entries.get(item).copied() else {
            return Ok(false);
        };

        let updated = current.checked_sub(quantity)?;
        if updated.is_positive() {
            self.entries.insert(item.to_owned(), updated);
        } else {
            self.entries.shift_remove(item);
        }
        Ok(true)
    }

    /// Stored quantity of `item`, `0` when absent.
    pub fn quantity_of(&self, item: &str) -> f64 {
        self.get(item).map_or(0.0, Quantity::value)
    }

    pub fn get(&self, item: &str) -> Option<Quantity> {
        self.entries.get(item).copied()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(item)
    }

    /// Items whose quantity is strictly below `threshold`, in ledger order.
    pub fn low_stock(&self, threshold: f64) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, qty)| qty.value() < threshold)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.entries.iter().map(|(item, qty)| (item.as_str(), *qty))
    }
}

impl FromIterator<(String, Quantity)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (String, Quantity)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
