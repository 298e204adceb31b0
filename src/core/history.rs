use std::collections::VecDeque;

use crate::shared::types::HistoryEntry;

/// Default number of conversions kept in the history
pub const MAX_HISTORY_SIZE: usize = 5;

/// Upper bound accepted for a configured history capacity
pub const MAX_HISTORY_CAPACITY: usize = 100;

/// Bounded conversion history with FIFO eviction.
///
/// Entries are stored in chronological order and rendered most recent first.
/// The history lives only as long as the page state that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_SIZE)
    }

    /// The capacity is clamped to `1..=MAX_HISTORY_CAPACITY`
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_HISTORY_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(capacity.min(MAX_HISTORY_SIZE)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest one when over capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::info!("[ConversionHistory] Evicted oldest entry: {}", evicted.summary);
            }
        }
    }

    /// Entries in chronological order (oldest first)
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries most recent first, as displayed
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Get a specific entry by display index (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.recent().nth(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        log::info!("[ConversionHistory] Cleared all entries");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ConversionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::unit_converter::UnitCategory;

    fn entry(n: u32) -> HistoryEntry {
        let value = f64::from(n);
        HistoryEntry::new(UnitCategory::Length, value, "meter", "kilometer", value / 1000.0, 4)
    }

    #[test]
    fn test_push_and_order() {
        let mut history = ConversionHistory::new();
        history.push(entry(1));
        history.push(entry(2));

        let chronological: Vec<f64> = history.entries().map(|e| e.value).collect();
        assert_eq!(chronological, vec![1.0, 2.0]);
        let recent: Vec<f64> = history.recent().map(|e| e.value).collect();
        assert_eq!(recent, vec![2.0, 1.0]); // Most recent first
    }

    #[test]
    fn test_sixth_entry_evicts_the_first() {
        let mut history = ConversionHistory::new();
        for n in 1..=6 {
            history.push(entry(n));
        }

        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        let kept: Vec<f64> = history.entries().map(|e| e.value).collect();
        assert_eq!(kept, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_custom_capacity() {
        let mut history = ConversionHistory::with_capacity(2);
        for n in 0..10 {
            history.push(entry(n));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).map(|e| e.value), Some(9.0));

        assert_eq!(ConversionHistory::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn test_summary_format() {
        let e = entry(1500);
        assert_eq!(e.summary, "1500.0000 meter → 1.5000 kilometer");
    }

    #[test]
    fn test_huge_capacity_is_clamped() {
        let mut history = ConversionHistory::with_capacity(usize::MAX);
        assert_eq!(history.capacity(), MAX_HISTORY_CAPACITY);

        for n in 0..150 {
            history.push(entry(n));
        }
        assert_eq!(history.len(), MAX_HISTORY_CAPACITY);
        assert_eq!(history.entries().next().map(|e| e.value), Some(50.0));
    }

    #[test]
    fn test_clear() {
        let mut history = ConversionHistory::new();
        history.push(entry(1));
        history.push(entry(2));
        assert_eq!(history.len(), 2);

        history.clear();

        assert!(history.is_empty());
    }
}
