use crate::models::ChartEntry;
use super::OrderingPolicy;

/// Chooses which chart entries are submitted, and in what order
pub struct EntrySelection;

impl EntrySelection {
    /// Take the first `max_entries` entries by ascending rank, then apply the
    /// ordering policy to that capped list. Entries past the cap are dropped
    /// before ordering, so `Descending` reverses the top N rather than picking
    /// the bottom N.
    pub fn select(
        entries: &[ChartEntry],
        max_entries: usize,
        ordering: OrderingPolicy,
    ) -> Vec<&ChartEntry> {
        let mut by_rank: Vec<&ChartEntry> = entries.iter().collect();
        by_rank.sort_by_key(|entry| entry.rank);
        by_rank.truncate(max_entries);

        match ordering {
            OrderingPolicy::Natural | OrderingPolicy::Ascending => by_rank,
            OrderingPolicy::Descending => {
                by_rank.reverse();
                by_rank
            }
        }
    }
}
