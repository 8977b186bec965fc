use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A task stored in a priority queue together with its priority
///
/// Entries are ordered lexicographically on `(priority, sequence)`. The
/// sequence number is assigned from a monotonic counter on insertion, so equal
/// priorities resolve in insertion order and the task itself is never compared.
///
/// The `removed` flag is the tombstone used for lazy deletion: a removed entry
/// is logically absent but may stay in the backing storage until a later
/// `pop`/`peek` walks past it.
#[derive(Debug)]
pub struct PriorityEntry<T, P> {
    priority: P,
    sequence: u64,
    task: T,
    removed: Cell<bool>,
}

impl<T, P> PriorityEntry<T, P>
where
    P: Ord + Copy,
{
    /// Creates a new live entry
    pub fn new(task: T, priority: P, sequence: u64) -> Self {
        PriorityEntry {
            priority,
            sequence,
            task,
            removed: Cell::new(false),
        }
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn priority(&self) -> P {
        self.priority
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns true if the entry has been logically deleted
    pub fn is_removed(&self) -> bool {
        self.removed.get()
    }

    /// Marks the entry as logically deleted
    pub fn mark_removed(&self) {
        self.removed.set(true);
    }

    /// Consumes the entry, returning `(task, priority)`
    pub fn into_parts(self) -> (T, P) {
        (self.task, self.priority)
    }
}

impl<T, P: Ord> PartialEq for PriorityEntry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T, P: Ord> Eq for PriorityEntry<T, P> {}

impl<T, P: Ord> PartialOrd for PriorityEntry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for PriorityEntry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_breaks_priority_ties() {
        let first = PriorityEntry::new("b", 3, 0);
        let second = PriorityEntry::new("a", 3, 1);
        assert!(first < second);

        let cheaper = PriorityEntry::new("z", 1, 7);
        assert!(cheaper < first);
    }

    #[test]
    fn test_tombstone_does_not_affect_ordering() {
        let entry = PriorityEntry::new(1usize, 5, 2);
        let twin = PriorityEntry::new(2usize, 5, 2);
        entry.mark_removed();
        assert!(entry.is_removed());
        assert!(!twin.is_removed());
        assert_eq!(entry, twin);
    }
}
