use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display};

use crate::data_structures::PriorityEntry;
use crate::{Error, Result};

/// Insert-only min-heap priority queue
///
/// There is no identity index: adding a task that is already queued inserts a
/// second entry. Callers simulate decrease-key by pushing the smaller priority
/// and ignoring stale entries when they surface.
#[derive(Debug)]
pub struct SimplePriorityQueue<T, P>
where
    P: Ord + Copy,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<PriorityEntry<T, P>>>,

    /// Next sequence number
    counter: u64,
}

impl<T, P> SimplePriorityQueue<T, P>
where
    P: Ord + Copy,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        SimplePriorityQueue {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    /// Creates a new empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        SimplePriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            counter: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a new entry and returns its sequence number
    pub fn add(&mut self, task: T, priority: P) -> u64 {
        let sequence = self.counter;
        self.counter += 1;
        self.heap
            .push(Reverse(PriorityEntry::new(task, priority, sequence)));
        sequence
    }

    /// Removes the entry with the smallest `(priority, sequence)`
    pub fn pop(&mut self) -> Result<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.into_parts())
            .ok_or(Error::EmptyQueue("pop"))
    }

    /// Returns the entry with the smallest `(priority, sequence)` without removing it
    pub fn peek(&self) -> Result<(&T, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (entry.task(), entry.priority()))
            .ok_or(Error::EmptyQueue("peek"))
    }

    /// Iterates over all entries in heap storage order
    pub fn iter(&self) -> impl Iterator<Item = (&T, P)> + '_ {
        self.heap
            .iter()
            .map(|Reverse(entry)| (entry.task(), entry.priority()))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P> Default for SimplePriorityQueue<T, P>
where
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Display for SimplePriorityQueue<T, P>
where
    T: Debug,
    P: Ord + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_kept() {
        let mut pq = SimplePriorityQueue::new();
        pq.add("v", 9);
        pq.add("w", 4);
        pq.add("v", 2);
        assert_eq!(pq.len(), 3);

        assert_eq!(pq.pop(), Ok(("v", 2)));
        assert_eq!(pq.pop(), Ok(("w", 4)));
        assert_eq!(pq.pop(), Ok(("v", 9)));
        assert_eq!(pq.pop(), Err(Error::EmptyQueue("pop")));
    }

    #[test]
    fn test_peek_and_clear() {
        let mut pq = SimplePriorityQueue::new();
        assert_eq!(pq.peek(), Err(Error::EmptyQueue("peek")));

        pq.add(3u32, 7u32);
        pq.add(1, 7);
        assert_eq!(pq.peek(), Ok((&3, 7)));
        assert_eq!(pq.len(), 2);

        pq.clear();
        assert!(pq.is_empty());
    }
}
