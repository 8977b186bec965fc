use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::rc::Rc;

use crate::data_structures::{AdaptableQueue, PriorityEntry};
use crate::{Error, Result};

/// Adaptable priority queue backed by an unsorted list
///
/// Exposes the same contract as [`AdaptablePriorityQueue`](super::AdaptablePriorityQueue)
/// and produces the same results for any sequence of operations, but finds the
/// minimum with a linear scan. `add` and `remove` are O(1); `pop` and `peek`
/// are O(n) in the number of stored entries.
#[derive(Debug)]
pub struct UnsortedPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    items: Vec<Rc<PriorityEntry<T, P>>>,
    index: HashMap<T, Rc<PriorityEntry<T, P>>>,
    counter: u64,
}

impl<T, P> UnsortedPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        UnsortedPriorityQueue {
            items: Vec::new(),
            index: HashMap::new(),
            counter: 0,
        }
    }

    /// Number of stored entries, including tombstones
    pub fn storage_len(&self) -> usize {
        self.items.len()
    }

    /// Current priority of a queued task
    pub fn priority_of(&self, task: &T) -> Option<P> {
        self.index.get(task).map(|entry| entry.priority())
    }

    /// Iterates over live entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&T, P)> + '_ {
        self.items
            .iter()
            .filter(|entry| !entry.is_removed())
            .map(|entry| (entry.task(), entry.priority()))
    }

    /// Position of the smallest live entry
    fn min_live_position(&self) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_removed())
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(position, _)| position)
    }
}

impl<T, P> Default for UnsortedPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> AdaptableQueue<T, P> for UnsortedPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    fn add(&mut self, task: T, priority: P) -> u64 {
        if let Some(previous) = self.index.remove(&task) {
            previous.mark_removed();
        }

        let sequence = self.counter;
        self.counter += 1;
        let entry = Rc::new(PriorityEntry::new(task.clone(), priority, sequence));
        self.index.insert(task, Rc::clone(&entry));
        self.items.push(entry);
        sequence
    }

    fn remove(&mut self, task: &T) -> Result<()> {
        let entry = self.index.remove(task).ok_or(Error::TaskNotFound)?;
        entry.mark_removed();
        Ok(())
    }

    fn pop(&mut self) -> Result<(T, P)> {
        if self.items.is_empty() {
            return Err(Error::EmptyQueue("pop"));
        }

        let Some(position) = self.min_live_position() else {
            // Only tombstones left
            self.items.clear();
            return Err(Error::EmptyQueue("pop"));
        };

        let entry = self.items.swap_remove(position);
        self.index.remove(entry.task());
        Ok((entry.task().clone(), entry.priority()))
    }

    fn peek(&mut self) -> Result<(T, P)> {
        self.min_live_position()
            .map(|position| {
                let entry = &self.items[position];
                (entry.task().clone(), entry.priority())
            })
            .ok_or(Error::EmptyQueue("peek"))
    }

    fn contains(&self, task: &T) -> bool {
        self.index.contains_key(task)
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

impl<T, P> Display for UnsortedPriorityQueue<T, P>
where
    T: Clone + Eq + Hash + Debug,
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
    fn test_pop_in_priority_order() {
        let mut pq = UnsortedPriorityQueue::new();
        pq.add("Task 1", 5);
        pq.add("Task 2", 3);
        pq.add("Task 3", 7);
        pq.add("Task 4", 1);

        pq.update_priority(&"Task 3", 0).unwrap();
        pq.remove(&"Task 2").unwrap();

        assert_eq!(pq.pop(), Ok(("Task 3", 0)));
        assert_eq!(pq.pop(), Ok(("Task 4", 1)));
        assert_eq!(pq.pop(), Ok(("Task 1", 5)));
        assert!(pq.is_empty());
    }

    #[test]
    fn test_equal_priorities_pop_in_insertion_order() {
        let mut pq = UnsortedPriorityQueue::new();
        for task in ['c', 'a', 'b'] {
            pq.add(task, 1);
        }
        assert_eq!(pq.pop(), Ok(('c', 1)));
        assert_eq!(pq.pop(), Ok(('a', 1)));
        assert_eq!(pq.pop(), Ok(('b', 1)));
    }

    #[test]
    fn test_pop_clears_storage_of_tombstones() {
        let mut pq = UnsortedPriorityQueue::new();
        pq.add(1u8, 1u8);
        pq.add(2, 2);
        pq.remove(&1).unwrap();
        pq.remove(&2).unwrap();
        assert_eq!(pq.storage_len(), 2);

        assert_eq!(pq.pop(), Err(Error::EmptyQueue("pop")));
        assert_eq!(pq.storage_len(), 0);
    }

    #[test]
    fn test_peek_over_tombstones_fails_without_consuming() {
        let mut pq = UnsortedPriorityQueue::new();
        pq.add(1u8, 1u8);
        pq.remove(&1).unwrap();
        assert_eq!(pq.peek(), Err(Error::EmptyQueue("peek")));
        assert_eq!(pq.storage_len(), 1);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut pq = UnsortedPriorityQueue::new();
        pq.add("a", 3);
        pq.add("b", 2);
        assert_eq!(pq.peek(), pq.peek());
        assert_eq!(pq.peek(), Ok(("b", 2)));
        assert_eq!(pq.len(), 2);
    }
}
