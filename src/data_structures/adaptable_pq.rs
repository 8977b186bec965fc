use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::rc::Rc;

use log::trace;

use crate::data_structures::{AdaptableQueue, PriorityEntry};
use crate::{Error, Result};

/// Adaptable priority queue backed by a binary min-heap with lazy deletion
///
/// Every entry lives both in the heap and, while it is the live entry for its
/// task, in the identity index. Removing a task only flips the entry's
/// tombstone flag; the heap slot is reclaimed once `pop` or `peek` reaches it.
///
/// | Operation         | Complexity          |
/// |-------------------|---------------------|
/// | `add`             | O(log n)            |
/// | `remove`          | O(1)                |
/// | `pop`             | amortized O(log n)  |
/// | `peek`            | amortized O(log n)  |
/// | `update_priority` | O(log n)            |
#[derive(Debug)]
pub struct AdaptablePriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    /// Min-heap over all entries, live and removed
    heap: BinaryHeap<Reverse<Rc<PriorityEntry<T, P>>>>,

    /// Task -> its only live entry
    index: HashMap<T, Rc<PriorityEntry<T, P>>>,

    /// Next sequence number
    counter: u64,
}

impl<T, P> AdaptablePriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        AdaptablePriorityQueue {
            heap: BinaryHeap::new(),
            index: HashMap::new(),
            counter: 0,
        }
    }

    /// Creates a new empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        AdaptablePriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            counter: 0,
        }
    }

    /// Number of entries held by the heap, including tombstones
    pub fn storage_len(&self) -> usize {
        self.heap.len()
    }

    /// Current priority of a queued task
    pub fn priority_of(&self, task: &T) -> Option<P> {
        self.index.get(task).map(|entry| entry.priority())
    }

    /// Iterates over live entries in heap storage order
    pub fn iter(&self) -> impl Iterator<Item = (&T, P)> + '_ {
        self.heap
            .iter()
            .filter(|Reverse(entry)| !entry.is_removed())
            .map(|Reverse(entry)| (entry.task(), entry.priority()))
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.counter;
        self.counter += 1;
        sequence
    }
}

impl<T, P> Default for AdaptablePriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> AdaptableQueue<T, P> for AdaptablePriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    fn add(&mut self, task: T, priority: P) -> u64 {
        if let Some(previous) = self.index.remove(&task) {
            previous.mark_removed();
        }

        let sequence = self.next_sequence();
        let entry = Rc::new(PriorityEntry::new(task.clone(), priority, sequence));
        self.index.insert(task, Rc::clone(&entry));
        self.heap.push(Reverse(entry));
        sequence
    }

    fn remove(&mut self, task: &T) -> Result<()> {
        let entry = self.index.remove(task).ok_or(Error::TaskNotFound)?;
        entry.mark_removed();
        Ok(())
    }

    fn pop(&mut self) -> Result<(T, P)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if entry.is_removed() {
                trace!("discarding tombstone with sequence {}", entry.sequence());
                continue;
            }
            self.index.remove(entry.task());
            return Ok((entry.task().clone(), entry.priority()));
        }
        Err(Error::EmptyQueue("pop"))
    }

    fn peek(&mut self) -> Result<(T, P)> {
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.is_removed() {
                self.heap.pop();
                continue;
            }
            return Ok((entry.task().clone(), entry.priority()));
        }
        Err(Error::EmptyQueue("peek"))
    }

    fn contains(&self, task: &T) -> bool {
        self.index.contains_key(task)
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

impl<T, P> Display for AdaptablePriorityQueue<T, P>
where
    T: Clone + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
