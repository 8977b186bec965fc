use std::hash::Hash;

use crate::Result;

/// Trait for priority queues that support removal and re-prioritisation by task identity
///
/// Implementations keep at most one live entry per task. Adding a task that is
/// already queued invalidates its previous entry first.
pub trait AdaptableQueue<T, P>: Default
where
    T: Clone + Eq + Hash,
    P: Ord + Copy,
{
    /// Inserts `task` with the given priority and returns the sequence number of the new entry
    fn add(&mut self, task: T, priority: P) -> u64;

    /// Logically removes `task` from the queue
    fn remove(&mut self, task: &T) -> Result<()>;

    /// Removes and returns the live task with the smallest `(priority, sequence)`
    fn pop(&mut self) -> Result<(T, P)>;

    /// Returns the live task with the smallest `(priority, sequence)` without consuming it
    fn peek(&mut self) -> Result<(T, P)>;

    /// Changes the priority of a queued task, returning the sequence number of its new entry
    fn update_priority(&mut self, task: &T, priority: P) -> Result<u64> {
        self.remove(task)?;
        Ok(self.add(task.clone(), priority))
    }

    /// Returns true if `task` has a live entry
    fn contains(&self, task: &T) -> bool;

    /// Returns the number of live tasks
    fn len(&self) -> usize;

    /// Returns true if no live task remains
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
