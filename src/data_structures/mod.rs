pub mod adaptable_pq;
pub mod entry;
pub mod priority_queue;
pub mod traits;
pub mod unsorted_pq;

pub use adaptable_pq::AdaptablePriorityQueue;
pub use entry::PriorityEntry;
pub use priority_queue::SimplePriorityQueue;
pub use traits::AdaptableQueue;
pub use unsorted_pq::UnsortedPriorityQueue;
