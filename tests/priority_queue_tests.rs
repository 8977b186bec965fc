use adaptable_sssp::{
    AdaptablePriorityQueue, AdaptableQueue, Error, SimplePriorityQueue, UnsortedPriorityQueue,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Add(u8, u16),
    Remove(u8),
    Update(u8, u16),
    Pop,
    Peek,
}

fn operation() -> impl Strategy<Value = Operation> {
    // Small key space so tasks collide often
    prop_oneof![
        (0u8..8, any::<u16>()).prop_map(|(t, p)| Operation::Add(t, p)),
        (0u8..8).prop_map(Operation::Remove),
        (0u8..8, any::<u16>()).prop_map(|(t, p)| Operation::Update(t, p)),
        Just(Operation::Pop),
        Just(Operation::Peek),
    ]
}

fn apply<Q: AdaptableQueue<u8, u16>>(queue: &mut Q, op: &Operation) -> Result<Option<(u8, u16)>, Error> {
    match *op {
        Operation::Add(task, priority) => {
            queue.add(task, priority);
            Ok(None)
        }
        Operation::Remove(task) => queue.remove(&task).map(|_| None),
        Operation::Update(task, priority) => queue.update_priority(&task, priority).map(|_| None),
        Operation::Pop => queue.pop().map(Some),
        Operation::Peek => queue.peek().map(Some),
    }
}

fn drain<Q: AdaptableQueue<u8, u16>>(queue: &mut Q) -> Vec<(u8, u16)> {
    let mut popped = Vec::new();
    while let Ok(item) = queue.pop() {
        popped.push(item);
    }
    popped
}

proptest! {
    #[test]
    fn test_heap_and_unsorted_backends_agree(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut heap = AdaptablePriorityQueue::new();
        let mut list = UnsortedPriorityQueue::new();

        for op in &ops {
            let heap_res = apply(&mut heap, op);
            let list_res = apply(&mut list, op);
            prop_assert_eq!(&heap_res, &list_res, "result mismatch for {:?}", op);
            prop_assert_eq!(heap.len(), list.len(), "length mismatch after {:?}", op);
        }

        prop_assert_eq!(drain(&mut heap), drain(&mut list));
        prop_assert!(heap.is_empty());
        prop_assert!(list.is_empty());
    }

    #[test]
    fn test_at_most_one_live_entry_per_task(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut heap = AdaptablePriorityQueue::new();
        for op in &ops {
            let _ = apply(&mut heap, op);
        }

        let live: Vec<u8> = heap.iter().map(|(task, _)| *task).collect();
        let mut unique = live.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), live.len());
        prop_assert_eq!(live.len(), heap.len());
    }

    #[test]
    fn test_simple_queue_pops_sorted(priorities in proptest::collection::vec(any::<u16>(), 0..100)) {
        let mut queue = SimplePriorityQueue::new();
        for (task, &priority) in priorities.iter().enumerate() {
            queue.add(task, priority);
        }

        let mut popped = Vec::new();
        while let Ok(item) = queue.pop() {
            popped.push(item);
        }

        let mut expected: Vec<(usize, u16)> = priorities.iter().copied().enumerate().collect();
        expected.sort_by_key(|&(task, priority)| (priority, task));
        prop_assert_eq!(popped, expected);
    }
}

#[test]
fn test_add_then_remove_restores_length() {
    let mut heap = AdaptablePriorityQueue::new();
    let mut list = UnsortedPriorityQueue::new();
    for task in 0u8..5 {
        heap.add(task, u16::from(task) * 10);
        list.add(task, u16::from(task) * 10);
    }

    heap.add(42, 1);
    heap.remove(&42).unwrap();
    list.add(42, 1);
    list.remove(&42).unwrap();

    assert_eq!(heap.len(), 5);
    assert_eq!(list.len(), 5);
    assert!(!heap.contains(&42));
}

#[test]
fn test_update_priority_never_duplicates() {
    let mut heap = AdaptablePriorityQueue::new();
    heap.add("a", 5);
    heap.add("b", 6);
    heap.update_priority(&"a", 9).unwrap();
    heap.update_priority(&"a", 1).unwrap();

    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop(), Ok(("a", 1)));
    assert_eq!(heap.pop(), Ok(("b", 6)));
    assert_eq!(heap.pop(), Err(Error::EmptyQueue("pop")));
}

#[test]
fn test_peek_twice_returns_same_entry() {
    let mut heap = AdaptablePriorityQueue::new();
    heap.add(1u32, 4u32);
    heap.add(2, 4);
    heap.add(3, 2);
    heap.remove(&3).unwrap();

    let first = heap.peek().unwrap();
    let second = heap.peek().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, (1, 4));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_error_messages() {
    let mut heap: AdaptablePriorityQueue<u8, u8> = AdaptablePriorityQueue::new();
    assert_eq!(heap.pop().unwrap_err().to_string(), "pop from an empty priority queue");
    assert_eq!(heap.remove(&1).unwrap_err().to_string(), "Task not found in priority queue");
}
