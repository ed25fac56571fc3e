#![cfg(test)]

use super::*;
use crate::util::error::{EmptyCollection, Overflow, Underflow};

#[test]
fn test_queue_is_fifo() {
    let mut queue = Queue::new();
    queue.enqueue("first");
    queue.enqueue("second");
    queue.enqueue("third");

    assert_eq!(queue.peek_front(), Some(&"first"));
    assert_eq!(queue.peek_back(), Some(&"third"), "The back should be the latest element.");
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Some("first"));
    assert_eq!(queue.dequeue(), Some("second"));
    assert_eq!(queue.peek_front(), queue.peek_back(), "A single element is both front and back.");

    queue.clear();
    assert_eq!(queue.try_dequeue(), Err(EmptyCollection));
}

#[test]
fn test_ring_queue_wraps_around() {
    let mut queue = RingQueue::with_cap(3);
    assert_eq!(queue.dequeue(), Err(Underflow));

    for round in 0..5 {
        queue.enqueue(round * 10).expect("queue has space");
        queue.enqueue(round * 10 + 1).expect("queue has space");
        assert_eq!(queue.dequeue(), Ok(round * 10));
        assert_eq!(queue.dequeue(), Ok(round * 10 + 1));
    }
    assert!(queue.is_empty(), "Wrapping around the buffer shouldn't lose or duplicate elements.");

    queue.enqueue(1).expect("queue has space");
    queue.enqueue(2).expect("queue has space");
    queue.enqueue(3).expect("queue has space");
    assert_eq!(queue.enqueue(4), Err(Overflow { cap: 3 }));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(queue.peek_front(), Ok(&1));
    assert_eq!(queue.peek_back(), Ok(&3));

    queue.clear();
    assert_eq!(queue.peek_back(), Err(Underflow));
}

#[test]
fn test_deque_both_ends() {
    let mut deque = Deque::new();
    deque.push_back(2);
    deque.push_front(1);
    deque.push_back(3);

    assert_eq!(format!("{deque:?}"), "[1, 2, 3]");
    assert_eq!(deque.pop_back(), Ok(3));
    assert_eq!(deque.pop_front(), Ok(1));
    assert_eq!(deque.peek_front(), Some(&2));
    deque.clear();
    assert_eq!(deque.pop_front(), Err(EmptyCollection));
    assert_eq!(deque.pop_back(), Err(EmptyCollection));
}

#[test]
fn test_priority_queue_order() {
    let mut queue = PriorityQueue::new();
    queue.enqueue(10, 1);
    queue.enqueue(20, 3);
    queue.enqueue(15, 2);

    assert_eq!(queue.dequeue(), Ok(20), "The highest priority should leave first.");
    assert_eq!(queue.peek(), Ok(&15));
    assert_eq!(queue.peek_priority(), Ok(2));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_priority_queue_ties_are_fifo() {
    let mut queue = PriorityQueue::new();
    queue.enqueue('a', 5);
    queue.enqueue('b', 1);
    queue.enqueue('c', 5);
    queue.enqueue('d', 5);

    let order: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(order, vec!['a', 'c', 'd', 'b']);
    assert_eq!(queue.peek(), Err(EmptyCollection));
}

#[test]
fn test_two_stack_list() {
    let mut list = TwoStackList::new();
    list.push_front(2);
    list.push_front(1);
    list.push_back(3);
    list.push_back(4);
    assert_eq!(list.len(), 4);

    assert_eq!(list.pop_back(), Ok(4));
    assert_eq!(list.pop_back(), Ok(3));
    assert_eq!(list.pop_back(), Ok(2), "An empty back should be refilled from the front.");
    assert_eq!(list.peek_back(), Some(&1));
    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop_front(), Err(EmptyCollection));

    list.push_back(5);
    list.push_back(6);
    assert_eq!(list.peek_front(), Some(&5));
    assert_eq!(list.pop_front(), Ok(5));
    list.clear();
    assert!(list.is_empty());
}
