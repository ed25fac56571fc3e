#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1), "Front should be the last value pushed to the front.");
    assert_eq!(list.back(), Some(&3), "Back should be the last value pushed to the back.");

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    list.verify_double_links();
    assert_eq!(list.pop_front(), Some(2));
    assert!(list.is_empty(), "Popping the last element should leave the list empty.");
    assert_eq!(list.pop_back(), None);
}

#[test]
fn test_insert_and_remove_by_index() {
    let mut list: LinkedList<_> = (0..6).collect();

    list.insert(3, 100);
    list.insert(0, -1);
    list.insert(list.len(), 200);
    list.verify_double_links();
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![-1, 0, 1, 2, 100, 3, 4, 5, 200],
    );

    assert_eq!(list.remove(4), 100, "Removing from the middle should return that element.");
    assert_eq!(list.remove(0), -1);
    assert_eq!(list.remove(list.len() - 1), 200);
    list.verify_double_links();
    assert_eq!(list, (0..6).collect::<LinkedList<_>>());

    assert_eq!(list.try_remove(6), Err(IndexOutOfBounds { index: 6, len: 6 }));
    assert!(list.try_insert(8, 0).is_err(), "Inserting past the end should fail.");
    assert_panics!({ LinkedList::<u8>::new().remove(0); });
}

#[test]
fn test_get_seeks_from_closest_end() {
    let mut list: LinkedList<_> = (0..11).collect();
    for i in 0..11 {
        assert_eq!(list[i], i, "Indexing should reach every element.");
    }
    list[9] = 90;
    assert_eq!(list.try_get(9), Ok(&90));
    assert_eq!(list.try_replace(9, 9), Ok(90));
    assert!(list.try_get(11).is_err());
}

#[test]
fn test_append() {
    let mut a: LinkedList<_> = (0..3).collect();
    let b: LinkedList<_> = (3..6).collect();
    a.append(b);
    a.append(LinkedList::new());
    a.verify_double_links();
    assert_eq!(a, (0..6).collect::<LinkedList<_>>());

    let mut empty = LinkedList::new();
    empty.append(a.clone());
    assert_eq!(empty, a, "Appending to an empty list should take the other list whole.");
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (1..=4).collect();
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![40, 30, 20, 10]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.next_back(), Some(&40));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&20));
    assert_eq!(iter.next_back(), Some(&30));
    assert_eq!(iter.next(), None, "Ends of a double ended iterator shouldn't cross.");

    assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), vec![40, 30, 20, 10]);
}

#[test]
fn test_contains_and_display() {
    let list: LinkedList<_> = ["a", "b", "c"].into_iter().collect();
    assert!(list.contains(&"b"));
    assert_eq!(list.index_of(&"c"), Some(2));
    assert_eq!(list.index_of(&"z"), None);
    assert_eq!(list.to_string(), "(a) <-> (b) <-> (c)");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::counter();
    let mut list: LinkedList<_> = (0..5).map(|_| CountedDrop::new(&counter)).collect();
    drop(list.pop_front());
    drop(list.remove(1));
    assert_eq!(counter.get(), 2);

    list.clear();
    assert_eq!(counter.get(), 5, "Clearing should drop every remaining element once.");
}
