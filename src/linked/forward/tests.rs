#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyCollection, IndexOutOfBounds, LookupError, NotFound};
use crate::util::panic::assert_panics;

fn contents<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_front_operations() {
    let mut list = ForwardList::new();
    assert!(list.is_empty());
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(contents(&list), vec![2, 3]);
}

#[test]
fn test_insert_relative_to_value() {
    let mut list: ForwardList<_> = [10, 20, 30].into_iter().collect();

    list.insert_after(&20, 25).expect("20 is in the list");
    list.insert_before(&10, 5).expect("10 is in the list");
    list.insert_after(&30, 35).expect("30 is in the list");
    assert_eq!(contents(&list), vec![5, 10, 20, 25, 30, 35]);

    assert_eq!(list.insert_after(&99, 0), Err(LookupError::NotFound(NotFound)));
    assert_eq!(
        ForwardList::new().insert_before(&1, 2),
        Err(LookupError::EmptyCollection(EmptyCollection)),
        "Searching an empty list should report that it is empty rather than missing the value."
    );
}

#[test]
fn test_remove_and_search() {
    let mut list: ForwardList<_> = [1, 2, 3, 2].into_iter().collect();

    assert!(list.contains(&3));
    assert!(!list.is_last(&2), "Only the first matching element is considered.");
    assert!(!list.is_last(&3));

    assert_eq!(list.remove(&2), Ok(2));
    assert_eq!(contents(&list), vec![1, 3, 2], "Only the first equal element should be removed.");
    assert!(list.is_last(&2));
    assert_eq!(list.remove(&7), Err(LookupError::NotFound(NotFound)));
    assert_eq!(list.find(&3), Some(&3));
    assert_eq!(list.index_of(&2), Some(2));

    list.clear();
    assert!(list.remove(&1).is_err_and(|e| e.is_empty_collection()));
}

#[test]
fn test_index_based_access() {
    let mut list: ForwardList<_> = (0..5).collect();
    assert_eq!(list.try_insert_at(5, 5), Ok(()));
    assert_eq!(list.try_insert_at(7, 7), Err(IndexOutOfBounds { index: 7, len: 6 }));
    assert_eq!(list.try_remove_at(0), Ok(0));
    assert_eq!(*list.get(4), 5);
    assert_panics!({ ForwardList::<u8>::new().get(0); });

    list.push_back(6);
    list.extend([7, 8]);
    assert_eq!(contents(&list), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(list.len(), 8, "Extending should keep the length in sync.");
}

#[test]
fn test_ordered_insert_and_retain() {
    let mut list = ForwardList::new();
    for value in [5, 1, 4, 2, 3] {
        list.insert_where(value, |new, existing| new < existing);
    }
    assert_eq!(contents(&list), vec![1, 2, 3, 4, 5]);

    list.retain(|value| value % 2 == 1);
    assert_eq!(contents(&list), vec![1, 3, 5]);
    assert_eq!(list.len(), 3);

    list.reverse();
    assert_eq!(list.to_string(), "(5) -> (3) -> (1)");
}

#[test]
fn test_cursor() {
    let list: ForwardList<_> = ["a", "b", "c"].into_iter().collect();
    let mut cursor = list.cursor();

    assert_eq!(cursor.current(), Some(&"a"));
    assert!(cursor.move_next());
    assert_eq!(cursor.current(), Some(&"b"));
    assert_eq!(cursor.index(), Some(1));

    cursor.move_to_last();
    assert!(cursor.is_last());
    assert!(!cursor.move_next(), "Moving past the last element should report the end.");
    assert!(cursor.is_at_end());

    assert_eq!(cursor.move_to(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert!(cursor.is_at_end(), "A failed move shouldn't reposition the cursor.");
    cursor.reset();
    assert_eq!(cursor.current(), Some(&"a"));
}

#[test]
fn test_clone_is_independent() {
    let mut original: ForwardList<_> = (1..=3).collect();
    let copy = original.clone();
    for value in original.iter_mut() {
        *value = 0;
    }
    assert_eq!(contents(&copy), vec![1, 2, 3]);
    assert_ne!(original, copy);
}

#[test]
fn test_long_list_drop() {
    let counter = CountedDrop::counter();
    let list: ForwardList<_> = (0..100_000).map(|_| CountedDrop::new(&counter)).collect();
    drop(list);
    assert_eq!(counter.get(), 100_000, "Every element should be dropped exactly once.");
}
