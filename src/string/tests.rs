#![cfg(test)]

use super::*;
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};

#[test]
fn test_write_truncates_to_capacity() {
    let string = BoundedString::from_str_truncated("Hello, world", 6);
    assert_eq!(string.to_string(), "Hello", "One slot should be kept for the terminator.");
    assert_eq!(string.len(), 5);
    assert_eq!(string.cap(), 6);
}

#[test]
fn test_delete() {
    let mut string = BoundedString::from_str_truncated("Hello world", 32);
    assert_eq!(string.delete(5, 3), Ok(()));
    assert_eq!(string.to_string(), "Hellorld");
    assert_eq!(string.delete(4, 100), Ok(()), "Count should be clamped to the string.");
    assert_eq!(string.to_string(), "Hell");
    assert_eq!(string.delete(4, 1), Err(IndexOutOfBounds { index: 4, len: 4 }));
}

#[test]
fn test_insert() {
    let mut string = BoundedString::from_str_truncated("Held", 8);
    assert_eq!(
        string.insert(b"llo wor", 2),
        Err(IndexOrCapOverflow::CapacityOverflow(CapacityOverflow)),
    );
    assert_eq!(string.insert(b"l", 3), Ok(()));
    assert_eq!(string.insert(b"!", 5), Ok(()));
    assert_eq!(string.to_string(), "Helld!");
    assert!(string.insert(b"x", 10).is_err_and(|e| e.is_index_out_of_bounds()));
    assert_eq!(string.insert(b"o", 4), Ok(()));
    assert_eq!(string.to_string(), "Hellod!");
    assert!(string.insert(b"?", 0).is_err(), "The string is already at its maximum length.");
}

#[test]
fn test_concat_and_substring() {
    let a = BoundedString::from_str_truncated("Hello ", 10);
    let b = BoundedString::from_str_truncated("world", 10);

    assert_eq!(BoundedString::concat(&a, &b, 11), Err(CapacityOverflow));
    let joined = BoundedString::concat(&a, &b, 12).expect("11 bytes fit in capacity 12");
    assert_eq!(joined.to_string(), "Hello world");

    assert_eq!(joined.substring(6, 3).to_string(), "wor");
    assert_eq!(joined.substring(6, 99).to_string(), "world");
    assert!(joined.substring(50, 2).is_empty(), "Starting past the end should copy nothing.");
}

#[test]
fn test_word_eq() {
    assert!(word_eq("Hello   world", "Hello world"));
    assert!(word_eq("a  b   c", "a b c"));
    assert!(!word_eq("Hello   world", "Hello  world!"));
    assert!(!word_eq("Hello world", "Helloworld"), "A run of spaces still separates words.");
}
