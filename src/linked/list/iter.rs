use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{Link, LinkedList, ListState};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // The iterator holds the list itself and pops from either end.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

/// The remaining window of a list being iterated by reference. `len` tracks how many nodes are
/// left so the two ends never cross.
struct Window<T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
}

impl<T> Window<T> {
    fn of(state: &ListState<T>) -> Window<T> {
        match state {
            Empty => Window { front: None, back: None, len: 0 },
            Full(contents) => Window {
                front: Some(contents.head),
                back: Some(contents.tail),
                len: contents.len.get(),
            },
        }
    }

    fn take_front(&mut self) -> Link<T> {
        if self.len == 0 {
            return None;
        }
        let node = self.front?;
        self.len -= 1;
        self.front = *node.next();
        Some(node)
    }

    fn take_back(&mut self) -> Link<T> {
        if self.len == 0 {
            return None;
        }
        let node = self.back?;
        self.len -= 1;
        self.back = *node.prev();
        Some(node)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            window: Window::of(&self.state),
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    window: Window<T>,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.window.take_front().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.window.len, Some(self.window.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.window.take_back().map(|node| node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            window: Window::of(&self.state),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    window: Window<T>,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // Each node is yielded at most once, so the mutable references never alias.
        self.window.take_front().map(|node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.window.len, Some(self.window.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.window.take_back().map(|node| node.value_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
