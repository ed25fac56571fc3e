/// A binary min-heap stored in a vector. The smallest element is always at index 0 and every
/// element is no larger than its children at `2i + 1` and `2i + 2`.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(log n)` |
/// | `pop` | `O(log n)` |
/// | `peek` | `O(1)` |
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub const fn new() -> MinHeap<T> {
        MinHeap {
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.swap_remove(0);
        self.sift_down(0);
        Some(item)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] >= self.items[parent] {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let smallest = [2 * index + 1, 2 * index + 2]
                .into_iter()
                .filter(|&child| child < self.items.len())
                .fold(index, |smallest, child| {
                    if self.items[child] < self.items[smallest] { child } else { smallest }
                });

            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        for item in iter {
            heap.push(item);
        }
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_ascending_order() {
        let mut heap: MinHeap<_> = [5, 3, 8, 1, 9, 2, 2, 7].into_iter().collect();
        assert_eq!(heap.peek(), Some(&1));
        let drained: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(drained, vec![1, 2, 2, 3, 5, 7, 8, 9]);
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }
}
