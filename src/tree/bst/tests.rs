#![cfg(test)]

use super::*;

fn sample() -> BinarySearchTree<i32> {
    BinarySearchTree::from_slice(&[10, 5, 15, 3, 7, 13, 17])
}

fn owned(values: Vec<&i32>) -> Vec<i32> {
    values.into_iter().copied().collect()
}

#[test]
fn test_insert_and_find() {
    let mut tree = sample();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), 3);
    assert!(tree.contains(&7));
    assert!(!tree.contains(&8));
    assert_eq!(tree.find(&13), Some(&13));
    assert_eq!(tree.insert(7), Err(Duplicate), "Duplicates should be rejected.");
    assert_eq!(tree.insert(8), Ok(()));
    assert_eq!(tree.height(), 4);
}

#[test]
fn test_traversals() {
    let tree = sample();
    assert_eq!(owned(tree.inorder()), vec![3, 5, 7, 10, 13, 15, 17]);
    assert_eq!(owned(tree.preorder()), vec![10, 5, 3, 7, 15, 13, 17]);
    assert_eq!(owned(tree.postorder()), vec![3, 7, 5, 13, 17, 15, 10]);
    assert_eq!(owned(tree.breadth_first()), vec![10, 5, 15, 3, 7, 13, 17]);
    assert_eq!(owned(tree.first_n(3)), vec![3, 5, 7]);
    assert_eq!(tree.first_n(0).len(), 0);
    assert_eq!(tree.first_n(100).len(), 7, "Asking for too many should return every value.");
}

#[test]
fn test_min_max_and_children() {
    let tree = sample();
    assert_eq!(tree.min(), Some(&3));
    assert_eq!(tree.max(), Some(&17));
    assert_eq!(tree.has_left_child(&5), Some(true));
    assert_eq!(tree.has_right_child(&3), Some(false));
    assert_eq!(tree.has_left_child(&4), None);

    let empty = BinarySearchTree::<i32>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.min(), None);
    assert_eq!(empty.height(), 0);
    assert!(empty.breadth_first().is_empty());
}

#[test]
fn test_subtree_sizes() {
    let tree = sample();
    let sizes = tree.subtree_sizes();
    let root = sizes.iter().find(|sizes| *sizes.value == 10).expect("root is in the tree");
    assert_eq!((root.left, root.right), (3, 3));
    let leaf = sizes.iter().find(|sizes| *sizes.value == 17).expect("leaf is in the tree");
    assert_eq!((leaf.left, leaf.right), (0, 0));
    assert_eq!(sizes.len(), 7);
}

#[test]
fn test_remove() {
    let mut tree = sample();

    assert_eq!(tree.remove(&10), Some(10));
    assert_eq!(
        owned(tree.preorder()),
        vec![13, 5, 3, 7, 15, 17],
        "A node with two children should be replaced by its in-order successor."
    );

    assert_eq!(tree.remove(&15), Some(15));
    assert_eq!(owned(tree.preorder()), vec![13, 5, 3, 7, 17], "A single child moves up.");

    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(tree.remove(&3), None);
    assert_eq!(owned(tree.inorder()), vec![5, 7, 13, 17]);

    for value in [5, 7, 13, 17] {
        assert_eq!(tree.remove(&value), Some(value));
    }
    assert!(tree.is_empty());
}

#[test]
fn test_remove_successor_with_right_child() {
    let mut tree = BinarySearchTree::from_slice(&[50, 30, 70, 60, 80, 65]);
    assert_eq!(tree.remove(&50), Some(50));
    assert_eq!(owned(tree.preorder()), vec![60, 30, 70, 65, 80]);
    tree.clear();
    assert_eq!(tree.len(), 0);
}
