//! Sorted singly-linked list
//!
//! Every node is uniquely owned by its predecessor's `next` link (or by the
//! list head), so unlinking a node drops it and no node can be reached after
//! it has been freed. Values strictly increase from head to tail.

use std::fmt;
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Ordered singly-linked list with set semantics
pub struct SortedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T: Ord> SortedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of values in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list holds no values
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk to the first link whose node is `>= value` (or the empty tail link)
    fn seek(&mut self, value: &T) -> &mut Link<T> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.value < *value) {
            link = match link {
                Some(node) => &mut node.next,
                None => unreachable!("link checked non-empty above"),
            };
        }
        link
    }

    /// Check whether `value` is in the list
    pub fn member(&self, value: &T) -> bool {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            if node.value >= *value {
                return node.value == *value;
            }
            cursor = node.next.as_deref();
        }
        false
    }

    /// Insert `value` at its ordered position
    ///
    /// Returns false and leaves the list untouched if the value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let link = self.seek(&value);
        if link.as_ref().is_some_and(|node| node.value == value) {
            return false;
        }

        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        true
    }

    /// Remove `value` from the list
    ///
    /// Returns false if the value was not present.
    pub fn delete(&mut self, value: &T) -> bool {
        let link = self.seek(value);
        if !link.as_ref().is_some_and(|node| node.value == *value) {
            return false;
        }

        if let Some(node) = link.take() {
            *link = node.next;
        }
        self.len -= 1;
        true
    }

    /// Iterate values from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
        }
    }

    /// First adjacent pair `(a, b)` with `a >= b`, if any
    ///
    /// `None` means the ordering invariant holds (strictly increasing, so no duplicates).
    pub fn first_order_violation(&self) -> Option<(&T, &T)> {
        let mut values = self.iter();
        let mut prev = values.next()?;
        for value in values {
            if prev >= value {
                return Some((prev, value));
            }
            prev = value;
        }
        None
    }
}

impl SortedList<u32> {
    /// Build a list holding `0..n` in ascending order
    ///
    /// Nodes are linked back to front so population is linear.
    pub fn populated(n: u32) -> Self {
        let mut head: Link<u32> = None;
        for value in (0..n).rev() {
            head = Some(Box::new(Node { value, next: head }));
        }
        Self {
            head,
            len: n as usize,
        }
    }
}

impl<T: Ord> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Unlink nodes one at a time; the default recursive drop overflows the
// stack on long lists.
impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Borrowing iterator over list values
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.map(|node| {
            self.cursor = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &SortedList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty_list() {
        let mut list: SortedList<u32> = SortedList::new();
        assert!(list.is_empty());
        assert!(!list.member(&0));
        assert!(!list.delete(&0));
        assert!(list.insert(42));
        assert_eq!(values(&list), vec![42]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut list = SortedList::new();
        for v in [5u32, 1, 9, 3, 7, 0, 10] {
            assert!(list.insert(v));
            assert!(list.first_order_violation().is_none());
        }
        assert_eq!(values(&list), vec![0, 1, 3, 5, 7, 9, 10]);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut list: SortedList<u32> = [1, 2, 3].into_iter().collect();
        assert!(!list.insert(2));
        assert!(!list.insert(1));
        assert!(!list.insert(3));
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut list: SortedList<u32> = [2, 4, 6].into_iter().collect();
        assert!(!list.delete(&1));
        assert!(!list.delete(&5));
        assert!(!list.delete(&7));
        assert_eq!(values(&list), vec![2, 4, 6]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_head_middle_tail() {
        let mut list: SortedList<u32> = (0..5).collect();
        assert!(list.delete(&0));
        assert_eq!(values(&list), vec![1, 2, 3, 4]);
        assert!(list.delete(&2));
        assert_eq!(values(&list), vec![1, 3, 4]);
        assert!(list.delete(&4));
        assert_eq!(values(&list), vec![1, 3]);
        assert_eq!(list.len(), 2);
        assert!(list.delete(&1));
        assert!(list.delete(&3));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_insert_then_member_delete_then_member() {
        let mut list = SortedList::populated(10);
        assert!(list.insert(100));
        assert!(list.member(&100));
        assert!(list.delete(&100));
        assert!(!list.member(&100));

        assert!(list.delete(&4));
        assert!(!list.member(&4));
        assert!(list.insert(4));
        assert!(list.member(&4));
    }

    #[test]
    fn test_round_trip_any_order() {
        let orders = [
            [5u32, 1, 3],
            [5, 3, 1],
            [1, 5, 3],
            [1, 3, 5],
            [3, 1, 5],
            [3, 5, 1],
        ];
        for order in orders {
            let mut list = SortedList::new();
            for v in order {
                assert!(list.insert(v));
            }
            for v in [1, 3, 5] {
                assert!(list.member(&v), "{v} missing after inserting {order:?}");
            }
            for v in [0, 2, 4, 6, 100] {
                assert!(!list.member(&v), "{v} unexpectedly present");
            }
        }
    }

    #[test]
    fn test_populated() {
        let list = SortedList::populated(1000);
        assert_eq!(list.len(), 1000);
        assert!(list.first_order_violation().is_none());
        assert_eq!(list.iter().next(), Some(&0));
        assert_eq!(list.iter().last(), Some(&999));
        assert!(list.member(&500));
        assert!(!list.member(&1000));

        assert!(SortedList::populated(0).is_empty());
    }

    #[test]
    fn test_random_ops_match_btreeset() {
        use std::collections::BTreeSet;

        let mut rng = fastrand::Rng::with_seed(7);
        let mut list = SortedList::populated(50);
        let mut reference: BTreeSet<u32> = (0..50).collect();

        for _ in 0..5000 {
            let v = rng.u32(0..200);
            match rng.u8(0..3) {
                0 => assert_eq!(list.member(&v), reference.contains(&v)),
                1 => assert_eq!(list.insert(v), reference.insert(v)),
                _ => assert_eq!(list.delete(&v), reference.remove(&v)),
            }
            assert!(list.first_order_violation().is_none());
        }

        assert_eq!(values(&list), reference.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_long_list_drop() {
        let list = SortedList::populated(1_000_000);
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    #[test]
    fn test_debug_format() {
        let list: SortedList<u32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }
}
