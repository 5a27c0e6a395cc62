//! Coarse-grained locked list
//!
//! One mutex guards the whole list. Each operation takes the lock, runs the
//! single list call, and releases it, so calls from different threads
//! interleave between operations but never within one. Members take the
//! same exclusive lock as writers.

use parking_lot::Mutex;

use super::sorted_list::SortedList;

/// A `SortedList` shared behind a single lock
pub struct LockedList<T> {
    inner: Mutex<SortedList<T>>,
}

impl<T: Ord> LockedList<T> {
    /// Wrap a list (typically pre-populated) for shared use
    pub fn new(list: SortedList<T>) -> Self {
        Self {
            inner: Mutex::new(list),
        }
    }

    /// Locked membership test
    #[inline]
    pub fn member(&self, value: &T) -> bool {
        self.inner.lock().member(value)
    }

    /// Locked ordered insert
    #[inline]
    pub fn insert(&self, value: T) -> bool {
        self.inner.lock().insert(value)
    }

    /// Locked ordered delete
    #[inline]
    pub fn delete(&self, value: &T) -> bool {
        self.inner.lock().delete(value)
    }

    /// Take the list back once all workers are done
    pub fn into_inner(self) -> SortedList<T> {
        self.inner.into_inner()
    }
}
