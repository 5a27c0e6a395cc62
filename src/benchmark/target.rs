//! Dispatch of an operation tag onto a list

use crate::list::{LockedList, SortedList};
use crate::workload::OperationTag;

/// Something an executor can apply tagged operations to
pub trait ListTarget {
    /// Run the operation for `tag` with `value`, returning its boolean outcome
    fn apply(&mut self, tag: OperationTag, value: u32) -> bool;
}

impl ListTarget for SortedList<u32> {
    #[inline]
    fn apply(&mut self, tag: OperationTag, value: u32) -> bool {
        match tag {
            OperationTag::Member => self.member(&value),
            OperationTag::Insert => self.insert(value),
            OperationTag::Delete => self.delete(&value),
        }
    }
}

/// Shared handle: each call takes and releases the list lock
impl ListTarget for &LockedList<u32> {
    #[inline]
    fn apply(&mut self, tag: OperationTag, value: u32) -> bool {
        match tag {
            OperationTag::Member => self.member(&value),
            OperationTag::Insert => self.insert(value),
            OperationTag::Delete => self.delete(&value),
        }
    }
}
