//! List under benchmark
//!
//! - SortedList: ordered singly-linked list with member/insert/delete
//! - LockedList: the same list behind one coarse-grained lock

pub mod locked_list;
pub mod sorted_list;

pub use locked_list::LockedList;
pub use sorted_list::{Iter, SortedList};
