use std::fmt;
use thiserror::Error;

// =============================================================================
// Error types
// =============================================================================

/// Errors raised by the list's fallible operations.
///
/// Every mutating operation validates its preconditions before touching the
/// chain, so a returned error means the list is exactly as it was before the
/// call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("invalid position {position}: valid range is {min}..={max}")]
    OutOfRange {
        position: usize,
        min: usize,
        max: usize,
    },

    #[error("cannot delete from an empty list")]
    EmptyList,

    #[error("value {value} not found in the list")]
    NotFound { value: i32 },
}

// =============================================================================
// Node and list structure
// =============================================================================

/// One element of the chain. The `next` box is the sole owner of the rest of
/// the list, so the tail is simply the node whose `next` is `None`.
#[derive(Debug)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

/// A singly linked list of integers with positional and value-based
/// insert/delete.
///
/// `len` is a cached count and always equals the number of nodes reachable
/// from `head`; `head` is `None` exactly when `len` is 0. No tail pointer is
/// kept, so appending walks the whole chain.
#[derive(Debug, Default)]
pub struct LinkedList {
    head: Option<Box<Node>>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Number of elements currently in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Link a new node in front of the current head. O(1), always succeeds.
    pub fn insert_front(&mut self, value: i32) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Append a new node after the current tail, or as the head if the list
    /// is empty. O(n): walks to the end of the chain.
    pub fn insert_back(&mut self, value: i32) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Splice a new node in at `position` (0-indexed). Position 0 is the
    /// front, position `len()` is the back; anything past that is rejected
    /// before any node is allocated.
    pub fn insert_at(&mut self, value: i32, position: usize) -> Result<(), ListError> {
        if position > self.len {
            return Err(ListError::OutOfRange {
                position,
                min: 0,
                max: self.len,
            });
        }

        if position == 0 {
            self.insert_front(value);
            return Ok(());
        }
        if position == self.len {
            self.insert_back(value);
            return Ok(());
        }

        // Walk to the link slot at `position`; the bound check above
        // guarantees every hop lands on a live node.
        let mut cursor = &mut self.head;
        for _ in 0..position {
            cursor = &mut cursor.as_mut().expect("position bounded by len").next;
        }
        let node = Box::new(Node {
            value,
            next: cursor.take(),
        });
        *cursor = Some(node);
        self.len += 1;
        Ok(())
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Unlink and free the node at `position`, returning its value.
    ///
    /// An empty list always reports [`ListError::EmptyList`], never
    /// `OutOfRange`.
    pub fn delete_at(&mut self, position: usize) -> Result<i32, ListError> {
        if self.head.is_none() {
            return Err(ListError::EmptyList);
        }
        if position >= self.len {
            return Err(ListError::OutOfRange {
                position,
                min: 0,
                max: self.len - 1,
            });
        }

        let mut cursor = &mut self.head;
        for _ in 0..position {
            cursor = &mut cursor.as_mut().expect("position bounded by len").next;
        }
        let node = cursor.take().expect("position bounded by len");
        *cursor = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Remove the first node (head-to-tail order) whose payload equals
    /// `value`. A miss leaves the list untouched.
    pub fn delete_by_value(&mut self, value: i32) -> Result<(), ListError> {
        if self.head.is_none() {
            return Err(ListError::EmptyList);
        }

        let mut cursor = &mut self.head;
        while cursor.as_ref().map_or(false, |node| node.value != value) {
            cursor = &mut cursor.as_mut().expect("checked by loop condition").next;
        }
        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                self.len -= 1;
                Ok(())
            }
            None => Err(ListError::NotFound { value }),
        }
    }

    /// Release every node and reset the count. Iterative, so deep chains
    /// never recurse through drop glue.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Snapshot of the payloads in head-to-tail order.
    pub fn values(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(node.value);
            cursor = node.next.as_deref();
        }
        out
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.head.is_none() {
            return write!(f, "List is empty.");
        }
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            write!(f, "{} -> ", node.value)?;
            cursor = node.next.as_deref();
        }
        write!(f, "None")
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> LinkedList {
        let mut list = LinkedList::new();
        for &v in values {
            list.insert_back(v);
        }
        list
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.values(), Vec::<i32>::new());
    }

    #[test]
    fn test_insert_front_prepends() {
        let mut list = LinkedList::new();
        list.insert_front(3);
        list.insert_front(2);
        list.insert_front(1);
        assert_eq!(list.values(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_insert_back_appends() {
        let list = build(&[10, 20, 30]);
        assert_eq!(list.values(), vec![10, 20, 30]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_insert_at_zero_matches_insert_front() {
        let mut by_position = build(&[1, 2]);
        let mut by_front = build(&[1, 2]);
        by_position.insert_at(9, 0).unwrap();
        by_front.insert_front(9);
        assert_eq!(by_position.values(), by_front.values());
    }

    #[test]
    fn test_insert_at_len_matches_insert_back() {
        let mut by_position = build(&[1, 2]);
        let mut by_back = build(&[1, 2]);
        let end = by_position.len();
        by_position.insert_at(9, end).unwrap();
        by_back.insert_back(9);
        assert_eq!(by_position.values(), by_back.values());
    }

    #[test]
    fn test_insert_at_middle_splices() {
        let mut list = build(&[5, 10, 20, 30]);
        list.insert_at(15, 2).unwrap();
        assert_eq!(list.values(), vec![5, 10, 15, 20, 30]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_insert_at_out_of_range_reports_bounds() {
        let mut list = build(&[100]);
        let err = list.insert_at(200, 5).unwrap_err();
        assert_eq!(
            err,
            ListError::OutOfRange {
                position: 5,
                min: 0,
                max: 1,
            }
        );
        assert!(err.to_string().contains("0..=1"));
        assert_eq!(list.values(), vec![100]);
    }

    #[test]
    fn test_delete_at_head_and_middle() {
        let mut list = build(&[5, 10, 15, 20, 30]);
        assert_eq!(list.delete_at(3), Ok(20));
        assert_eq!(list.values(), vec![5, 10, 15, 30]);
        assert_eq!(list.delete_at(0), Ok(5));
        assert_eq!(list.values(), vec![10, 15, 30]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_at_empty_reports_empty_not_out_of_range() {
        let mut list = LinkedList::new();
        assert_eq!(list.delete_at(0), Err(ListError::EmptyList));
        assert_eq!(list.delete_at(7), Err(ListError::EmptyList));
    }

    #[test]
    fn test_delete_at_out_of_range_reports_bounds() {
        let mut list = build(&[1, 2, 3]);
        let err = list.delete_at(3).unwrap_err();
        assert_eq!(
            err,
            ListError::OutOfRange {
                position: 3,
                min: 0,
                max: 2,
            }
        );
        assert_eq!(list.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_then_reinsert_restores_sequence() {
        let mut list = build(&[5, 10, 15, 20, 30]);
        let removed = list.delete_at(3).unwrap();
        list.insert_at(removed, 3).unwrap();
        assert_eq!(list.values(), vec![5, 10, 15, 20, 30]);
    }

    #[test]
    fn test_delete_by_value_removes_first_occurrence_only() {
        let mut list = build(&[7, 3, 7, 9, 7]);
        list.delete_by_value(7).unwrap();
        assert_eq!(list.values(), vec![3, 7, 9, 7]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_delete_by_value_head_match() {
        let mut list = build(&[1, 2, 3]);
        list.delete_by_value(1).unwrap();
        assert_eq!(list.values(), vec![2, 3]);
    }

    #[test]
    fn test_delete_by_value_missing_leaves_list_unchanged() {
        let mut list = build(&[5, 10, 30]);
        assert_eq!(
            list.delete_by_value(999),
            Err(ListError::NotFound { value: 999 })
        );
        assert_eq!(list.values(), vec![5, 10, 30]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_by_value_empty_list() {
        let mut list = LinkedList::new();
        assert_eq!(list.delete_by_value(1), Err(ListError::EmptyList));
    }

    #[test]
    fn test_len_tracks_net_successful_mutations() {
        let mut list = LinkedList::new();
        list.insert_back(1);
        list.insert_back(2);
        list.insert_front(0);
        list.insert_at(9, 1).unwrap();
        assert!(list.insert_at(9, 99).is_err());
        list.delete_at(0).unwrap();
        assert!(list.delete_by_value(999).is_err());
        list.delete_by_value(9).unwrap();
        // 4 successful inserts, 2 successful deletes
        assert_eq!(list.len(), 2);
        assert_eq!(list.values(), vec![1, 2]);
    }

    #[test]
    fn test_spec_walkthrough_scenario() {
        let mut list = LinkedList::new();
        list.insert_back(10);
        list.insert_back(20);
        list.insert_back(30);
        assert_eq!(list.values(), vec![10, 20, 30]);
        assert_eq!(list.len(), 3);

        list.insert_front(5);
        assert_eq!(list.values(), vec![5, 10, 20, 30]);

        list.insert_at(15, 2).unwrap();
        assert_eq!(list.values(), vec![5, 10, 15, 20, 30]);

        assert_eq!(list.delete_at(3), Ok(20));
        assert_eq!(list.values(), vec![5, 10, 15, 30]);

        list.delete_by_value(15).unwrap();
        assert_eq!(list.values(), vec![5, 10, 30]);
    }

    #[test]
    fn test_clear_resets_and_list_is_reusable() {
        let mut list = build(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.insert_back(4);
        assert_eq!(list.values(), vec![4]);
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.insert_front(i);
        }
        drop(list);
    }

    #[test]
    fn test_display_rendering() {
        let mut list = LinkedList::new();
        assert_eq!(list.to_string(), "List is empty.");
        list.insert_back(5);
        list.insert_back(10);
        assert_eq!(list.to_string(), "5 -> 10 -> None");
    }
}
