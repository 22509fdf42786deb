//! # Linked List & Recursion Lab
//!
//! Two classic data-structures-course exercises, each with a narrated demo
//! binary:
//!
//! 1. **Singly Linked List** - positional and value-based insert/delete over
//!    an owned chain of nodes, with explicit error values for out-of-range
//!    positions, empty-list deletes, and missing values.
//! 2. **Recursive Algorithms** - factorial, Fibonacci, string reversal, and
//!    binary search, each reduced to its base and recursive cases.
//!
//! ## Running the demos
//!
//! ```bash
//! cargo run --bin linked_list_demo
//! cargo run --bin recursion_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the list's error enum
//! - `colored` - Terminal colors for the demo narration

pub mod linked_list;
pub mod recursion;

pub use linked_list::{LinkedList, ListError};
