//! Core data structures for the tourbook project.
//!
//! This crate provides:
//! - [`OrderedTree`]: an unbalanced binary search tree keyed by a caller-selected
//!   [`KeyOrder`], with sideways traversal, averaging and drain-to-vector.
//! - [`Tourist`] with the [`BySurname`] and [`ByPassportCode`] orderings and field validation.
//! - [`Prompter`] and the [`render`] helpers used by the interactive registry binary.
//!
//! ```
//! use tourbook::{ByPassportCode, BySurname, OrderedTree, Tourist};
//!
//! let mut by_name = OrderedTree::new(BySurname);
//! by_name.insert(Tourist::new("Smith", 1, 5).unwrap());
//! by_name.insert(Tourist::new("Doe", 2, 3).unwrap());
//!
//! let mut by_code = OrderedTree::new(ByPassportCode);
//! by_code.extend(by_name.drain_and_clear());
//! assert!(by_name.is_empty());
//! assert_eq!(by_code.len(), 2);
//! ```

pub mod input;
pub mod ordered_tree;
pub mod render;
pub mod tourist;

pub use input::Prompter;
pub use ordered_tree::{ByKey, Iter, KeyOrder, OrderedTree, Traverse};
pub use tourist::{
    parse_days, parse_passport_code, parse_surname, ByPassportCode, BySurname, RecordError,
    RecordResult, Tourist,
};
