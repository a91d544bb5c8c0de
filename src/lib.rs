//! Sortby – comparator builders for ordering collections of structured records.
//!
//! Sortby centers on one operation: building a comparator function that a
//! generic sort routine (`slice::sort_by`, `Vec::sort_by`) can call pairwise
//! over records. A comparator is assembled from *criteria*, where:
//! * A [`selector::Selector`] specifies how to extract a comparable value
//!   from a record — a field name, a dot-path into nested fields, or an
//!   arbitrary key function.
//! * A [`datatype::SortValue`] is the extracted value, drawn from a closed
//!   set of variants (null, boolean, number, text, instant) so comparison
//!   rules are exhaustive.
//! * A [`comparator::Criterion`] pairs a selector with a [`datatype::Order`]
//!   (ascending by default) and acts as one tier of a multi-key sort.
//!
//! The crate never sorts anything itself; it produces pure, reentrant
//! closures for the host sort facility and guarantees that resolution never
//! fails — missing or unreachable paths become [`datatype::SortValue::Null`],
//! which orders before every present value.
//!
//! ## Modules
//! * [`datatype`] – The comparable-value variants and the [`datatype::Order`]
//!   direction enumeration.
//! * [`selector`] – The [`selector::Record`] addressing trait (provided for
//!   [`serde_json::Value`], open to native structs) and the selector shapes.
//! * [`comparator`] – The [`comparator::compare`] value comparator, the
//!   `by` builder family and textual criteria parsing.
//! * [`error`] – Error type for the one fallible surface, the textual
//!   criteria parser.
//!
//! ## Ordering Rules
//! Values compare under a fixed precedence: strict equality, absence (nulls
//! first), numeric, textual (case-folded before code points), temporal, then
//! a relational fallback. Descending criteria reverse the complete result,
//! so absent values move to the end. See [`comparator::compare`].
//!
//! ## Quick Start
//! ```
//! use serde_json::json;
//! use sortby::comparator::{by_criteria, Criterion};
//! let mut rows = vec![
//!     json!({"name": "Bob", "age": 25}),
//!     json!({"name": "Charlie", "age": 30}),
//!     json!({"name": "Alice", "age": 30}),
//! ];
//! rows.sort_by(by_criteria([Criterion::desc("age"), Criterion::asc("name")]));
//! let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap().to_string()).collect();
//! assert_eq!(names, ["Alice", "Charlie", "Bob"]);
//! ```

pub mod comparator;
pub mod datatype;
pub mod error;
pub mod selector;
