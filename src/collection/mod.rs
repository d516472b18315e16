//! Ordered collection over sparse integer-keyed storage.
//!
//! # Modules
//!
//! - `ordered`: the collection and its operations.
//! - `reindex`: key ordering and compaction.
//! - `safety`: layout validation.
//! - `truthy`: loose truthiness for the legacy front-removal check.
//! - `iter`: borrowing and owning iterators.

pub mod iter;
pub mod ordered;
pub mod reindex;
pub mod safety;
pub mod truthy;

pub use iter::{IntoIter, Iter};
pub use ordered::OrderedCollection;
pub use reindex::ReindexOrder;
pub use safety::ValidationError;
pub use truthy::Truthy;
