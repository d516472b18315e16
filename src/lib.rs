//! Ordered list semantics on top of sparse integer-keyed storage.
//!
//! [`OrderedCollection`] keeps its items in a map from `i64` key to item and
//! renumbers the keys whenever the front of the list changes. Empty-input
//! and empty-collection cases are reported with `None`.

/// The collection, key compaction and layout validation.
pub mod collection;
/// Settings loading.
pub mod config;
/// Logging setup (formatting, filters, sinks).
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

pub use collection::{IntoIter, Iter, OrderedCollection, ReindexOrder, Truthy, ValidationError};
pub use crate::config::{CollectionConfig, Settings};
pub use keylist_error::{ErrorExt, ListError, ListResult, StatusCode};
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
