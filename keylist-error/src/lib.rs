pub mod ext;
pub mod macros;
pub mod status_code;
pub mod types;

// Publicly re-export all error types from the submodules to simplify access
// from external code.
pub use ext::*;
pub use status_code::*;
pub use types::*;
