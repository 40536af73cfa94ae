//! # edshim-core - Core Domain Types
//!
//! Foundation crate for the editor launch forwarding shim. Provides the
//! file-location domain types, position-suffix parsing, error handling,
//! and logging initialization.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Locations (`location`)
//! - [`FileLocation`] - A path with optional line/column, as received from the host
//! - [`ResolvedLocation`] - A canonical absolute path with the position carried through
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum, one variant class per pipeline stage, with
//!   a distinct process exit code per class
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use edshim_core::prelude::*;
//! ```

pub mod error;
pub mod location;
pub mod logging;

/// Prelude for common imports used throughout the shim crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use location::{FileLocation, ResolvedLocation};
