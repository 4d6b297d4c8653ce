//! Device-local key-value storage for BrewDash.
//!
//! Provides a simple, ergonomic API for persisting small pieces of app
//! state (auth flags, the user profile) with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use brew_storage::Storage;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct DeviceFlags {
//!     age_verified: bool,
//! }
//!
//! let storage = Storage::open("brewdash.json")?;
//!
//! // Store a value
//! storage.set("flags:device", &flags)?;
//!
//! // Retrieve a value
//! let flags: Option<DeviceFlags> = storage.get("flags:device")?;
//!
//! // Delete a value
//! storage.delete("flags:device")?;
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::Storage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Storage, StorageError};
}
