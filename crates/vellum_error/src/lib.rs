//! Error types for the Vellum asset sync toolkit.
//!
//! This crate provides the foundation error types used throughout the Vellum workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Errors local to a single media file ([`UploadError`], a [`StorageError`] raised while
//! hashing) are caught by the sync engine. Everything else propagates to the caller.
//!
//! # Examples
//!
//! ```
//! use vellum_error::{ConfigError, VellumResult};
//!
//! fn space_id() -> VellumResult<String> {
//!     Err(ConfigError::new("STORYBLOK_SPACE_ID is not set"))?
//! }
//!
//! match space_id() {
//!     Ok(id) => println!("Space: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod json;
mod registry;
mod remote;
mod storage;
mod upload;
mod error;

pub use config::ConfigError;
pub use json::JsonError;
pub use registry::{RegistryError, RegistryErrorKind};
pub use remote::{RemoteError, RemoteErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use upload::{UploadError, UploadStep};
pub use error::{VellumError, VellumErrorKind, VellumResult};
