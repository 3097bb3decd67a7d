//! Utility functions and helpers.
//!
//! - [`hash`]: content fingerprints (legacy rolling hash and xxHash3)
//! - [`paths`]: output path resolution for diff artifacts

/// Content fingerprinting
pub mod hash;
/// Path manipulation helpers
pub mod paths;

pub use hash::{Fingerprint, content_fingerprint, legacy_fingerprint};
