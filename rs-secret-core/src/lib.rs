//! Random secret string generation library.
//!
//! This crate generates secret strings (tokens, passwords, API keys) of
//! configurable length, including:
//! - A fixed alphanumeric base character pool
//! - Optional punctuation and uppercase-weighting extensions
//! - Uniform sampling over pool positions, using a cryptographically
//!   secure randomness source
//!
//! Only the high-level API is exposed publicly. The character class
//! tables and pool construction are kept internal to ensure consistency
//! and prevent misuse.

/// Secret generation: options, character pool and sampling.
///
/// This module exposes the high-level generation interface while keeping
/// pool construction private.
pub mod secret;
