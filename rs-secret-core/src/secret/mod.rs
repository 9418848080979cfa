//! Top-level module for secret string generation.
//!
//! This module provides a character-pool based secret generator, including:
//! - Static character class tables (`charset`)
//! - Generation options (`SecretOptions`)
//! - The generation entry points (`generator`)

/// High-level interface for generating secret strings.
///
/// Exposes length validation, pool-based sampling and the error type
/// returned on invalid requests.
pub mod generator;

/// Generation options (`symbols`, `uppercase`).
///
/// Named boolean flags, each defaulting to false. Deserializable so that
/// callers passing extra unknown keys are tolerated rather than rejected.
pub mod options;

/// Internal character class tables and pool construction.
///
/// Builds the ordered byte pool sampled during generation.
/// This module is not exposed publicly.
mod charset;
