use rand::Rng;
use thiserror::Error;

use crate::secret::charset;
use crate::secret::options::SecretOptions;

/// Length used when the caller does not specify one.
pub const DEFAULT_LENGTH: i64 = 32;

/// Errors returned by secret generation.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretError {
	/// The requested length is negative.
	#[error("secret length must be non-negative, got {length}")]
	InvalidLength { length: i64 },
}

/// Generates a secret string of `length` characters.
///
/// The character pool is rebuilt on every call from the base
/// alphanumeric blocks plus the extensions enabled in `options`.
/// Each character is chosen independently and uniformly over pool
/// positions (not over distinct characters, which matters when the
/// `uppercase` option duplicates a block).
///
/// Sampling uses `rand::rng()`, a thread-local ChaCha-based generator
/// seeded from the operating system. It is cryptographically secure,
/// so the output is suitable for tokens, passwords and API keys.
/// Two calls share no seed state and are statistically independent.
///
/// # Parameters
/// - `length`: Number of characters to produce. Zero yields an empty
///   string.
/// - `options`: Pool extensions, see [`SecretOptions`].
///
/// # Errors
/// Returns [`SecretError::InvalidLength`] if `length` is negative.
pub fn generate_secret(length: i64, options: &SecretOptions) -> Result<String, SecretError> {
	if length < 0 {
		return Err(SecretError::InvalidLength { length });
	}

	let pool = charset::build_pool(options);
	let mut rng = rand::rng();

	let secret = (0..length)
		.map(|_| {
			let index = rng.random_range(0..pool.len());
			pool[index] as char
		})
		.collect();

	Ok(secret)
}

/// Generates a secret with the default length (32) and no pool
/// extensions, matching the most common call.
pub fn generate_secret_default() -> String {
	// The default length is non-negative, generation cannot fail.
	generate_secret(DEFAULT_LENGTH, &SecretOptions::default()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn negative_length_is_rejected() {
		let result = generate_secret(-1, &SecretOptions::default());
		assert_eq!(result, Err(SecretError::InvalidLength { length: -1 }));
	}

	#[test]
	fn zero_length_yields_an_empty_string() {
		let secret = generate_secret(0, &SecretOptions::default()).unwrap();
		assert_eq!(secret, "");
	}

	#[test]
	fn default_call_yields_32_characters() {
		assert_eq!(generate_secret_default().len(), 32);
	}

	#[test]
	fn invalid_length_error_names_the_length() {
		let error = SecretError::InvalidLength { length: -7 };
		assert_eq!(error.to_string(), "secret length must be non-negative, got -7");
	}
}
