use crate::secret::options::SecretOptions;

/// Lowercase letters, a-z.
pub(crate) const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase letters, A-Z.
pub(crate) const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits, 0-9.
pub(crate) const DIGITS: &[u8] = b"0123456789";

/// The 32 ASCII punctuation characters.
pub(crate) const PUNCTUATION: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Builds the character pool for one generation call.
///
/// The pool always starts with the fixed base blocks, in order:
/// lowercase, uppercase, digits (62 bytes). Extensions are appended
/// after the base:
/// - `symbols` appends the punctuation block.
/// - `uppercase` appends the uppercase block a second time. This adds no
///   new distinct characters; since sampling is uniform over positions,
///   it increases the weight of uppercase letters. Kept as-is, a
///   deduplicated pool would change the output distribution.
///
/// # Invariants
/// - The pool is never empty (the base blocks are always present).
pub(crate) fn build_pool(options: &SecretOptions) -> Vec<u8> {
	let mut pool = Vec::with_capacity(
		LOWERCASE.len() + UPPERCASE.len() * 2 + DIGITS.len() + PUNCTUATION.len(),
	);

	pool.extend_from_slice(LOWERCASE);
	pool.extend_from_slice(UPPERCASE);
	pool.extend_from_slice(DIGITS);

	if options.symbols {
		pool.extend_from_slice(PUNCTUATION);
	}
	if options.uppercase {
		pool.extend_from_slice(UPPERCASE);
	}

	pool
}
