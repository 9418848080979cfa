use serde::Deserialize;

/// Options controlling the character pool of one generation call.
///
/// Each flag defaults to false. When deserializing (ex. from HTTP query
/// parameters), unrecognized keys are ignored rather than rejected.
///
/// # Fields
/// - `symbols`: append the punctuation class to the pool.
/// - `uppercase`: append the uppercase class to the pool a second time.
///   The base pool already contains uppercase letters, so this only
///   increases their sampling weight.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SecretOptions {
	pub symbols: bool,
	pub uppercase: bool,
}
