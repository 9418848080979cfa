use rs_secret_core::secret::generator::{self, DEFAULT_LENGTH};
use rs_secret_core::secret::options::SecretOptions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	const STR_WIDTH: usize = 12;

	// 1. Default behavior: alphanumeric pool (a-z, A-Z, 0-9)
	let secret = generator::generate_secret(DEFAULT_LENGTH, &SecretOptions::default())?;
	println!("{:<width$} {}", "Default:", secret, width = STR_WIDTH);

	// 2. With symbols: punctuation added to the pool
	let options = SecretOptions { symbols: true, ..SecretOptions::default() };
	println!("{:<width$} {}", "Symbols:", generator::generate_secret(DEFAULT_LENGTH, &options)?, width = STR_WIDTH);

	// 3. With uppercase: the uppercase block is appended a second time,
	// uppercase letters become more likely without changing the legal set
	let options = SecretOptions { uppercase: true, ..SecretOptions::default() };
	println!("{:<width$} {}", "Uppercase:", generator::generate_secret(DEFAULT_LENGTH, &options)?, width = STR_WIDTH);

	// 4. With both
	let options = SecretOptions { symbols: true, uppercase: true };
	println!("{:<width$} {}", "Both:", generator::generate_secret(DEFAULT_LENGTH, &options)?, width = STR_WIDTH);

	// A zero length yields an empty secret
	let empty = generator::generate_secret(0, &SecretOptions::default())?;
	println!("{:<width$} {:?}", "Empty:", empty, width = STR_WIDTH);

	// Attempting to generate with a negative length
	match generator::generate_secret(-1, &SecretOptions::default()) {
		Ok(_) => println!("Should not happen"),
		Err(e) => println!("Length -1 is invalid: {e}"),
	}

	Ok(())
}
