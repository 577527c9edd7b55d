//! Random string generation library.
//!
//! This crate provides several ways to draw random strings:
//! - Raw uniform bytes
//! - Letters weighted by English frequency
//! - Pronounceable ("human-friendly") strings that alternate vowels and
//!   consonants and never repeat a character within two positions
//! - Cookie-safe and PKCE `code_verifier` strings
//!
//! The functions at the crate root draw from a process-wide
//! [`source::RandomSource`]. Every generator also has a variant in
//! [`model`] that takes any `rand::Rng`, for reproducible output.
//!
//! Nothing here is suitable for secrets.

/// Letter tables, weighted picks and string generators.
pub mod model;

/// Seedable randomness provider and the process-wide instance.
pub mod source;

use model::human_friendly::HumanFriendly;
use model::{picker, uniform};

pub use source::seed_random_source;

/// `length` raw bytes. See [`uniform::uniform_byte_string`].
pub fn uniform_byte_string(length: usize) -> Vec<u8> {
	source::with_shared_source(|rng| uniform::uniform_byte_string(rng, length))
}

/// Letters picked independently by English frequency.
pub fn english_frequency_string(length: usize) -> String {
	source::with_shared_source(|rng| uniform::english_frequency_string(rng, length))
}

/// Pronounceable string over a small fixed alphabet.
///
/// Example output for length 7: `rabunor`.
pub fn human_friendly_string(length: usize) -> String {
	source::with_shared_source(|rng| HumanFriendly::plain().generate(rng, length))
}

/// Pronounceable string weighted by English letter frequency.
pub fn human_friendly_english_string(length: usize) -> String {
	source::with_shared_source(|rng| HumanFriendly::english().generate(rng, length))
}

/// `[A-Za-z0-9]` string, safe in cookie values.
pub fn cookie_friendly_string(length: usize) -> String {
	source::with_shared_source(|rng| uniform::cookie_friendly_string(rng, length))
}

/// RFC 7636 `code_verifier`; `length` is clamped into `[43, 128]`.
pub fn pkce_code_verifier_string(length: usize) -> String {
	source::with_shared_source(|rng| uniform::pkce_code_verifier_string(rng, length))
}

/// Letter picked by English frequency.
pub fn pick_letter() -> char {
	source::with_shared_source(|rng| picker::pick_letter(rng))
}

/// Vowel picked by English frequency.
pub fn pick_vowel() -> char {
	source::with_shared_source(|rng| picker::pick_vowel(rng))
}

/// Consonant picked by English frequency.
pub fn pick_consonant() -> char {
	source::with_shared_source(|rng| picker::pick_consonant(rng))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shared_helpers_honour_length() {
		seed_random_source();
		assert_eq!(uniform_byte_string(10).len(), 10);
		assert_eq!(english_frequency_string(20).len(), 20);
		assert_eq!(human_friendly_string(7).len(), 7);
		assert_eq!(human_friendly_english_string(20).len(), 20);
		assert_eq!(cookie_friendly_string(20).len(), 20);
		assert_eq!(pkce_code_verifier_string(10).len(), 43);
		assert_eq!(pkce_code_verifier_string(200).len(), 128);
	}

	#[test]
	fn shared_picks_are_letters() {
		assert!(pick_letter().is_ascii_lowercase());
		assert!("aeiou".contains(pick_vowel()));
		assert!(!"aeiou".contains(pick_consonant()));
	}
}
