use rand::Rng;

use super::picker::pick_letter;

/// Characters allowed in cookie values without escaping.
pub const COOKIE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Unreserved characters of an RFC 7636 `code_verifier`.
pub const PKCE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~";

/// Shortest `code_verifier` allowed by RFC 7636, section 4.1.
pub const PKCE_MIN_LENGTH: usize = 43;

/// Longest `code_verifier` allowed by RFC 7636, section 4.1.
pub const PKCE_MAX_LENGTH: usize = 128;

/// `length` raw bytes, each uniform over `0..=255`.
///
/// The result is usually not valid UTF-8.
pub fn uniform_byte_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
	(0..length).map(|_| rng.random::<u8>()).collect()
}

/// `length` letters, each picked independently by English frequency.
///
/// No adjacency rule applies; see `HumanFriendly` for that.
pub fn english_frequency_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
	(0..length).map(|_| pick_letter(rng)).collect()
}

/// `length` characters from `[A-Za-z0-9]`.
pub fn cookie_friendly_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
	sample_alphabet(rng, COOKIE_ALPHABET, length)
}

/// A PKCE `code_verifier` made of `[A-Za-z0-9-._~]`.
///
/// `length` is clamped into `[43, 128]` without complaint.
pub fn pkce_code_verifier_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
	let length = pkce_length(length);
	sample_alphabet(rng, PKCE_ALPHABET, length)
}

/// Effective length of a PKCE verifier requested with `length`.
pub fn pkce_length(length: usize) -> usize {
	length.clamp(PKCE_MIN_LENGTH, PKCE_MAX_LENGTH)
}

/// Uniform, independent draws from an ASCII alphabet.
fn sample_alphabet<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
	(0..length)
		.map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
		.collect()
}
