use rand::Rng;

use super::frequency_table::{CONSONANTS, LETTERS, VOWELS};

/// Picks a letter from the whole alphabet, weighted by English frequency.
pub fn pick_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
	LETTERS.pick(rng)
}

/// Picks a vowel, weighted by English frequency.
pub fn pick_vowel<R: Rng + ?Sized>(rng: &mut R) -> char {
	VOWELS.pick(rng)
}

/// Picks a consonant, weighted by English frequency.
pub fn pick_consonant<R: Rng + ?Sized>(rng: &mut R) -> char {
	CONSONANTS.pick(rng)
}
