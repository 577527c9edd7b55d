use rand::Rng;

use super::picker::{pick_consonant, pick_letter, pick_vowel};

/// Vowels accepted by mail clients and browsers alike.
pub const PLAIN_VOWELS: &[u8] = b"aeoiu";

/// Common consonants. The `o` is part of the historical set and is kept.
pub const PLAIN_CONSONANTS: &[u8] = b"bdfgklmnoprstv";

/// Remaining letters of `a..=z`, drawn rarely.
pub const PLAIN_RARE_LETTERS: &[u8] = b"chjqwxyz";

/// Class of character expected at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
	Vowel,
	Consonant,
	/// Occasional substitute for a consonant.
	RareLetter,
}

/// Per-class draw primitive used by the human-friendly generator.
pub trait LetterSource {
	/// Draws one character of the requested class.
	fn draw<R: Rng + ?Sized>(&self, class: CharacterClass, rng: &mut R) -> char;
}

/// Uniform draws within small fixed alphabets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainAlphabet;

impl LetterSource for PlainAlphabet {
	fn draw<R: Rng + ?Sized>(&self, class: CharacterClass, rng: &mut R) -> char {
		let set = match class {
			CharacterClass::Vowel => PLAIN_VOWELS,
			CharacterClass::Consonant => PLAIN_CONSONANTS,
			CharacterClass::RareLetter => PLAIN_RARE_LETTERS,
		};
		set[rng.random_range(0..set.len())] as char
	}
}

/// Draws weighted by English letter frequency.
///
/// Rare letters come from the full alphabet table, so they may be any letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishAlphabet;

impl LetterSource for EnglishAlphabet {
	fn draw<R: Rng + ?Sized>(&self, class: CharacterClass, rng: &mut R) -> char {
		match class {
			CharacterClass::Vowel => pick_vowel(rng),
			CharacterClass::Consonant => pick_consonant(rng),
			CharacterClass::RareLetter => pick_letter(rng),
		}
	}
}
