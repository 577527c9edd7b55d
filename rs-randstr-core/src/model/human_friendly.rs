use rand::Rng;

use super::alphabet::{CharacterClass, EnglishAlphabet, LetterSource, PlainAlphabet};

/// Vowel distribution at the start of a run: vowels and consonants alternate.
const ALTERNATING: usize = 2;

/// Vowel distribution after a collision: every position is vowel-due.
const VOWEL_HEAVY: usize = 1;

/// Out of 100 non-vowel positions, how many draw a rare letter.
const RARE_LETTER_PER_CENT: u32 = 1;

/// Generator of pronounceable strings.
///
/// Positions alternate between vowels and consonants, with a rare-letter
/// draw replacing a consonant about once in a hundred. A drawn character is
/// rejected and redrawn when it equals either of the two previous characters.
///
/// ## Algorithm (per position `i`)
/// 1. Vowel-due iff `(i + vowel_offset) % vowel_distribution == 0`
/// 2. Draw a vowel, a consonant (99%) or a rare letter (1%)
/// 3. Same as `output[i-1]`: switch to vowel-heavy distribution, redraw
/// 4. Same as `output[i-2]`: redraw
///
/// Redraws are not capped. Each alphabet has enough letters per class for
/// the failure probability to shrink geometrically.
///
/// # Example
/// ```
/// use rs_randstr_core::model::human_friendly::HumanFriendly;
/// use rs_randstr_core::source::RandomSource;
///
/// let mut rng = RandomSource::with_seed(1);
/// let word = HumanFriendly::plain().generate(&mut rng, 7);
/// assert_eq!(word.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFriendly<A> {
	alphabet: A,
}

impl HumanFriendly<PlainAlphabet> {
	/// Uniform draws within fixed vowel/consonant/rare sets.
	pub fn plain() -> Self {
		Self::new(PlainAlphabet)
	}
}

impl HumanFriendly<EnglishAlphabet> {
	/// Draws weighted by English letter frequency.
	pub fn english() -> Self {
		Self::new(EnglishAlphabet)
	}
}

impl<A: LetterSource> HumanFriendly<A> {
	pub fn new(alphabet: A) -> Self {
		Self { alphabet }
	}

	/// Generates a string of exactly `length` characters.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> String {
		let mut state = GenerationState::new(length, rng.random_range(0..2));

		while state.position() < length {
			let class = state.expected_class(rng);
			let letter = self.alphabet.draw(class, rng);

			if state.back(1) == Some(letter) {
				log::trace!("'{letter}' repeats at {}, switching to vowel-heavy", state.position());
				state.use_more_vowels();
				continue;
			}
			if state.back(2) == Some(letter) {
				log::trace!("'{letter}' would make a triple at {}", state.position());
				continue;
			}

			state.commit(letter);
		}

		state.into_string()
	}
}

/// Mutable state of a single generation run.
///
/// Never shared between runs.
#[derive(Debug)]
struct GenerationState {
	output: Vec<char>,
	vowel_offset: usize,
	vowel_distribution: usize,
}

impl GenerationState {
	fn new(length: usize, vowel_offset: usize) -> Self {
		Self {
			output: Vec::with_capacity(length),
			vowel_offset,
			vowel_distribution: ALTERNATING,
		}
	}

	/// Index of the position being filled.
	fn position(&self) -> usize {
		self.output.len()
	}

	/// Character `distance` positions before the current one.
	fn back(&self, distance: usize) -> Option<char> {
		let index = self.position().checked_sub(distance)?;
		self.output.get(index).copied()
	}

	/// Class to draw at the current position.
	///
	/// Consumes one random draw on non-vowel positions.
	fn expected_class<R: Rng + ?Sized>(&self, rng: &mut R) -> CharacterClass {
		if (self.position() + self.vowel_offset) % self.vowel_distribution == 0 {
			CharacterClass::Vowel
		} else if rng.random_range(0..100) >= RARE_LETTER_PER_CENT {
			CharacterClass::Consonant
		} else {
			CharacterClass::RareLetter
		}
	}

	/// Permanent for the rest of the run.
	fn use_more_vowels(&mut self) {
		self.vowel_distribution = VOWEL_HEAVY;
	}

	fn commit(&mut self, letter: char) {
		self.output.push(letter);
	}

	fn into_string(self) -> String {
		self.output.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::alphabet::{PLAIN_CONSONANTS, PLAIN_RARE_LETTERS, PLAIN_VOWELS};
	use crate::source::RandomSource;
	use std::cell::{Cell, RefCell};

	fn assert_no_repeats(word: &str) {
		let chars: Vec<char> = word.chars().collect();
		for i in 1..chars.len() {
			assert_ne!(chars[i], chars[i - 1], "adjacent repeat at {i} in {word}");
		}
		for i in 2..chars.len() {
			assert_ne!(chars[i], chars[i - 2], "skip-one repeat at {i} in {word}");
		}
	}

	#[test]
	fn exact_length() {
		let mut rng = RandomSource::with_seed(0);
		for length in [0, 1, 2, 3, 7, 20, 257] {
			assert_eq!(HumanFriendly::plain().generate(&mut rng, length).chars().count(), length);
			assert_eq!(HumanFriendly::english().generate(&mut rng, length).chars().count(), length);
		}
	}

	#[test]
	fn plain_never_repeats() {
		for seed in 0..200 {
			let mut rng = RandomSource::with_seed(seed);
			assert_no_repeats(&HumanFriendly::plain().generate(&mut rng, 64));
		}
	}

	#[test]
	fn english_never_repeats() {
		for seed in 0..200 {
			let mut rng = RandomSource::with_seed(seed);
			assert_no_repeats(&HumanFriendly::english().generate(&mut rng, 64));
		}
	}

	#[test]
	fn plain_uses_known_letters_only() {
		let mut rng = RandomSource::with_seed(99);
		let word = HumanFriendly::plain().generate(&mut rng, 2000);
		for c in word.bytes() {
			assert!(
				PLAIN_VOWELS.contains(&c) || PLAIN_CONSONANTS.contains(&c) || PLAIN_RARE_LETTERS.contains(&c),
				"unexpected {}",
				c as char
			);
		}
	}

	#[test]
	fn same_seed_same_word() {
		let a = HumanFriendly::english().generate(&mut RandomSource::with_seed(314), 40);
		let b = HumanFriendly::english().generate(&mut RandomSource::with_seed(314), 40);
		assert_eq!(a, b);
	}

	#[test]
	fn vowel_heavy_after_collision() {
		let mut state = GenerationState::new(4, 0);
		let mut rng = RandomSource::with_seed(8);
		assert_eq!(state.expected_class(&mut rng), CharacterClass::Vowel);
		state.commit('a');
		assert_ne!(state.expected_class(&mut rng), CharacterClass::Vowel);

		state.use_more_vowels();
		for _ in 0..3 {
			assert_eq!(state.expected_class(&mut rng), CharacterClass::Vowel);
			state.commit('e');
		}
	}

	#[test]
	fn back_looks_behind_current_position() {
		let mut state = GenerationState::new(3, 0);
		assert_eq!(state.back(1), None);
		state.commit('r');
		state.commit('a');
		assert_eq!(state.back(1), Some('a'));
		assert_eq!(state.back(2), Some('r'));
		assert_eq!(state.back(3), None);
	}

	/// Two or three letters per class, so most draws collide.
	struct TinyAlphabet {
		calls: std::cell::Cell<usize>,
	}

	impl LetterSource for TinyAlphabet {
		fn draw<R: Rng + ?Sized>(&self, class: CharacterClass, rng: &mut R) -> char {
			self.calls.set(self.calls.get() + 1);
			let set: &[u8] = match class {
				CharacterClass::Vowel => b"aei",
				_ => b"kt",
			};
			set[rng.random_range(0..set.len())] as char
		}
	}

	#[test]
	fn retries_until_constraints_hold() {
		let source = TinyAlphabet { calls: std::cell::Cell::new(0) };
		let generator = HumanFriendly::new(source);
		let mut rng = RandomSource::with_seed(12);
		let word = generator.generate(&mut rng, 30);
		assert_eq!(word.len(), 30);
		assert_no_repeats(&word);
		assert!(generator.alphabet.calls.get() > 30);
	}

	/// Plays `b`, `b`, then cycles `a e i`, whatever the class.
	///
	/// The second `b` repeats the first one.
	#[derive(Default)]
	struct ScriptedCollision {
		classes: RefCell<Vec<CharacterClass>>,
	}

	impl LetterSource for ScriptedCollision {
		fn draw<R: Rng + ?Sized>(&self, class: CharacterClass, _rng: &mut R) -> char {
			let mut classes = self.classes.borrow_mut();
			classes.push(class);
			match classes.len() {
				1 | 2 => 'b',
				n => b"aei"[(n - 3) % 3] as char,
			}
		}
	}

	#[test]
	fn collision_makes_generate_vowel_heavy() {
		let generator = HumanFriendly::new(ScriptedCollision::default());
		let mut rng = RandomSource::with_seed(21);
		let word = generator.generate(&mut rng, 10);
		assert_eq!(word, "baeiaeiaei");

		let classes = generator.alphabet.classes.borrow();
		// One rejected draw at position 1, then one draw per position.
		assert_eq!(classes.len(), 11);
		for (i, class) in classes.iter().enumerate().skip(2) {
			assert_eq!(*class, CharacterClass::Vowel, "draw {i}");
		}
	}

	/// Disjoint classes cycling through three letters each, so no draw is
	/// ever rejected while vowels and consonants alternate.
	#[derive(Default)]
	struct ClassRecorder {
		vowels: Cell<usize>,
		others: Cell<usize>,
		rare: Cell<usize>,
	}

	impl LetterSource for ClassRecorder {
		fn draw<R: Rng + ?Sized>(&self, class: CharacterClass, _rng: &mut R) -> char {
			let (counter, set): (&Cell<usize>, &[u8]) = match class {
				CharacterClass::Vowel => (&self.vowels, b"aei"),
				_ => (&self.others, b"kst"),
			};
			if class == CharacterClass::RareLetter {
				self.rare.set(self.rare.get() + 1);
			}
			let n = counter.get();
			counter.set(n + 1);
			set[n % set.len()] as char
		}
	}

	#[test]
	fn about_one_consonant_in_a_hundred_is_rare() {
		const LENGTH: usize = 200_000;
		let generator = HumanFriendly::new(ClassRecorder::default());
		let mut rng = RandomSource::with_seed(2718);
		let word = generator.generate(&mut rng, LENGTH);
		assert_eq!(word.len(), LENGTH);

		let recorder = &generator.alphabet;
		// Nothing collides, so there is exactly one draw per position.
		assert_eq!(recorder.vowels.get() + recorder.others.get(), LENGTH);
		assert_eq!(recorder.vowels.get(), LENGTH / 2);

		let ratio = recorder.rare.get() as f64 / recorder.others.get() as f64;
		assert!((0.007..0.013).contains(&ratio), "rare ratio {ratio:.4}");
	}
}
