use std::sync::{LazyLock, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Offset added to the time-derived seed.
const TIME_SEED_OFFSET: u64 = 1337;

/// Process-wide randomness provider used by the crate-level helpers.
static SHARED_SOURCE: LazyLock<Mutex<RandomSource>> =
	LazyLock::new(|| Mutex::new(RandomSource::from_time()));

/// Seedable randomness provider consumed by every generator.
///
/// `RandomSource` implements [`RngCore`], so it can be passed anywhere a
/// generator expects `&mut impl Rng`. It is **not** cryptographically secure.
///
/// # Usage
/// - [`RandomSource::from_time`] for everyday, non-reproducible output
/// - [`RandomSource::with_seed`] for reproducible output (tests, replays)
#[derive(Debug, Clone)]
pub struct RandomSource {
	rng: StdRng,
}

impl RandomSource {
	/// Creates a source seeded from the current UTC time.
	pub fn from_time() -> Self {
		Self::with_seed(time_seed())
	}

	/// Creates a source with a fixed seed.
	///
	/// Two sources built from the same seed yield the same sequence.
	pub fn with_seed(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}

	/// Restarts the sequence from `seed`.
	pub fn reseed(&mut self, seed: u64) {
		log::debug!("random source reseeded with {seed}");
		self.rng = StdRng::seed_from_u64(seed);
	}

	/// Restarts the sequence from a time-derived seed.
	pub fn reseed_from_time(&mut self) {
		self.reseed(time_seed());
	}
}

impl Default for RandomSource {
	fn default() -> Self {
		Self::from_time()
	}
}

impl RngCore for RandomSource {
	#[inline]
	fn next_u32(&mut self) -> u32 {
		self.rng.next_u32()
	}

	#[inline]
	fn next_u64(&mut self) -> u64 {
		self.rng.next_u64()
	}

	#[inline]
	fn fill_bytes(&mut self, dst: &mut [u8]) {
		self.rng.fill_bytes(dst)
	}
}

/// Nanoseconds since the Unix epoch, offset by [`TIME_SEED_OFFSET`].
///
/// A clock set before 1970 degrades to the bare offset.
fn time_seed() -> u64 {
	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_nanos() as u64)
		.unwrap_or_default();
	nanos.wrapping_add(TIME_SEED_OFFSET)
}

/// Re-seeds the process-wide source from the current time.
pub fn seed_random_source() {
	with_shared_source(RandomSource::reseed_from_time);
}

/// Runs `f` with exclusive access to the process-wide source.
///
/// The lock is held for the duration of `f`. A poisoned lock is recovered:
/// the source holds no invariant a panicking caller could break.
pub fn with_shared_source<T>(f: impl FnOnce(&mut RandomSource) -> T) -> T {
	let mut source = SHARED_SOURCE
		.lock()
		.unwrap_or_else(|poisoned| poisoned.into_inner());
	f(&mut source)
}
