use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::human_friendly::HumanFriendly;
use super::uniform;

/// Every kind of string this crate can produce.
///
/// Serialized in `snake_case` (`"human_friendly"`, `"pkce_code_verifier"`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StringKind {
	/// Raw bytes, uniform over `0..=255`.
	Bytes,
	EnglishFrequency,
	HumanFriendly,
	HumanFriendlyEnglish,
	CookieFriendly,
	PkceCodeVerifier,
}

impl StringKind {
	pub const ALL: [StringKind; 6] = [
		StringKind::Bytes,
		StringKind::EnglishFrequency,
		StringKind::HumanFriendly,
		StringKind::HumanFriendlyEnglish,
		StringKind::CookieFriendly,
		StringKind::PkceCodeVerifier,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			StringKind::Bytes => "bytes",
			StringKind::EnglishFrequency => "english_frequency",
			StringKind::HumanFriendly => "human_friendly",
			StringKind::HumanFriendlyEnglish => "human_friendly_english",
			StringKind::CookieFriendly => "cookie_friendly",
			StringKind::PkceCodeVerifier => "pkce_code_verifier",
		}
	}

	/// Whether the output is always valid UTF-8.
	pub fn is_text(&self) -> bool {
		*self != StringKind::Bytes
	}

	/// Generates one value of this kind.
	///
	/// Text kinds return their UTF-8 bytes.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Vec<u8> {
		match self {
			StringKind::Bytes => uniform::uniform_byte_string(rng, length),
			StringKind::EnglishFrequency => uniform::english_frequency_string(rng, length).into_bytes(),
			StringKind::HumanFriendly => HumanFriendly::plain().generate(rng, length).into_bytes(),
			StringKind::HumanFriendlyEnglish => HumanFriendly::english().generate(rng, length).into_bytes(),
			StringKind::CookieFriendly => uniform::cookie_friendly_string(rng, length).into_bytes(),
			StringKind::PkceCodeVerifier => uniform::pkce_code_verifier_string(rng, length).into_bytes(),
		}
	}
}

impl fmt::Display for StringKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for StringKind {
	type Err = String;

	/// Case-insensitive; `-` is accepted in place of `_`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
		StringKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == normalized)
			.ok_or_else(|| format!("Unknown string kind: {s}"))
	}
}
