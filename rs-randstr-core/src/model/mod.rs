//! Character sampling and string generation.
//!
//! This module provides:
//! - English letter frequency tables (`FrequencyTable`)
//! - Weighted single-letter picks over those tables
//! - Per-class letter sources for the constrained generator
//! - The pronounceable string generator (`HumanFriendly`)
//! - Unconstrained uniform generators (bytes, cookies, PKCE)

/// Static letter-weight tables and the weighted draw primitive.
pub mod frequency_table;

/// Weighted pick entry points: any letter, vowel or consonant.
pub mod picker;

/// Character classes and the per-class draw strategies
/// (fixed small alphabet or English frequency).
pub mod alphabet;

/// Vowel/consonant alternating generator with no-repeat rules.
///
/// Redraws a position until it differs from the two previous characters.
pub mod human_friendly;

/// Independent uniform draws from fixed alphabets.
pub mod uniform;

/// `StringKind`, a serializable selector over every generator.
pub mod kind;
