//! Demo key generation, kept apart from the cipher core.
//!
//! The cipher always takes an explicit key; this module only produces
//! throwaway keys for demos and experiments.

use rand::rng;
use rand::seq::SliceRandom;

/// Produces a 16-hex-character key by shuffling the hex charset.
///
/// Illustrative only: the result is always a permutation of the sixteen
/// hex digits, a vanishingly small corner of the 64-bit key space, and
/// carries no cryptographic-strength guarantee.
pub fn generate_demo_key() -> String {
    let mut digits: Vec<char> = ('0'..='9').chain('A'..='F').collect();
    digits.shuffle(&mut rng());
    digits.into_iter().collect()
}
