//! Seed hashing for reproducible card layouts.
//!
//! A card is identified by arbitrary text (a player name or a minted card
//! id). The text is folded into a 32-bit FNV-1a hash, which seeds the
//! deterministic card stream - so the same name always deals the same card.

/// FNV-1a 32-bit offset basis.
const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a card seed into the 32-bit state that seeds [`CardRng`].
///
/// FNV-1a over the seed's characters: XOR each code point into the hash,
/// then multiply by the FNV prime with wrapping arithmetic. The empty seed
/// hashes to the offset basis.
///
/// [`CardRng`]: super::rng::CardRng
#[must_use]
pub fn seed_hash(seed: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for ch in seed.chars() {
        hash ^= ch as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
