//! Transcript hash (Fiat-Shamir).
//!
//! Maps a sequence of group elements and integers to a scalar in `[0, n)`.
//! A bit-proof transcript and the range proof's consistency-proof transcript
//! are hashed with the same function, so without separation a malicious
//! prover could reuse a transcript across proof types. Every call site here
//! is required to pass a fixed per-usage domain tag that is absorbed before
//! any transcript item, closing that gap.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha256};

/// Domain tag for the bit OR-proof's Fiat-Shamir challenge.
pub const TAG_BIT_PROOF: &[u8] = b"veiled-auction::v1::bit-proof";
/// Domain tag for the range proof's Schnorr consistency proof.
pub const TAG_RANGE_CONSISTENCY: &[u8] = b"veiled-auction::v1::range-consistency";

/// A single transcript item. Points and scalars are absorbed via their
/// canonical byte encoding.
pub enum TranscriptItem<'a> {
    Point(&'a RistrettoPoint),
    Scalar(&'a Scalar),
}

impl TranscriptItem<'_> {
    fn absorb(&self, hasher: &mut Sha256) {
        match self {
            TranscriptItem::Point(p) => hasher.update(p.compress().as_bytes()),
            TranscriptItem::Scalar(s) => hasher.update(s.as_bytes()),
        }
    }
}

pub fn point(p: &RistrettoPoint) -> TranscriptItem<'_> {
    TranscriptItem::Point(p)
}

pub fn scalar(s: &Scalar) -> TranscriptItem<'_> {
    TranscriptItem::Scalar(s)
}

/// `hash_to_scalar(tag, items) -> scalar in [0, n)`, computed as
/// `SHA-256(tag || items...) mod n`. SHA-256 already yields exactly 32
/// bytes, so `Scalar::from_bytes_mod_order` reduces the digest directly
/// into the field without a wide-reduction step.
pub fn hash_to_scalar(tag: &[u8], items: &[TranscriptItem]) -> Scalar {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    for item in items {
        item.absorb(&mut hasher);
    }
    let digest: [u8; 32] = hasher.finalize().into();
    Scalar::from_bytes_mod_order(digest)
}
