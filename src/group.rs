//! Group arithmetic over the Ristretto prime-order group.
//!
//! `curve25519-dalek`'s Ristretto construction gives us a prime-order group
//! with no cofactor, so every point we ever construct is automatically a
//! valid group element. `InvalidPoint` can only arise at the wire boundary
//! when decoding bytes that did not come from `compress()`.

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use num_bigint::BigUint;
use num_traits::Num;
use sha2::{Digest, Sha512};

use crate::error::Error;

/// `(G, H, n)` bundled together and threaded through every proof and
/// commitment call, rather than read from process-wide statics. Tests can
/// swap in distinguishable generators without touching global state.
#[derive(Clone, Copy, Debug)]
pub struct CurveContext {
    pub g: RistrettoPoint,
    pub h: RistrettoPoint,
}

/// The order of the Ristretto group (a 252-bit prime), in decimal.
/// `curve25519-dalek` enforces this modulus internally for every `Scalar`
/// operation; it is exposed here only for components (secret sharing, the
/// tournament's sign test) that need to reason about it as an integer.
const RISTRETTO_ORDER_DECIMAL: &str =
    "7237005577332262213973186563042994240857116359379907606001950938285454250989";

impl CurveContext {
    /// Builds the (dependency-injected, not global) curve context: the
    /// standard Ristretto basepoint as `G`, and an `H` derived from a fixed
    /// nothing-up-my-sleeve tag so that `log_G H` is unknown to anyone,
    /// including this implementation.
    pub fn new() -> Self {
        CurveContext {
            g: RISTRETTO_BASEPOINT_POINT,
            h: derive_nums_generator(b"veiled-auction::generator::H"),
        }
    }

    /// The group order `n`, as an integer. Callers that only need scalar
    /// arithmetic should prefer `Scalar`, which reduces mod `n`
    /// automatically; this is for components that work over an explicit
    /// prime field (secret sharing, the tournament's sign test).
    pub fn order(&self) -> BigUint {
        BigUint::from_str_radix(RISTRETTO_ORDER_DECIMAL, 10).expect("valid constant")
    }
}

impl Default for CurveContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash-to-point via a domain-separated SHA-512 expansion.
fn derive_nums_generator(tag: &[u8]) -> RistrettoPoint {
    let mut hasher = Sha512::new();
    hasher.update(b"veiled-auction::nums-generator");
    hasher.update(tag);
    let digest = hasher.finalize();
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&digest);
    RistrettoPoint::from_uniform_bytes(&wide)
}

pub fn point_add(a: &RistrettoPoint, b: &RistrettoPoint) -> RistrettoPoint {
    a + b
}

pub fn point_sub(a: &RistrettoPoint, b: &RistrettoPoint) -> RistrettoPoint {
    a - b
}

pub fn point_mul(base: &RistrettoPoint, k: &Scalar) -> RistrettoPoint {
    base * k
}

pub fn points_equal(a: &RistrettoPoint, b: &RistrettoPoint) -> bool {
    a == b
}

pub fn identity() -> RistrettoPoint {
    RistrettoPoint::identity()
}

/// `(n - |s|) mod n`, i.e. `-s`.
pub fn scalar_neg(s: &Scalar) -> Scalar {
    -s
}

pub fn decode_point(bytes: &[u8; 32]) -> Result<RistrettoPoint, Error> {
    CompressedRistretto(*bytes)
        .decompress()
        .ok_or(Error::InvalidPoint)
}

pub fn decode_scalar(bytes: &[u8; 32]) -> Result<Scalar, Error> {
    Option::<Scalar>::from(Scalar::from_canonical_bytes(*bytes)).ok_or(Error::InvalidScalar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_is_not_g_and_not_identity() {
        let ctx = CurveContext::new();
        assert_ne!(ctx.g.compress(), ctx.h.compress());
        assert_ne!(ctx.h.compress(), identity().compress());
    }

    #[test]
    fn derive_nums_generator_is_deterministic() {
        let a = derive_nums_generator(b"same-tag");
        let b = derive_nums_generator(b"same-tag");
        assert_eq!(a.compress(), b.compress());
        let c = derive_nums_generator(b"different-tag");
        assert_ne!(a.compress(), c.compress());
    }

    #[test]
    fn decode_roundtrips_through_compress() {
        let ctx = CurveContext::new();
        let bytes = ctx.g.compress().to_bytes();
        let decoded = decode_point(&bytes).unwrap();
        assert_eq!(decoded.compress(), ctx.g.compress());
    }

    #[test]
    fn decode_rejects_garbage() {
        let bytes = [0xFFu8; 32];
        assert!(decode_point(&bytes).is_err());
    }
}
