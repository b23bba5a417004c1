//! CSPRNG helpers shared by the commitment, proof, and sharing layers.
//!
//! Every draw goes through the OS CSPRNG (`OsRng`); per the error-handling
//! design a randomness-source failure is fatal to the whole operation, so
//! these return `Result` instead of panicking or silently falling back to a
//! weaker source.

use curve25519_dalek::scalar::Scalar;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::Error;

/// A uniform scalar in `[0, n)`, sampled via wide reduction so the result is
/// unbiased regardless of `n`'s exact bit length.
pub fn random_scalar() -> Result<Scalar, Error> {
    let mut bytes = [0u8; 64];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| Error::RandomnessFailure)?;
    Ok(Scalar::from_bytes_mod_order_wide(&bytes))
}

/// A uniform integer in `[0, bound)` via rejection sampling on the smallest
/// byte-aligned range that covers `bound`, so the distribution stays
/// uniform instead of merely "reduced mod bound" (which would bias small
/// bounds against the top of the CSPRNG's output range).
pub fn random_biguint_below(bound: &BigUint) -> Result<BigUint, Error> {
    if bound == &BigUint::from(0u32) {
        return Ok(BigUint::from(0u32));
    }
    let byte_len = (bound.bits() as usize).div_ceil(8).max(1);
    loop {
        let mut buf = vec![0u8; byte_len];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|_| Error::RandomnessFailure)?;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_biguint_below_respects_bound() {
        let bound = BigUint::from(1000u32);
        for _ in 0..200 {
            let x = random_biguint_below(&bound).unwrap();
            assert!(x < bound);
        }
    }

    #[test]
    fn random_biguint_below_zero_is_zero() {
        let bound = BigUint::from(0u32);
        assert_eq!(random_biguint_below(&bound).unwrap(), BigUint::from(0u32));
    }
}
