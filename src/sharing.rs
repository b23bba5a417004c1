//! Additive secret sharing.
//!
//! Splits a non-negative integer into three additive shares modulo a prime
//! `p`; reconstructs by summation. Unconditional privacy: any two shares
//! are uniform and independent of the shared value.

use num_bigint::BigUint;

use crate::error::Error;
use crate::randutil::random_biguint_below;

/// `(s1, s2, s3)`, each in `[0, p)`, such that `s1 + s2 + s3 == v (mod p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareTriple {
    pub s1: BigUint,
    pub s2: BigUint,
    pub s3: BigUint,
}

impl ShareTriple {
    pub fn as_array(&self) -> [&BigUint; 3] {
        [&self.s1, &self.s2, &self.s3]
    }
}

/// `share(v, p) -> (s1, s2, s3)`: draw `s1, s2` uniformly in `[0, p)`, set
/// `s3 = (v - s1 - s2) mod p`.
pub fn share(v: &BigUint, p: &BigUint) -> Result<ShareTriple, Error> {
    let s1 = random_biguint_below(p)?;
    let s2 = random_biguint_below(p)?;
    let v_mod = v % p;
    // (v - s1 - s2) mod p computed over non-negative BigUint by adding a
    // multiple of p large enough to avoid underflow before reducing.
    let s3 = (&v_mod + p + p - &s1 - &s2) % p;
    Ok(ShareTriple { s1, s2, s3 })
}

/// `reconstruct((s1,s2,s3), p) = (s1+s2+s3) mod p`.
pub fn reconstruct(shares: &ShareTriple, p: &BigUint) -> BigUint {
    (&shares.s1 + &shares.s2 + &shares.s3) % p
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn p() -> BigUint {
        BigUint::from(2u32).pow(61) - BigUint::from(1u32)
    }

    #[test]
    fn reconstruct_recovers_the_shared_value() {
        let p = p();
        for v in [0u64, 1, 42, 1_000_000] {
            let value = BigUint::from(v);
            let shares = share(&value, &p).unwrap();
            assert_eq!(reconstruct(&shares, &p), value);
        }
    }

    #[test]
    fn shares_are_in_range() {
        let p = p();
        let shares = share(&BigUint::from(5u32), &p).unwrap();
        for s in shares.as_array() {
            assert!(s < &p);
            assert!(s >= &BigUint::zero());
        }
    }

    #[test]
    fn sharing_zero_still_reconstructs_to_zero() {
        let p = p();
        let shares = share(&BigUint::zero(), &p).unwrap();
        assert_eq!(reconstruct(&shares, &p), BigUint::zero());
    }
}
