//! Range proof.
//!
//! Composes the bit OR-proof over a bit decomposition of `v`, plus a
//! Schnorr proof of knowledge tying the bitwise decomposition back to the
//! original commitment, to prove `0 <= v < 2^k`.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use serde::{Deserialize, Serialize};

use crate::bitproof::{prove_bit, verify_bit, BitProof};
use crate::commitment::commit;
use crate::error::Error;
use crate::group::{decode_point, decode_scalar, point_mul, point_sub, CurveContext};
use crate::hash::{hash_to_scalar, point, TAG_RANGE_CONSISTENCY};
use crate::randutil::random_scalar;

/// `[C_0, ..., C_{k-1}]`, the parallel bit proofs, and the consistency pair
/// `(e, s)`. Exact arity (`k` bit commitments and `k` bit proofs) is
/// checked in `verify_range`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RangeProof {
    pub bit_commitments: Vec<[u8; 32]>,
    pub bit_proofs: Vec<BitProof>,
    pub consistency_e: [u8; 32],
    pub consistency_s: [u8; 32],
}

/// Proves `0 <= v < 2^k` for a commitment `commit(v, r)`.
pub fn prove_range(ctx: &CurveContext, v: u64, r: &Scalar, k: u32) -> Result<RangeProof, Error> {
    let mut bit_commitments = Vec::with_capacity(k as usize);
    let mut bit_proofs = Vec::with_capacity(k as usize);
    let mut r_sum = Scalar::ZERO;

    for i in 0..k {
        let b = ((v >> i) & 1) as u8;
        let r_i = random_scalar()?;
        let c_i = commit(ctx, &Scalar::from(b as u64), &r_i);
        let proof_i = prove_bit(ctx, b, &r_i, &c_i)?;

        let weight = Scalar::from(1u64 << i);
        r_sum += weight * r_i;

        bit_commitments.push(c_i.compress().to_bytes());
        bit_proofs.push(proof_i);
    }

    let delta_r = r - r_sum;

    let c_sum = sum_weighted(&bit_commitments, k)?;
    let commitment = commit(ctx, &Scalar::from(v), r);
    let delta_c = point_sub(&commitment, &c_sum);

    let k_rand = random_scalar()?;
    let r_point = point_mul(&ctx.h, &k_rand);
    let e = hash_to_scalar(TAG_RANGE_CONSISTENCY, &[point(&delta_c), point(&r_point)]);
    let s = k_rand + e * delta_r;

    Ok(RangeProof {
        bit_commitments,
        bit_proofs,
        consistency_e: e.to_bytes(),
        consistency_s: s.to_bytes(),
    })
}

/// Verifies a range proof against commitment `c` for bit width `k`.
///
/// Returns `Ok(())` on success, or the specific verifier-side `Error`
/// variant on failure (`StructureInvalid`, `BitProofInvalid`, or
/// `ConsistencyInvalid`); callers at the coordinator boundary collapse
/// these into `Error::ProofRejected` before surfacing them to a submitter.
pub fn verify_range(
    ctx: &CurveContext,
    proof: &RangeProof,
    c: &RistrettoPoint,
    k: u32,
) -> Result<(), Error> {
    if proof.bit_commitments.len() != k as usize || proof.bit_proofs.len() != k as usize {
        return Err(Error::StructureInvalid);
    }

    for (c_i_bytes, bit_proof) in proof.bit_commitments.iter().zip(proof.bit_proofs.iter()) {
        let c_i = decode_point(c_i_bytes)?;
        if !verify_bit(ctx, &c_i, bit_proof)? {
            return Err(Error::BitProofInvalid);
        }
    }

    let c_sum = sum_weighted(&proof.bit_commitments, k)?;
    let delta_c = point_sub(c, &c_sum);

    let e = decode_scalar(&proof.consistency_e)?;
    let s = decode_scalar(&proof.consistency_s)?;

    let r_prime = point_sub(&point_mul(&ctx.h, &s), &point_mul(&delta_c, &e));
    let recomputed = hash_to_scalar(TAG_RANGE_CONSISTENCY, &[point(&delta_c), point(&r_prime)]);

    if recomputed != e {
        return Err(Error::ConsistencyInvalid);
    }
    Ok(())
}

fn sum_weighted(bit_commitments: &[[u8; 32]], k: u32) -> Result<RistrettoPoint, Error> {
    let mut acc = RistrettoPoint::identity();
    for (i, c_i_bytes) in bit_commitments.iter().enumerate().take(k as usize) {
        let c_i = decode_point(c_i_bytes)?;
        let weight = Scalar::from(1u64 << i);
        acc += point_mul(&c_i, &weight);
    }
    Ok(acc)
}
