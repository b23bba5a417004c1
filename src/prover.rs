//! Bidder-side helper: `prepare_registration` generates randomness,
//! commits to the bid, proves the shifted value lies in the declared
//! range, and splits the bid into three additive shares. Everything a
//! bidder process does before handing a `RegistrationPackage` to the
//! coordinator.

use num_bigint::BigUint;

use crate::commitment::commit_u64;
use crate::config::AuctionConfig;
use crate::encoding::encode_biguint_be;
use crate::error::Error;
use crate::group::CurveContext;
use crate::rangeproof::prove_range;
use crate::randutil::random_scalar;
use crate::sharing::share;
use crate::types::{BidderId, RegistrationPackage, SharesWire};

/// Prepares a full registration package for `bid` under `config`.
///
/// Performs the prover-side out-of-range precheck from the error-handling
/// design before doing any cryptographic work: a bid outside
/// `[min_bid, max_bid]` is rejected with `BidOutOfRange` rather than
/// generating a range proof that is guaranteed to fail verification.
pub fn prepare_registration(
    ctx: &CurveContext,
    id: impl Into<BidderId>,
    bid: u64,
    config: &AuctionConfig,
    p: &BigUint,
) -> Result<RegistrationPackage, Error> {
    if !config.in_range(bid) {
        return Err(Error::BidOutOfRange);
    }

    let r = random_scalar()?;
    let commitment = commit_u64(ctx, bid, &r);

    let shifted = bid - config.min_bid;
    let k = config.bit_width();
    let proof = prove_range(ctx, shifted, &r, k)?;

    let shares = share(&BigUint::from(bid), p)?;

    Ok(RegistrationPackage {
        id: id.into(),
        commitment: commitment.compress().to_bytes(),
        proof,
        shares: SharesWire {
            s1: encode_biguint_be(&shares.s1),
            s2: encode_biguint_be(&shares.s2),
            s3: encode_biguint_be(&shares.s3),
        },
    })
}
