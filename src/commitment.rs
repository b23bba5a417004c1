//! Pedersen commitment layer.
//!
//! `commit(v, r) = v*G + r*H`, perfectly hiding in `r` and computationally
//! binding under the discrete-log relation between `G` and `H`.
//! Additively homomorphic: `commit(v1,r1) + commit(v2,r2) = commit(v1+v2,
//! r1+r2)`. The range proof leans on this via
//! `commit(v,r) - commit(min_bid, 0) = commit(v - min_bid, r)`.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;

use crate::group::{point_add, point_mul, points_equal, CurveContext};

pub fn commit(ctx: &CurveContext, v: &Scalar, r: &Scalar) -> RistrettoPoint {
    point_add(&point_mul(&ctx.g, v), &point_mul(&ctx.h, r))
}

/// Convenience wrapper for committing to a non-negative integer value
/// (bid amounts, `min_bid`) rather than an already-reduced scalar.
pub fn commit_u64(ctx: &CurveContext, v: u64, r: &Scalar) -> RistrettoPoint {
    commit(ctx, &Scalar::from(v), r)
}

pub fn equals(ctx: &CurveContext, c: &RistrettoPoint, v: &Scalar, r: &Scalar) -> bool {
    points_equal(c, &commit(ctx, v, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randutil::random_scalar;

    #[test]
    fn commit_is_homomorphic() {
        let ctx = CurveContext::new();
        let v1 = random_scalar().unwrap();
        let r1 = random_scalar().unwrap();
        let v2 = random_scalar().unwrap();
        let r2 = random_scalar().unwrap();

        let lhs = point_add(&commit(&ctx, &v1, &r1), &commit(&ctx, &v2, &r2));
        let rhs = commit(&ctx, &(v1 + v2), &(r1 + r2));
        assert_eq!(lhs.compress(), rhs.compress());
    }

    #[test]
    fn equals_accepts_correct_opening_and_rejects_wrong_one() {
        let ctx = CurveContext::new();
        let v = Scalar::from(42u64);
        let r = random_scalar().unwrap();
        let c = commit(&ctx, &v, &r);

        assert!(equals(&ctx, &c, &v, &r));
        assert!(!equals(&ctx, &c, &Scalar::from(43u64), &r));
        assert!(!equals(&ctx, &c, &v, &random_scalar().unwrap()));
    }

    #[test]
    fn range_shift_identity_holds() {
        // commit(v, r) - commit(min_bid, 0) == commit(v - min_bid, r)
        let ctx = CurveContext::new();
        let min_bid = 100u64;
        let v = Scalar::from(350u64);
        let r = random_scalar().unwrap();

        let c = commit(&ctx, &v, &r);
        let offset = commit_u64(&ctx, min_bid, &Scalar::ZERO);
        let adjusted = crate::group::point_sub(&c, &offset);

        let expected = commit(&ctx, &(v - Scalar::from(min_bid)), &r);
        assert_eq!(adjusted.compress(), expected.compress());
    }
}
