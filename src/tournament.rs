//! MPC tournament.
//!
//! Pairwise compares two shared values by reconstructing their share-wise
//! difference and inspecting its field sign; a linear scan over bidders
//! selects the argmax. This reveals the maximum value and the sequence of
//! pairwise differences, but not any individual bid that never became the
//! running maximum. A production system would restrict the observable to
//! the sign alone; see DESIGN.md.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use num_bigint::BigUint;

use crate::sharing::{reconstruct, ShareTriple};

/// `(a - b) mod p` for each of the three shares, independently.
fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + p - (b % p)) % p
}

/// Share-wise subtraction followed by reconstruction and a field sign test.
///
/// Correctness precondition (enforced upstream by the range proof): valid
/// bids lie in `[0, max_bid]` with `max_bid << p/2`, so the field
/// representative of `a - b` is `< p/2` iff the integer difference is
/// non-negative.
pub fn compare(a: &ShareTriple, b: &ShareTriple, p: &BigUint) -> Ordering {
    let d1 = sub_mod(&a.s1, &b.s1, p);
    let d2 = sub_mod(&a.s2, &b.s2, p);
    let d3 = sub_mod(&a.s3, &b.s3, p);
    let d = reconstruct(
        &ShareTriple {
            s1: d1,
            s2: d2,
            s3: d3,
        },
        p,
    );

    if d == BigUint::from(0u32) {
        Ordering::Equal
    } else if d < p / 2u32 {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Linear scan for the argmax over shared values. Ties go to the earliest
/// bidder in `bidders` (a strictly-greater challenger replaces the current
/// winner; an equal one does not).
pub fn find_max<Id>(
    bidders: &[Id],
    shares: &HashMap<Id, ShareTriple>,
    p: &BigUint,
) -> Option<(Id, BigUint)>
where
    Id: Clone + Eq + Hash,
{
    let mut bidders_iter = bidders.iter();
    let first_id = bidders_iter.next()?;
    let mut winner_id = first_id.clone();
    let mut winner_shares = shares.get(first_id)?;

    for challenger_id in bidders_iter {
        let challenger_shares = shares.get(challenger_id)?;
        if compare(challenger_shares, winner_shares, p) == Ordering::Greater {
            winner_id = challenger_id.clone();
            winner_shares = challenger_shares;
        }
    }

    Some((winner_id, reconstruct(winner_shares, p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sharing::share;

    fn p() -> BigUint {
        BigUint::from(2u32).pow(61) - BigUint::from(1u32)
    }

    #[test]
    fn compare_orders_by_integer_value() {
        let p = p();
        let a = share(&BigUint::from(920u32), &p).unwrap();
        let b = share(&BigUint::from(600u32), &p).unwrap();
        assert_eq!(compare(&a, &b, &p), Ordering::Greater);
        assert_eq!(compare(&b, &a, &p), Ordering::Less);
    }

    #[test]
    fn compare_detects_equality() {
        let p = p();
        let a = share(&BigUint::from(350u32), &p).unwrap();
        let b = share(&BigUint::from(350u32), &p).unwrap();
        assert_eq!(compare(&a, &b, &p), Ordering::Equal);
    }

    #[test]
    fn find_max_scenario_one() {
        let p = p();
        let bidders = vec!["B1".to_string(), "B2".to_string(), "B3".to_string()];
        let mut shares = HashMap::new();
        shares.insert("B1".to_string(), share(&BigUint::from(150u32), &p).unwrap());
        shares.insert("B2".to_string(), share(&BigUint::from(920u32), &p).unwrap());
        shares.insert("B3".to_string(), share(&BigUint::from(600u32), &p).unwrap());

        let (winner, value) = find_max(&bidders, &shares, &p).unwrap();
        assert_eq!(winner, "B2");
        assert_eq!(value, BigUint::from(920u32));
    }

    #[test]
    fn find_max_ties_go_to_the_earliest_bidder() {
        let p = p();
        let bidders = vec![
            "B1".to_string(),
            "B2".to_string(),
            "B3".to_string(),
            "B4".to_string(),
        ];
        let mut shares = HashMap::new();
        shares.insert("B1".to_string(), share(&BigUint::from(350u32), &p).unwrap());
        shares.insert("B2".to_string(), share(&BigUint::from(350u32), &p).unwrap());
        shares.insert("B3".to_string(), share(&BigUint::from(100u32), &p).unwrap());
        shares.insert("B4".to_string(), share(&BigUint::from(300u32), &p).unwrap());

        let (winner, value) = find_max(&bidders, &shares, &p).unwrap();
        assert_eq!(winner, "B1");
        assert_eq!(value, BigUint::from(350u32));
    }

    #[test]
    fn find_max_on_a_single_bidder() {
        let p = p();
        let bidders = vec!["Solo".to_string()];
        let mut shares = HashMap::new();
        shares.insert("Solo".to_string(), share(&BigUint::from(777u32), &p).unwrap());

        let (winner, value) = find_max(&bidders, &shares, &p).unwrap();
        assert_eq!(winner, "Solo");
        assert_eq!(value, BigUint::from(777u32));
    }

    #[test]
    fn find_max_on_empty_bidder_list_is_none() {
        let p = p();
        let bidders: Vec<String> = vec![];
        let shares: HashMap<String, ShareTriple> = HashMap::new();
        assert!(find_max(&bidders, &shares, &p).is_none());
    }
}
