//! Shared record types used across the prover and coordinator.

use serde::{Deserialize, Serialize};

use crate::rangeproof::RangeProof;
use crate::sharing::ShareTriple;

pub type BidderId = String;

/// The registration package a bidder sends the coordinator: an id, a
/// Pedersen commitment to the bid, a range proof over it, and the three
/// additive shares of the bid value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationPackage {
    pub id: BidderId,
    pub commitment: [u8; 32],
    pub proof: RangeProof,
    pub shares: SharesWire,
}

/// Wire form of a `ShareTriple`: three 32-byte big-endian integers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SharesWire {
    pub s1: [u8; 32],
    pub s2: [u8; 32],
    pub s3: [u8; 32],
}

/// Coordinator-side lifecycle of a single bidder id. A bidder cannot
/// transition backward; only `Shared` records participate in the
/// tournament.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BidderState {
    Registered,
    CommittedVerified {
        commitment: [u8; 32],
    },
    Shared {
        commitment: [u8; 32],
        shares: ShareTriple,
    },
}

#[derive(Clone, Debug)]
pub struct BidderRecord {
    pub id: BidderId,
    pub state: BidderState,
}
