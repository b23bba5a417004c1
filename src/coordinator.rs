//! Auction coordinator.
//!
//! Accepts a registration package, verifies the range proof against a
//! range-adjusted commitment, stores shares, and drives the tournament once
//! all bidders are in.
//!
//! State transitions per bidder id: `{none} -> registered ->
//! committed-verified -> shared`. A bidder cannot transition backward; a
//! second submission for an already-verified id is rejected with
//! `AlreadySubmitted`. Mutations are applied per-submission as a single
//! state write, so a concurrent caller only needs one mutex around a whole
//! coordinator instance rather than field-level locking.

use std::collections::HashMap;

use num_bigint::BigUint;

use crate::commitment::commit_u64;
use crate::config::AuctionConfig;
use crate::encoding::decode_biguint_be;
use crate::error::Error;
use crate::group::{point_sub, CurveContext};
use crate::rangeproof::{verify_range, RangeProof};
use crate::sharing::ShareTriple;
use crate::tournament::find_max;
use crate::types::{BidderId, BidderRecord, BidderState, RegistrationPackage, SharesWire};

pub struct AuctionCoordinator {
    ctx: CurveContext,
    config: AuctionConfig,
    p: BigUint,
    order: Vec<BidderId>,
    records: HashMap<BidderId, BidderRecord>,
}

impl AuctionCoordinator {
    /// Builds a coordinator for `config`, reusing the curve's group order
    /// as the sharing prime `p` (see DESIGN.md for why this implementation
    /// takes that option rather than an independent field prime).
    pub fn new(config: AuctionConfig) -> Self {
        let ctx = CurveContext::new();
        let p = ctx.order();
        AuctionCoordinator {
            ctx,
            config,
            p,
            order: Vec::new(),
            records: HashMap::new(),
        }
    }

    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }

    pub fn sharing_prime(&self) -> &BigUint {
        &self.p
    }

    /// Idempotent insertion: a bidder id already known to the coordinator
    /// is left untouched.
    pub fn register(&mut self, id: impl Into<BidderId>) {
        let id = id.into();
        if !self.records.contains_key(&id) {
            tracing::info!(bidder = %id, "bidder registered");
            self.order.push(id.clone());
            self.records.insert(
                id.clone(),
                BidderRecord {
                    id,
                    state: BidderState::Registered,
                },
            );
        }
    }

    /// Verifies `proof` against `commitment` (after range-adjustment) and,
    /// on success, stores the commitment and marks the bidder
    /// `committed-verified`. On failure the bidder's state is left at
    /// `registered` and `Error::ProofRejected` is returned. The underlying
    /// cryptographic failure reason is logged but not exposed to the
    /// caller; verifier-side failures all collapse into one user-visible
    /// error code.
    pub fn submit_commitment_and_proof(
        &mut self,
        id: &str,
        commitment: [u8; 32],
        proof: &RangeProof,
    ) -> Result<(), Error> {
        let record = self.records.get(id).ok_or(Error::NotRegistered)?;
        match &record.state {
            BidderState::Registered => {}
            BidderState::CommittedVerified { .. } | BidderState::Shared { .. } => {
                return Err(Error::AlreadySubmitted)
            }
        }

        let commitment_point = crate::group::decode_point(&commitment)?;
        let offset = commit_u64(&self.ctx, self.config.min_bid, &curve25519_dalek::scalar::Scalar::ZERO);
        let adjusted = point_sub(&commitment_point, &offset);

        match verify_range(&self.ctx, proof, &adjusted, self.config.bit_width()) {
            Ok(()) => {
                tracing::info!(bidder = %id, "range proof verified");
                let record = self.records.get_mut(id).expect("checked above");
                record.state = BidderState::CommittedVerified { commitment };
                Ok(())
            }
            Err(reason) => {
                tracing::warn!(bidder = %id, ?reason, "range proof rejected");
                Err(Error::ProofRejected)
            }
        }
    }

    /// Stores `shares` for a bidder who has already passed commitment
    /// verification, and marks them `shared`.
    pub fn submit_shares(&mut self, id: &str, shares: SharesWire) -> Result<(), Error> {
        let record = self.records.get(id).ok_or(Error::NotRegistered)?;
        let commitment = match &record.state {
            BidderState::CommittedVerified { commitment } => *commitment,
            BidderState::Registered => return Err(Error::NotVerified),
            BidderState::Shared { .. } => return Err(Error::AlreadySubmitted),
        };

        let triple = ShareTriple {
            s1: decode_biguint_be(&shares.s1),
            s2: decode_biguint_be(&shares.s2),
            s3: decode_biguint_be(&shares.s3),
        };

        tracing::info!(bidder = %id, "shares received");
        let record = self.records.get_mut(id).expect("checked above");
        record.state = BidderState::Shared {
            commitment,
            shares: triple,
        };
        Ok(())
    }

    /// Convenience entry point combining verification and share storage
    /// for a whole `RegistrationPackage`, the unit a bidder actually sends.
    pub fn submit_registration(&mut self, package: RegistrationPackage) -> Result<(), Error> {
        self.register(package.id.clone());
        self.submit_commitment_and_proof(&package.id, package.commitment, &package.proof)?;
        self.submit_shares(&package.id, package.shares)
    }

    /// Runs the tournament over every `shared` bidder. Returns `None` (the
    /// "no valid bids" sentinel) if no bidder reached the `shared` state.
    pub fn compute_winner(&self) -> Option<(BidderId, BigUint)> {
        let mut shared_ids = Vec::new();
        let mut shares = HashMap::new();

        for id in &self.order {
            if let Some(record) = self.records.get(id) {
                if let BidderState::Shared { shares: triple, .. } = &record.state {
                    shared_ids.push(id.clone());
                    shares.insert(id.clone(), triple.clone());
                }
            }
        }

        let result = find_max(&shared_ids, &shares, &self.p);
        match &result {
            Some((winner, value)) => {
                tracing::info!(winner = %winner, value = %value, "tournament complete")
            }
            None => tracing::info!("no valid bids"),
        }
        result
    }
}
