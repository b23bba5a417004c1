use thiserror::Error;

/// Errors surfaced by the commitment, proof, sharing, and coordinator layers.
///
/// Per the error-handling design, the verifier-side proof failures
/// (`BitProofInvalid`, `ConsistencyInvalid`, `StructureInvalid`) are
/// constructed internally for logging but the coordinator only ever
/// returns the collapsed `ProofRejected` to a submitter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("min_bid must be <= max_bid and the derived bit width must be nonzero")]
    ConfigInvalid,

    #[error("bid is outside the declared [min_bid, max_bid] range")]
    BidOutOfRange,

    #[error("bit OR-proof failed to verify")]
    BitProofInvalid,

    #[error("range proof consistency check failed")]
    ConsistencyInvalid,

    #[error("proof has the wrong number of bit commitments or bit proofs")]
    StructureInvalid,

    #[error("range proof was rejected")]
    ProofRejected,

    #[error("bidder id has not been registered")]
    NotRegistered,

    #[error("bidder has not passed commitment verification")]
    NotVerified,

    #[error("bidder has already completed this submission")]
    AlreadySubmitted,

    #[error("decoded bytes are not a valid curve point")]
    InvalidPoint,

    #[error("decoded bytes are not a valid scalar")]
    InvalidScalar,

    #[error("the operating system CSPRNG failed")]
    RandomnessFailure,
}

pub type Result<T> = std::result::Result<T, Error>;
