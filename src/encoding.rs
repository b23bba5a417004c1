//! Canonical wire encoding.
//!
//! Group elements as 32-byte compressed Ristretto points, scalars and
//! secret shares as 32-byte big-endian integers, and lists length-prefixed
//! with a 32-bit big-endian count. This is the format two independent
//! implementations would need to agree on to interoperate; the in-process
//! `RegistrationPackage` additionally derives `serde::Serialize` for
//! convenience, but that derive is not the canonical form this module
//! produces.

use num_bigint::BigUint;

use crate::bitproof::BitProof;
use crate::error::Error;
use crate::rangeproof::RangeProof;
use crate::types::{RegistrationPackage, SharesWire};

pub fn encode_biguint_be(v: &BigUint) -> [u8; 32] {
    let bytes = v.to_bytes_be();
    let mut out = [0u8; 32];
    let start = 32usize.saturating_sub(bytes.len());
    out[start..].copy_from_slice(&bytes[bytes.len().saturating_sub(32)..]);
    out
}

pub fn decode_biguint_be(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

struct Writer(Vec<u8>);

impl Writer {
    fn new() -> Self {
        Writer(Vec::new())
    }
    fn bytes(&mut self, b: &[u8]) {
        self.0.extend_from_slice(b);
    }
    fn len_prefixed_count(&mut self, count: usize) {
        self.0.extend_from_slice(&(count as u32).to_be_bytes());
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Reader { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if self.pos + n > self.buf.len() {
            return Err(Error::StructureInvalid);
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array32(&mut self) -> Result<[u8; 32], Error> {
        let slice = self.take(32)?;
        let mut out = [0u8; 32];
        out.copy_from_slice(slice);
        Ok(out)
    }

    fn take_u32_count(&mut self) -> Result<u32, Error> {
        let slice = self.take(4)?;
        Ok(u32::from_be_bytes([slice[0], slice[1], slice[2], slice[3]]))
    }
}

/// Serializes a `RegistrationPackage` into the canonical byte form.
pub fn encode_package(pkg: &RegistrationPackage) -> Vec<u8> {
    let mut w = Writer::new();

    let id_bytes = pkg.id.as_bytes();
    w.len_prefixed_count(id_bytes.len());
    w.bytes(id_bytes);

    w.bytes(&pkg.commitment);

    w.len_prefixed_count(pkg.proof.bit_commitments.len());
    for c in &pkg.proof.bit_commitments {
        w.bytes(c);
    }

    w.len_prefixed_count(pkg.proof.bit_proofs.len());
    for p in &pkg.proof.bit_proofs {
        w.bytes(&p.c0);
        w.bytes(&p.c1);
        w.bytes(&p.z0);
        w.bytes(&p.z1);
    }

    w.bytes(&pkg.proof.consistency_e);
    w.bytes(&pkg.proof.consistency_s);

    w.bytes(&pkg.shares.s1);
    w.bytes(&pkg.shares.s2);
    w.bytes(&pkg.shares.s3);

    w.0
}

/// Parses a `RegistrationPackage` from its canonical byte form.
///
/// Enforces exact arity between the bit-commitment and bit-proof lists
/// (`StructureInvalid` otherwise); it does not itself verify the proof.
pub fn decode_package(bytes: &[u8]) -> Result<RegistrationPackage, Error> {
    let mut r = Reader::new(bytes);

    let id_len = r.take_u32_count()? as usize;
    let id_bytes = r.take(id_len)?;
    let id = String::from_utf8(id_bytes.to_vec()).map_err(|_| Error::StructureInvalid)?;

    let commitment = r.take_array32()?;

    let bit_commitment_count = r.take_u32_count()? as usize;
    let mut bit_commitments = Vec::with_capacity(bit_commitment_count);
    for _ in 0..bit_commitment_count {
        bit_commitments.push(r.take_array32()?);
    }

    let bit_proof_count = r.take_u32_count()? as usize;
    if bit_proof_count != bit_commitment_count {
        return Err(Error::StructureInvalid);
    }
    let mut bit_proofs = Vec::with_capacity(bit_proof_count);
    for _ in 0..bit_proof_count {
        let c0 = r.take_array32()?;
        let c1 = r.take_array32()?;
        let z0 = r.take_array32()?;
        let z1 = r.take_array32()?;
        bit_proofs.push(BitProof { c0, c1, z0, z1 });
    }

    let consistency_e = r.take_array32()?;
    let consistency_s = r.take_array32()?;

    let s1 = r.take_array32()?;
    let s2 = r.take_array32()?;
    let s3 = r.take_array32()?;

    Ok(RegistrationPackage {
        id,
        commitment,
        proof: RangeProof {
            bit_commitments,
            bit_proofs,
            consistency_e,
            consistency_s,
        },
        shares: SharesWire { s1, s2, s3 },
    })
}
