// Path: crates/types/src/codec/registry.rs

//! The registry's `getAttestation(bytes32)` call and its return value.
//!
//! The function returns a single dynamic tuple, so the return data starts with
//! an offset to the tuple. Inside the tuple, the trailing `bytes data` field is
//! itself an offset relative to the tuple's own start, not the buffer's.

use super::word::{address_word, uint_word, TupleEncoder, WordReader, WORD};
use crate::app::{Bytes32, OnChainAttestation};
use crate::error::DecodeError;

/// The 4-byte selector of `getAttestation(bytes32)`.
pub const GET_ATTESTATION_SELECTOR: [u8; 4] = [0xa3, 0x11, 0x2a, 0x64];

/// Words in the record tuple's head: nine static fields and the data offset.
pub const RECORD_FIELDS: usize = 10;

/// Calldata for `getAttestation(uid)`.
pub fn get_attestation_calldata(uid: &Bytes32) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&GET_ATTESTATION_SELECTOR);
    data.extend_from_slice(uid.as_bytes());
    data
}

/// Decodes `getAttestation` return data.
///
/// Returns `Ok(None)` for an empty or all-zero buffer and for a record whose uid
/// is zero, which is how the registry reports an unknown uid.
pub fn decode_record(data: &[u8]) -> Result<Option<OnChainAttestation>, DecodeError> {
    if data.iter().all(|b| *b == 0) {
        return Ok(None);
    }
    if data.len() < WORD {
        return Err(DecodeError::TooShort {
            len: data.len(),
            need: WORD + RECORD_FIELDS * WORD,
        });
    }

    let reader = WordReader::new(data);
    let base = reader.offset(0, 0, "tuple")?.resolve("tuple")?;
    let need = base
        .checked_add(RECORD_FIELDS * WORD)
        .ok_or(DecodeError::Overflow {
            field: "tuple",
            bits: usize::BITS,
        })?;
    if data.len() < need {
        return Err(DecodeError::TooShort {
            len: data.len(),
            need,
        });
    }
    let field = |index: usize| base + index * WORD;

    let uid = reader.bytes32(field(0), "uid")?;
    if uid.is_zero() {
        return Ok(None);
    }
    let data_offset = reader.offset(field(9), base, "data")?;

    Ok(Some(OnChainAttestation {
        uid,
        schema: reader.bytes32(field(1), "schema")?,
        time: reader.uint64(field(2), "time")?,
        expiration_time: reader.uint64(field(3), "expirationTime")?,
        revocation_time: reader.uint64(field(4), "revocationTime")?,
        ref_uid: reader.bytes32(field(5), "refUid")?,
        recipient: reader.address(field(6), "recipient")?,
        attester: reader.address(field(7), "attester")?,
        revocable: reader.boolean(field(8), "revocable")?,
        data: reader.dynamic(data_offset, "data")?.to_vec(),
    }))
}

/// Encodes a record the way the registry returns it, with the tuple at offset 32.
pub fn encode_record(record: &OnChainAttestation) -> Vec<u8> {
    let mut enc = TupleEncoder::new(RECORD_FIELDS);
    enc.bytes32(&record.uid)
        .bytes32(&record.schema)
        .uint64(record.time)
        .uint64(record.expiration_time)
        .uint64(record.revocation_time)
        .bytes32(&record.ref_uid)
        .word(address_word(&record.recipient))
        .word(address_word(&record.attester))
        .uint64(u64::from(record.revocable))
        .dynamic(&record.data);

    let mut out = uint_word(WORD as u64).to_vec();
    out.extend(enc.finish());
    out
}

