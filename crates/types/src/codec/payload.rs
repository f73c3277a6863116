// Path: crates/types/src/codec/payload.rs

//! Encoding and decoding of the nine-field agent identity tuple.
//!
//! The head holds one word per field in schema order. String fields hold an
//! offset (from the start of the buffer) into the tail, where each string is a
//! length word followed by its bytes zero-padded to a word boundary.

use super::word::{TupleEncoder, WordReader, WORD};
use crate::app::{AttestationDraft, AttestationPayload};
use crate::error::{DecodeError, EncodeError};

/// The number of fields in the tuple.
pub const FIELD_COUNT: usize = 9;
/// The size of the head, and so the offset of the first tail entry.
pub const HEAD_SIZE: usize = FIELD_COUNT * WORD;

const fn slot(index: usize) -> usize {
    index * WORD
}

/// Encodes a payload. The typed hashes make this infallible.
pub fn encode(payload: &AttestationPayload) -> Vec<u8> {
    let mut enc = TupleEncoder::new(FIELD_COUNT);
    enc.string(&payload.agent_id)
        .string(&payload.name)
        .string(&payload.preset_id)
        .string(&payload.tier)
        .bytes32(&payload.prompt_hash)
        .bytes32(&payload.manifest_hash)
        .string(&payload.parent_id)
        .string(&payload.owner_id)
        .uint64(payload.created_at);
    enc.finish()
}

/// Validates a draft and encodes it; no bytes are produced for an invalid draft.
pub fn encode_draft(draft: &AttestationDraft) -> Result<Vec<u8>, EncodeError> {
    let payload = draft.clone().into_payload()?;
    Ok(encode(&payload))
}

/// Decodes a payload produced by [`encode`] or by any conforming ABI encoder.
pub fn decode(data: &[u8]) -> Result<AttestationPayload, DecodeError> {
    if data.len() < HEAD_SIZE {
        return Err(DecodeError::TooShort {
            len: data.len(),
            need: HEAD_SIZE,
        });
    }
    let reader = WordReader::new(data);
    let string = |index: usize, field: &'static str| -> Result<String, DecodeError> {
        let offset = reader.offset(slot(index), 0, field)?;
        reader.string(offset, field)
    };

    Ok(AttestationPayload {
        agent_id: string(0, "agentId")?,
        name: string(1, "name")?,
        preset_id: string(2, "presetId")?,
        tier: string(3, "tier")?,
        prompt_hash: reader.bytes32(slot(4), "promptHash")?,
        manifest_hash: reader.bytes32(slot(5), "manifestHash")?,
        parent_id: string(6, "parentId")?,
        owner_id: string(7, "ownerId")?,
        created_at: reader.uint64(slot(8), "createdAt")?,
    })
}
