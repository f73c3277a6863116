// Path: crates/types/src/codec/tests.rs

use super::registry::RECORD_FIELDS;
use super::word::{uint_word, TupleEncoder};
use super::*;
use crate::app::{Address, AttestationDraft, AttestationPayload, Bytes32, OnChainAttestation};
use crate::error::{DecodeError, EncodeError};
use proptest::prelude::*;

fn h(byte: u8) -> Bytes32 {
    Bytes32([byte; 32])
}

fn sample() -> AttestationPayload {
    AttestationPayload {
        agent_id: "agent-1".into(),
        name: "Test Agent".into(),
        preset_id: String::new(),
        tier: "free".into(),
        prompt_hash: h(0xaa),
        manifest_hash: h(0xbb),
        parent_id: String::new(),
        owner_id: "owner-7".into(),
        created_at: 1_738_972_800,
    }
}

fn sample_record(data: Vec<u8>) -> OnChainAttestation {
    OnChainAttestation {
        uid: h(0x13),
        schema: h(0x02),
        time: 1_705_598_848,
        expiration_time: 0,
        revocation_time: 0,
        ref_uid: Bytes32::ZERO,
        recipient: Address([0x11; 20]),
        attester: Address([0xf9; 20]),
        revocable: true,
        data,
    }
}

#[test]
fn head_layout_matches_schema_order() {
    let encoded = encode(&sample());
    assert_eq!(encoded.len() % WORD, 0);
    assert_eq!(&encoded[128..160], &[0xaa; 32]);
    assert_eq!(&encoded[160..192], &[0xbb; 32]);
    assert_eq!(&encoded[256..288], &uint_word(1_738_972_800));
    // First string lives immediately after the head.
    assert_eq!(&encoded[0..32], &uint_word(HEAD_SIZE as u64));
}

#[test]
fn empty_strings_take_one_length_word() {
    let encoded = encode(&sample());
    let reader = WordReader::new(&encoded);
    let preset = reader.length(2 * WORD, "presetId").unwrap();
    let tier = reader.length(3 * WORD, "tier").unwrap();
    assert_eq!(tier - preset, WORD);
    assert_eq!(reader.length(preset, "presetId").unwrap(), 0);
}

#[test]
fn all_empty_payload_round_trips() {
    let payload = AttestationPayload::default();
    let encoded = encode(&payload);
    assert_eq!(encoded.len(), HEAD_SIZE + 6 * WORD);
    assert_eq!(decode(&encoded).unwrap(), payload);
}

#[test]
fn decode_rejects_short_buffers() {
    assert_eq!(
        decode(&[0u8; 287]),
        Err(DecodeError::TooShort {
            len: 287,
            need: HEAD_SIZE
        })
    );
    assert!(matches!(decode(&[]), Err(DecodeError::TooShort { len: 0, .. })));
}

#[test]
fn decode_rejects_out_of_range_offsets() {
    let mut encoded = encode(&sample());
    encoded[WORD - 2..WORD].copy_from_slice(&[0xff, 0xff]);
    assert!(matches!(
        decode(&encoded),
        Err(DecodeError::Truncated { field: "agentId", .. })
    ));
}

#[test]
fn decode_rejects_lengths_past_the_end() {
    let mut encoded = encode(&sample());
    let len = encoded.len();
    // The owner string is the last tail entry; inflate its length.
    let owner_at = WordReader::new(&encoded).length(7 * WORD, "ownerId").unwrap();
    encoded[owner_at..owner_at + WORD].copy_from_slice(&uint_word(len as u64));
    assert!(matches!(
        decode(&encoded),
        Err(DecodeError::Truncated { field: "ownerId", .. })
    ));
}

#[test]
fn decode_rejects_oversized_words() {
    let mut encoded = encode(&sample());
    encoded[8 * WORD] = 1;
    assert_eq!(
        decode(&encoded),
        Err(DecodeError::Overflow {
            field: "createdAt",
            bits: 64
        })
    );

    let mut encoded = encode(&sample());
    encoded[WORD] = 0x80;
    assert!(matches!(
        decode(&encoded),
        Err(DecodeError::Overflow { field: "name", .. })
    ));
}

#[test]
fn decode_rejects_invalid_utf8() {
    let mut encoded = encode(&sample());
    let tier_at = WordReader::new(&encoded).length(3 * WORD, "tier").unwrap();
    encoded[tier_at + WORD] = 0xff;
    assert_eq!(
        decode(&encoded),
        Err(DecodeError::InvalidUtf8 { field: "tier" })
    );
}

#[test]
fn encode_draft_validates_before_encoding() {
    let draft = AttestationDraft {
        agent_id: "agent-1".into(),
        name: "Test Agent".into(),
        prompt_hash: "0x1234".into(),
        manifest_hash: h(1).to_hex(),
        ..Default::default()
    };
    assert!(matches!(
        encode_draft(&draft),
        Err(EncodeError::MalformedHash {
            field: "promptHash",
            ..
        })
    ));

    let draft = AttestationDraft {
        prompt_hash: h(1).to_hex().to_uppercase().replace("0X", "0x"),
        ..draft
    };
    let encoded = encode_draft(&draft).unwrap();
    assert_eq!(decode(&encoded).unwrap().prompt_hash, h(1));
}

#[test]
fn calldata_is_selector_then_uid() {
    let data = get_attestation_calldata(&h(0x13));
    assert_eq!(data.len(), 36);
    assert_eq!(&data[..4], &[0xa3, 0x11, 0x2a, 0x64]);
    assert_eq!(&data[4..], &[0x13; 32]);
}

#[test]
fn record_round_trips_through_registry_layout() {
    let record = sample_record(encode(&sample()));
    let encoded = encode_record(&record);
    assert_eq!(&encoded[..WORD], &uint_word(32));
    let decoded = decode_record(&encoded).unwrap().unwrap();
    assert_eq!(decoded, record);
    assert_eq!(decode(&decoded.data).unwrap(), sample());
}

#[test]
fn record_decodes_at_a_non_default_tuple_base() {
    let record = sample_record(b"opaque".to_vec());
    let mut tuple = TupleEncoder::new(RECORD_FIELDS);
    tuple
        .bytes32(&record.uid)
        .bytes32(&record.schema)
        .uint64(record.time)
        .uint64(record.expiration_time)
        .uint64(7)
        .bytes32(&record.ref_uid)
        .word(word::address_word(&record.recipient))
        .word(word::address_word(&record.attester))
        .uint64(0)
        .dynamic(&record.data);

    let mut buf = uint_word(96).to_vec();
    buf.extend_from_slice(&[0xee; 64]);
    buf.extend(tuple.finish());

    let decoded = decode_record(&buf).unwrap().unwrap();
    assert_eq!(decoded.data, b"opaque");
    assert_eq!(decoded.revocation_time, 7);
    assert!(decoded.is_revoked());
    assert!(!decoded.revocable);
}

#[test]
fn zero_results_mean_not_found() {
    assert_eq!(decode_record(&[]), Ok(None));
    assert_eq!(decode_record(&[0u8; 64]), Ok(None));

    let mut record = sample_record(Vec::new());
    record.uid = Bytes32::ZERO;
    assert_eq!(decode_record(&encode_record(&record)), Ok(None));
}

#[test]
fn malformed_non_zero_results_are_errors() {
    assert!(matches!(
        decode_record(&[1u8; 8]),
        Err(DecodeError::TooShort { len: 8, .. })
    ));
    let mut short = uint_word(32).to_vec();
    short.extend_from_slice(&[1u8; 64]);
    assert!(matches!(
        decode_record(&short),
        Err(DecodeError::TooShort { need: 352, .. })
    ));
}

#[test]
fn record_data_length_past_end_is_truncated() {
    let mut encoded = encode_record(&sample_record(vec![9u8; 40]));
    let len_at = WORD + RECORD_FIELDS * WORD;
    encoded[len_at..len_at + WORD].copy_from_slice(&uint_word(4096));
    assert!(matches!(
        decode_record(&encoded),
        Err(DecodeError::Truncated { field: "data", .. })
    ));
}

prop_compose! {
    fn arb_payload()(
        agent_id in "\\PC{0,40}",
        name in "\\PC{0,80}",
        preset_id in "[a-z0-9-]{0,20}",
        tier in "(free|pro|custom|)",
        prompt_hash in prop_oneof![Just([0u8; 32]), any::<[u8; 32]>()],
        manifest_hash in any::<[u8; 32]>(),
        parent_id in "\\PC{0,33}",
        owner_id in "\\PC{0,64}",
        created_at in any::<u64>(),
    ) -> AttestationPayload {
        AttestationPayload {
            agent_id,
            name,
            preset_id,
            tier,
            prompt_hash: Bytes32(prompt_hash),
            manifest_hash: Bytes32(manifest_hash),
            parent_id,
            owner_id,
            created_at,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn payload_round_trips(payload in arb_payload()) {
        let encoded = encode(&payload);
        prop_assert_eq!(encoded.len() % WORD, 0);
        prop_assert!(encoded.len() >= HEAD_SIZE + 6 * WORD);
        prop_assert_eq!(&encoded[128..160], payload.prompt_hash.as_bytes());
        prop_assert_eq!(decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..700)) {
        let _ = decode(&bytes);
        let _ = decode_record(&bytes);
    }
}
