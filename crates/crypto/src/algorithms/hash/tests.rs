//! Tests for the SHA-256 helpers

use super::{sha256, sha256_bytes32};

#[test]
fn test_known_vectors() {
    assert_eq!(
        sha256_bytes32(b"").to_hex(),
        "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        sha256_bytes32("abc").to_hex(),
        "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_byte_and_text_inputs_agree() {
    let message = "test message";
    assert_eq!(sha256(message), sha256(message.as_bytes()));
    assert_eq!(sha256(message), sha256(message.as_bytes().to_vec()));
    assert_ne!(sha256(message), sha256("test message."));
}
