// Path: crates/cli/tests/proof_exit_codes.rs

use agentid_test_utils::fixtures::KNOWN_ATTESTATION_UID;
use agentid_types::config::{ENV_RPC_URL, ENV_SCHEMA_UID};
use std::process::{Command, Output};

fn agentid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_agentid"))
        .args(args)
        .env_remove(ENV_RPC_URL)
        .env_remove(ENV_SCHEMA_UID)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn malformed_uid_is_a_usage_error() {
    let out = agentid(&["proof", "0x1234"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn bad_rpc_url_is_a_usage_error() {
    let out = agentid(&["proof", KNOWN_ATTESTATION_UID, "--rpc", "not-a-url"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("rpc_url"), "{stderr}");
}

#[test]
fn unreadable_config_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let out = agentid(&[
        "proof",
        KNOWN_ATTESTATION_UID,
        "--config",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(2));
}
