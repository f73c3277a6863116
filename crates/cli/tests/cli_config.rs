// Path: crates/cli/tests/cli_config.rs
use agentid_cli::hashing::hash_manifest_json;
use agentid_cli::load_chain_config;
use agentid_test_utils::fixtures::{AGENT_ONE_CANONICAL, AGENT_ONE_JSON, AGENT_ONE_MANIFEST_HASH, PROMPT_VECTORS};
use agentid_types::config::{ChainConfig, ENV_RPC_URL, ENV_SCHEMA_UID};
use std::collections::HashMap;
use std::io::Write;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_without_file() {
    let config = load_chain_config(None, None, env(&[])).unwrap();
    assert_eq!(config, ChainConfig::default());
}

#[test]
fn layers_apply_in_order() {
    let file = config_file(
        r#"
rpc_url = "https://file.example"
audit_concurrency = 4

[retry]
max_retries = 5
"#,
    );

    let config = load_chain_config(Some(file.path()), None, env(&[])).unwrap();
    assert_eq!(config.rpc_url, "https://file.example");
    assert_eq!(config.audit_concurrency, 4);
    assert_eq!(config.retry.max_retries, 5);
    assert_eq!(config.chain_id, 8453);

    let vars = [(ENV_RPC_URL, "https://env.example")];
    let config = load_chain_config(Some(file.path()), None, env(&vars)).unwrap();
    assert_eq!(config.rpc_url, "https://env.example");

    let config =
        load_chain_config(Some(file.path()), Some("http://127.0.0.1:8545"), env(&vars)).unwrap();
    assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
}

#[test]
fn schema_uid_from_env() {
    let uid = format!("0x{}", "ab".repeat(32));
    let config = load_chain_config(None, None, env(&[(ENV_SCHEMA_UID, uid.as_str())])).unwrap();
    assert_eq!(config.schema_uid.to_hex(), uid);

    assert!(load_chain_config(None, None, env(&[(ENV_SCHEMA_UID, "0x12")])).is_err());
}

#[test]
fn rejects_bad_files_and_values() {
    let unknown = config_file("rpc_endpoint = \"https://x\"\n");
    assert!(load_chain_config(Some(unknown.path()), None, env(&[])).is_err());

    let zero = config_file("audit_concurrency = 0\n");
    let err = load_chain_config(Some(zero.path()), None, env(&[])).unwrap_err();
    assert!(format!("{err:#}").contains("audit_concurrency"));

    assert!(load_chain_config(None, Some("ws://node"), env(&[])).is_err());

    let missing = std::path::Path::new("/definitely/not/here.toml");
    assert!(load_chain_config(Some(missing), None, env(&[])).is_err());
}

#[test]
fn hashes_manifest_file_contents() {
    let hashed = hash_manifest_json(AGENT_ONE_JSON).unwrap();
    assert_eq!(hashed.manifest.agent_id, "agent-1");
    assert_eq!(hashed.canonical, AGENT_ONE_CANONICAL);
    assert_eq!(hashed.fingerprint.manifest_hash.to_hex(), AGENT_ONE_MANIFEST_HASH);
    assert_eq!(hashed.fingerprint.prompt_hash.to_hex(), PROMPT_VECTORS[0].1);

    assert!(hash_manifest_json(r#"{"agentId": "x"}"#).is_err());
}
