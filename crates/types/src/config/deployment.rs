// Path: crates/types/src/config/deployment.rs

//! Constants of the Base mainnet attestation deployment.

use crate::app::{Address, Bytes32};

/// Chain id of Base mainnet.
pub const BASE_CHAIN_ID: u64 = 8453;
/// Display name of the default network.
pub const BASE_NETWORK_NAME: &str = "Base L2 Mainnet";
/// Public JSON-RPC endpoint of Base mainnet.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";
/// Attestation explorer for Base mainnet.
pub const DEFAULT_EXPLORER_URL: &str = "https://base.easscan.org";
/// Block explorer for Base mainnet.
pub const DEFAULT_BLOCK_EXPLORER_URL: &str = "https://basescan.org";

/// The attestation registry predeploy, `0x4200...0021`.
pub const REGISTRY_ADDRESS: Address = Address([
    0x42, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x21,
]);

/// The schema registry predeploy, `0x4200...0020`.
pub const SCHEMA_REGISTRY_ADDRESS: Address = Address([
    0x42, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x20,
]);

/// Uid of the registered agent identity schema,
/// `0x026a50b7a0728afcedaa43113558312d894333f705028153eceafd8084e544d2`.
pub const AGENT_IDENTITY_SCHEMA_UID: Bytes32 = Bytes32([
    0x02, 0x6a, 0x50, 0xb7, 0xa0, 0x72, 0x8a, 0xfc, 0xed, 0xaa, 0x43, 0x11, 0x35, 0x58, 0x31,
    0x2d, 0x89, 0x43, 0x33, 0xf7, 0x05, 0x02, 0x81, 0x53, 0xec, 0xea, 0xfd, 0x80, 0x84, 0xe5,
    0x44, 0xd2,
]);

/// The schema definition string registered for agent identities.
pub const AGENT_IDENTITY_SCHEMA: &str = "string agentId,string name,string presetId,string tier,bytes32 promptHash,bytes32 manifestHash,string parentId,string ownerId,uint64 createdAt";
