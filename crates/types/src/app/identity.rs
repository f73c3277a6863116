// Path: crates/types/src/app/identity.rs

//! Fixed-width identifiers rendered as `0x`-prefixed lowercase hex.
//!
//! Every hash, uid and schema id that crosses a module boundary is carried as a
//! `Bytes32`, so a malformed value is rejected once at the edge instead of being
//! re-checked by each consumer.

use crate::error::MalformedHash;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 32-byte value such as a SHA-256 digest, an attestation uid or a schema uid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bytes32(pub [u8; 32]);

impl Bytes32 {
    /// The all-zero value, used by the registry to signal "no attestation".
    pub const ZERO: Bytes32 = Bytes32([0u8; 32]);

    /// Parses `0x` followed by exactly 64 hex digits of either case.
    pub fn from_hex(s: &str) -> Result<Self, MalformedHash> {
        let malformed = || MalformedHash {
            value: s.to_string(),
        };
        let digits = s.strip_prefix("0x").ok_or_else(malformed)?;
        if digits.len() != 64 {
            return Err(malformed());
        }
        let mut out = [0u8; 32];
        hex::decode_to_slice(digits, &mut out).map_err(|_| malformed())?;
        Ok(Self(out))
    }

    /// Renders the value as `0x` followed by 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns true if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Borrows the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Returns true if `s` is `0x` followed by exactly 64 hex digits.
pub fn is_valid_bytes32(s: &str) -> bool {
    Bytes32::from_hex(s).is_ok()
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Bytes32 {
    type Err = MalformedHash;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes32({})", self.to_hex())
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// A 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Parses `0x` followed by exactly 40 hex digits of either case.
    pub fn from_hex(s: &str) -> Result<Self, MalformedHash> {
        let malformed = || MalformedHash {
            value: s.to_string(),
        };
        let digits = s.strip_prefix("0x").ok_or_else(malformed)?;
        if digits.len() != 40 {
            return Err(malformed());
        }
        let mut out = [0u8; 20];
        hex::decode_to_slice(digits, &mut out).map_err(|_| malformed())?;
        Ok(Self(out))
    }

    /// Renders the address as `0x` followed by 40 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = MalformedHash;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UID: &str = "0x13da22148f63504eac18935143f20349a619b7ebeaf416f0fa5362db923f0724";

    #[test]
    fn parses_and_renders_lowercase() {
        let upper = UID.replace("da22", "DA22");
        let parsed = Bytes32::from_hex(&upper).unwrap();
        assert_eq!(parsed.to_hex(), UID);
        assert_eq!(parsed.to_string(), UID);
    }

    #[test]
    fn rejects_malformed_values() {
        for bad in [
            "",
            "0x",
            "13da22148f63504eac18935143f20349a619b7ebeaf416f0fa5362db923f0724",
            "0x13da22148f63504eac18935143f20349a619b7ebeaf416f0fa5362db923f072",
            "0x13da22148f63504eac18935143f20349a619b7ebeaf416f0fa5362db923f07244",
            "0x13da22148f63504eac18935143f20349a619b7ebeaf416f0fa5362db923f07zz",
            "0X13da22148f63504eac18935143f20349a619b7ebeaf416f0fa5362db923f0724",
        ] {
            assert!(!is_valid_bytes32(bad), "accepted {bad:?}");
        }
        assert!(is_valid_bytes32(UID));
    }

    #[test]
    fn zero_detection() {
        assert!(Bytes32::ZERO.is_zero());
        assert!(!Bytes32::from_hex(UID).unwrap().is_zero());
    }

    #[test]
    fn serde_uses_hex_strings() {
        let value = Bytes32::from_hex(UID).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{UID}\""));
        let back: Bytes32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert!(serde_json::from_str::<Bytes32>("\"0x1234\"").is_err());
    }

    #[test]
    fn address_round_trips_checksummed_input() {
        let addr = Address::from_hex("0xf951daD46F0A7d7402556DCaa70Ee4F8bC979824").unwrap();
        assert_eq!(addr.to_hex(), "0xf951dad46f0a7d7402556dcaa70ee4f8bc979824");
        assert!(Address::from_hex("0xf951dad46f").is_err());
    }
}
