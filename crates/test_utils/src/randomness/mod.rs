//! Deterministic randomness for reproducible tests

use agentid_types::app::{AttestationPayload, Bytes32};
use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Deterministic random number generator for tests
pub struct TestRng {
    rng: StdRng,
}

impl TestRng {
    /// Create a new test RNG with the specified seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a test RNG with the default seed 12345
    pub fn with_default_seed() -> Self {
        Self::new(12345)
    }

    /// Fill a buffer with random bytes
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    /// Generate a random value
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// A random 32-byte value; roughly one in eight is all zero.
    pub fn bytes32(&mut self) -> Bytes32 {
        if self.rng.gen_ratio(1, 8) {
            return Bytes32::ZERO;
        }
        let mut out = [0u8; 32];
        self.rng.fill_bytes(&mut out);
        Bytes32(out)
    }

    /// A random alphanumeric string of up to `max_len` characters, possibly empty.
    pub fn text(&mut self, max_len: usize) -> String {
        let len = self.rng.gen_range(0..=max_len);
        Alphanumeric.sample_string(&mut self.rng, len)
    }

    /// A random attestation payload.
    pub fn payload(&mut self) -> AttestationPayload {
        AttestationPayload {
            agent_id: format!("agent-{}", self.rng.gen_range(1..10_000u32)),
            name: self.text(48),
            preset_id: self.text(16),
            tier: match self.rng.gen_range(0..3) {
                0 => "free",
                1 => "pro",
                _ => "custom",
            }
            .to_string(),
            prompt_hash: self.bytes32(),
            manifest_hash: self.bytes32(),
            parent_id: self.text(12),
            owner_id: self.text(40),
            created_at: self.rng.gen(),
        }
    }

    /// A random non-zero uid.
    pub fn uid(&mut self) -> Bytes32 {
        let mut out = [0u8; 32];
        self.rng.fill_bytes(&mut out);
        if let Some(first) = out.first_mut() {
            *first |= 1;
        }
        Bytes32(out)
    }
}

impl Default for TestRng {
    fn default() -> Self {
        Self::with_default_seed()
    }
}
