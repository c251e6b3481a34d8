// [libs/domain/models/src/result.rs]
//! `VanityMatch`: a match delivered by the search engine.
//!
//! Called `VanityMatch` and not `Result` so it never shadows
//! `std::result::Result` at any call site; the fields are the same ones
//! the search contract describes.

use serde::{Deserialize, Serialize};

use vanguard_core_codec::alphabet::encode as base58_encode;
use vanguard_core_keygen::VanityKeypair;

/// A keypair that satisfied the requested `beginsWith`/`endsWith` pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VanityMatch {
    /// The raw 32-byte Ed25519 public key.
    pub public_key: [u8; 32],
    /// The public key, encoded as base58.
    pub public_key_base58: String,
    /// The 64-byte expanded secret key (seed ‖ public), the same layout a
    /// Solana keypair file uses.
    pub secret_key_bytes: Vec<u8>,
    /// How many candidates were generated and discarded, across the
    /// worker pool, before (and including) this one. An approximate
    /// snapshot: the shared counter it was read from may lag other
    /// workers' progress by up to `checkEvery` candidates.
    pub attempts: u64,
    /// Elapsed time since the concurrent generator started until this
    /// candidate was accepted, measured with a monotonic clock.
    pub duration_nanos: u64,
    /// `false` if persisting this match to disk failed even after the
    /// single retry — the match is still delivered to the consumer
    /// rather than dropped, but the caller should treat its on-disk copy
    /// as missing and may want to re-persist it.
    pub persisted: bool,
}

impl VanityMatch {
    /// Builds a match from an already-generated keypair. `persisted`
    /// starts `true`; the worker flips it to `false` if disk persistence
    /// fails after its retry.
    pub fn from_keypair(keypair: &VanityKeypair, attempts: u64, duration_nanos: u64) -> Self {
        let public_key = keypair.public_key_bytes();
        VanityMatch {
            public_key,
            public_key_base58: base58_encode(&public_key),
            secret_key_bytes: keypair.to_keypair_bytes().to_vec(),
            attempts,
            duration_nanos,
            persisted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_keypair_embeds_expected_lengths() {
        let keypair = VanityKeypair::from_seed(&[5u8; 32]);
        let m = VanityMatch::from_keypair(&keypair, 42, 1_000_000);
        assert_eq!(m.secret_key_bytes.len(), 64);
        assert_eq!(m.public_key, keypair.public_key_bytes());
        assert!(!m.public_key_base58.is_empty());
        assert_eq!(m.attempts, 42);
        assert_eq!(m.duration_nanos, 1_000_000);
        assert!(m.persisted);
    }

    #[test]
    fn public_key_field_matches_the_tail_of_the_expanded_secret_key() {
        let keypair = VanityKeypair::from_seed(&[2u8; 32]);
        let m = VanityMatch::from_keypair(&keypair, 1, 1);
        assert_eq!(&m.secret_key_bytes[32..], &m.public_key);
    }

    #[test]
    fn serializes_secret_key_as_plain_number_array() {
        let keypair = VanityKeypair::from_seed(&[1u8; 32]);
        let m = VanityMatch::from_keypair(&keypair, 1, 1);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"secret_key_bytes\":["));
    }
}
