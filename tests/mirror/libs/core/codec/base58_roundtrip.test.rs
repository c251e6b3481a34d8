// [tests/mirror/libs/core/codec/base58_roundtrip.test.rs]
//! Certifica que `alphabet::encode`/`decode` son inversas exactas sobre el
//! espacio completo de claves públicas de 32 bytes, incluyendo los casos de
//! borde de bytes cero iniciales que la convención de relleno Base58 existe
//! precisamente para manejar.

use proptest::prelude::*;
use vanguard_core_codec::alphabet::{decode, encode};

#[test]
fn all_zero_key_round_trips_through_fifty_eight_leading_ones() {
    let key = [0u8; 32];
    let encoded = encode(&key);
    assert_eq!(encoded, "1".repeat(32));
    assert_eq!(decode(&encoded).unwrap(), key.to_vec());
}

#[test]
fn single_leading_zero_byte_round_trips() {
    let mut key = [7u8; 32];
    key[0] = 0;
    let encoded = encode(&key);
    assert!(encoded.starts_with('1'));
    assert_eq!(decode(&encoded).unwrap(), key.to_vec());
}

#[test]
fn all_max_byte_key_round_trips() {
    let key = [0xFFu8; 32];
    let encoded = encode(&key);
    assert_eq!(decode(&encoded).unwrap(), key.to_vec());
}

#[test]
fn decode_rejects_characters_outside_the_alphabet() {
    for banned in ["0xyz", "Oxyz", "Ixyz", "lxyz"] {
        assert!(decode(banned).is_err(), "expected {banned} to be rejected");
    }
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity_over_arbitrary_32_byte_keys(bytes in prop::array::uniform32(any::<u8>())) {
        let encoded = encode(&bytes);
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(decoded, bytes.to_vec());
    }

    #[test]
    fn encoded_length_never_exceeds_forty_four_characters(bytes in prop::array::uniform32(any::<u8>())) {
        let encoded = encode(&bytes);
        prop_assert!(encoded.len() <= 44, "encoded={encoded} len={}", encoded.len());
    }

    #[test]
    fn leading_zero_byte_count_equals_leading_one_char_count(zero_count in 0usize..32) {
        // The byte right after the zero run is forced non-zero so the
        // leading-zero count is exact, not merely a lower bound.
        let mut key = vec![0u8; 32];
        key[zero_count] = 1;
        let encoded = encode(&key);
        let leading_ones = encoded.bytes().take_while(|&b| b == b'1').count();
        prop_assert_eq!(leading_ones, zero_count);
    }
}
