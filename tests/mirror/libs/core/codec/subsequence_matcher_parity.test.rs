// [tests/mirror/libs/core/codec/subsequence_matcher_parity.test.rs]
//! Certifica que el comparador rápido de `Subsequence` (que nunca asigna la
//! `String` Base58 completa en el camino de rechazo) coincide exactamente
//! con el oráculo de codificar-y-comparar-cadenas, sobre patrones y claves
//! arbitrarios.

use proptest::prelude::*;
use vanguard_core_codec::alphabet::encode;
use vanguard_core_codec::subsequence::Subsequence;

/// Caracteres válidos del alfabeto Base58, para generar patrones que
/// `Subsequence::compile` nunca rechace por carácter inválido.
const ALPHABET_CHARS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn alphabet_char() -> impl Strategy<Value = char> {
    (0usize..ALPHABET_CHARS.len()).prop_map(|i| ALPHABET_CHARS.chars().nth(i).unwrap())
}

fn pattern_string(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(alphabet_char(), 1..=max_len).prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn trivial_single_char_prefix_matches_every_key_in_its_class() {
    let pattern = Subsequence::compile(Some("1"), None, true).unwrap();
    let all_zero = [0u8; 32];
    assert!(pattern.matches(&all_zero));

    let mut one_leading_zero = [5u8; 32];
    one_leading_zero[0] = 0;
    assert!(pattern.matches(&one_leading_zero));
}

#[test]
fn combined_prefix_and_suffix_requires_both_sides() {
    let pattern = Subsequence::compile(Some("Sol"), Some("ana"), true).unwrap();
    for seed in 0u8..80 {
        let key: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(seed).wrapping_add(3));
        let full = encode(&key);
        let expected = full.starts_with("Sol") && full.ends_with("ana");
        assert_eq!(pattern.matches(&key), expected, "seed={seed} encoded={full}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prefix_only_pattern_agrees_with_string_oracle(
        pattern in pattern_string(6),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        let compiled = Subsequence::compile(Some(&pattern), None, true).unwrap();
        let full = encode(&key);
        let expected = full.starts_with(pattern.as_str());
        prop_assert_eq!(compiled.matches(&key), expected);
    }

    #[test]
    fn suffix_only_pattern_agrees_with_string_oracle(
        pattern in pattern_string(6),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        let compiled = Subsequence::compile(None, Some(&pattern), true).unwrap();
        let full = encode(&key);
        let expected = full.ends_with(pattern.as_str());
        prop_assert_eq!(compiled.matches(&key), expected);
    }

    #[test]
    fn case_insensitive_prefix_agrees_with_string_oracle(
        pattern in pattern_string(6),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        let compiled = Subsequence::compile(Some(&pattern), None, false).unwrap();
        let full = encode(&key);
        let head = &full[..pattern.len().min(full.len())];
        let expected = full.len() >= pattern.len() && head.eq_ignore_ascii_case(&pattern);
        prop_assert_eq!(compiled.matches(&key), expected);
    }

    #[test]
    fn case_insensitive_suffix_agrees_with_string_oracle(
        pattern in pattern_string(6),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        let compiled = Subsequence::compile(None, Some(&pattern), false).unwrap();
        let full = encode(&key);
        let tail = &full[full.len().saturating_sub(pattern.len())..];
        let expected = full.len() >= pattern.len() && tail.eq_ignore_ascii_case(&pattern);
        prop_assert_eq!(compiled.matches(&key), expected);
    }
}
