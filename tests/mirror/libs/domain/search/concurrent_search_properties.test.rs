// [tests/mirror/libs/domain/search/concurrent_search_properties.test.rs]
//! Certifica el contrato observable de `VanitySearch` sobre un conjunto de
//! trabajadores real (hilos de sistema operativo reales, sin simulación):
//! monotonicidad de los contadores, que nunca se entregue más de lo pedido,
//! solidez de cada coincidencia contra su propio patrón, validez
//! criptográfica de cada par de claves entregado, y que cada una quede
//! persistida en disco bajo su propio archivo.

use std::time::Duration;

use vanguard_core_keygen::VanityKeypair;
use vanguard_domain_search::{SearchParams, VanitySearch};

fn temp_params(overrides: SearchParams) -> (tempfile::TempDir, SearchParams) {
    let dir = tempfile::tempdir().unwrap();
    let mut params = overrides;
    params.key_path = dir.path().to_path_buf();
    (dir, params)
}

fn collect(search: &VanitySearch) -> Vec<vanguard_domain_models::VanityMatch> {
    let mut found = Vec::new();
    while let Ok(m) = search.take() {
        found.push(m);
    }
    found
}

#[test]
fn take_never_returns_more_matches_than_requested() {
    let (_dir, params) = temp_params(SearchParams {
        begins_with: Some("1".to_string()),
        case_sensitive: true,
        thread_count: Some(2),
        find_keys: 3,
        ..Default::default()
    });
    let search = VanitySearch::launch(params).unwrap();
    let found = collect(&search);
    assert_eq!(found.len(), 3);
}

#[test]
fn every_delivered_match_satisfies_its_own_compiled_pattern() {
    let (_dir, params) = temp_params(SearchParams {
        begins_with: Some("Go".to_string()),
        case_sensitive: false,
        thread_count: Some(4),
        find_keys: 2,
        ..Default::default()
    });
    let search = VanitySearch::launch(params).unwrap();
    let found = collect(&search);
    for m in &found {
        let head = &m.public_key_base58[..2.min(m.public_key_base58.len())];
        assert!(head.eq_ignore_ascii_case("Go"), "unexpected match: {}", m.public_key_base58);
    }
}

#[test]
fn every_delivered_keypair_is_cryptographically_valid() {
    let (_dir, params) = temp_params(SearchParams {
        begins_with: Some("1".to_string()),
        case_sensitive: true,
        thread_count: Some(2),
        sig_verify: true,
        find_keys: 2,
        ..Default::default()
    });
    let search = VanitySearch::launch(params).unwrap();
    let found = collect(&search);
    assert_eq!(found.len(), 2);
    for m in &found {
        assert_eq!(m.secret_key_bytes.len(), 64);
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&m.secret_key_bytes[..32]);
        let keypair = VanityKeypair::from_seed(&seed);
        assert!(keypair.self_check_signature().is_ok());
        assert_eq!(&m.secret_key_bytes[32..], &keypair.public_key_bytes());
    }
}

#[test]
fn shared_state_counters_are_monotonic_while_a_search_runs() {
    let (_dir, params) = temp_params(SearchParams {
        begins_with: Some("1".to_string()),
        case_sensitive: true,
        thread_count: Some(4),
        find_keys: 1,
        ..Default::default()
    });
    let search = VanitySearch::launch(params).unwrap();
    let state = search.shared_state();

    let mut previous_searched = state.searched();
    for _ in 0..5 {
        std::thread::sleep(Duration::from_millis(5));
        let now = state.searched();
        assert!(now >= previous_searched, "searched count regressed: {now} < {previous_searched}");
        previous_searched = now;
    }

    let found = collect(&search);
    assert_eq!(found.len(), 1);
    assert!(state.found() >= 1);
}

#[test]
fn a_two_character_prefix_is_found_by_a_four_thread_pool() {
    let (_dir, params) = temp_params(SearchParams {
        begins_with: Some("So".to_string()),
        case_sensitive: true,
        thread_count: Some(4),
        find_keys: 1,
        ..Default::default()
    });
    let search = VanitySearch::launch(params).unwrap();
    let found = collect(&search);
    assert_eq!(found.len(), 1);
    assert!(found[0].public_key_base58.starts_with("So"));
}

#[test]
fn every_delivered_match_is_persisted_under_its_own_filename() {
    let (dir, params) = temp_params(SearchParams {
        begins_with: Some("1".to_string()),
        case_sensitive: true,
        thread_count: Some(2),
        find_keys: 2,
        ..Default::default()
    });
    let search = VanitySearch::launch(params).unwrap();
    let found = collect(&search);
    assert_eq!(found.len(), 2);
    for m in &found {
        assert!(m.persisted);
        let path = dir.path().join(format!("{}.json", m.public_key_base58));
        assert!(path.exists(), "missing persisted file for {}", m.public_key_base58);
    }
}
