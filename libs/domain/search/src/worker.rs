// [libs/domain/search/src/worker.rs]
//! El bucle caliente de un único trabajador: genera un candidato, lo
//! evalúa contra el patrón compilado y, si coincide, lo persiste y lo
//! entrega por la cola acotada. Corre en un hilo de sistema operativo
//! dedicado — no hay puntos de suspensión cooperativa, así que un runtime
//! async no aportaría nada aquí.
//!
//! Un trabajador observa dos condiciones de parada: la bandera de
//! cancelación cooperativa (`breakOut`), revisada en los límites de
//! `checkEvery` candidatos, y su propio objetivo compartido (`target`):
//! en cuanto `found() >= target()`, deja de generar sin esperar a que la
//! fachada se lo pida. El contador de candidatos examinados se acumula en
//! una variable local y se vuelca al contador atómico compartido solo en
//! esos mismos límites, para no contender sobre él en cada candidato.
//!
//! Dos trabajadores pueden encontrar una coincidencia en el mismo instante;
//! `SharedState::try_claim_slot` reserva atómicamente uno de los `target`
//! cupos antes de persistir o entregar, así que el total jamás entregado
//! supera `target` aunque varios trabajadores coincidan a la vez.

use std::sync::mpsc::SyncSender;
use std::sync::Arc;
use std::time::Instant;

use vanguard_core_codec::Subsequence;
use vanguard_core_keygen::{KeyMaterialSource, VanityKeypair};
use vanguard_domain_models::{SharedState, VanityMatch};
use vanguard_infra_persistence::MatchSink;

/// Parámetros de un trabajador, agrupados para no pasar argumentos sueltos
/// a [`run`].
pub struct WorkerConfig {
    /// Identificador del trabajador, solo para trazas.
    pub worker_id: usize,
    /// Patrón compilado compartido por todos los trabajadores.
    pub pattern: Arc<Subsequence>,
    /// Contadores, objetivo y bandera de cancelación compartidos.
    pub state: Arc<SharedState>,
    /// Extremo productor de la cola acotada de coincidencias.
    pub sender: SyncSender<VanityMatch>,
    /// Fuente de entropía propia de este trabajador — nunca compartida con
    /// otro hilo.
    pub rng_source: Box<dyn KeyMaterialSource>,
    /// Sumidero de persistencia, compartido por todos los trabajadores.
    pub sink: Arc<MatchSink>,
    /// Cuántos candidatos generar entre cada lectura de la bandera de
    /// cancelación y cada volcado del contador local al compartido.
    pub check_every: u64,
    /// Si se debe firmar y verificar un mensaje fijo antes de entregar un
    /// candidato, como chequeo de cordura adicional.
    pub sig_verify: bool,
    /// Instante de arranque del generador concurrente, para el campo
    /// `duration_nanos` de cada coincidencia.
    pub started_at: Instant,
}

/// Vuelca `pending` candidatos examinados al contador compartido y reporta
/// si el trabajador debe detenerse (objetivo alcanzado o cancelación
/// solicitada). Deja `pending` en cero.
fn flush_mismatches(state: &SharedState, pending: &mut u64) -> bool {
    if *pending > 0 {
        state.add_searched(*pending);
        *pending = 0;
    }
    state.found() >= state.target() || state.stop_requested()
}

/// Ejecuta el bucle de un trabajador hasta que se alcanza el objetivo
/// compartido, se solicita cancelación, o el extremo receptor de la cola
/// se descarta.
pub fn run(config: WorkerConfig) {
    let WorkerConfig {
        worker_id,
        pattern,
        state,
        sender,
        mut rng_source,
        sink,
        check_every,
        sig_verify,
        started_at,
    } = config;

    tracing::debug!(worker_id, "🚀 worker arrancando");
    let mut since_check: u64 = 0;
    let mut pending_mismatches: u64 = 0;

    loop {
        if since_check >= check_every {
            since_check = 0;
            if flush_mismatches(&state, &mut pending_mismatches) {
                tracing::debug!(worker_id, "🛑 worker deteniéndose: objetivo alcanzado o breakOut solicitado");
                break;
            }
        }
        since_check += 1;

        let seed = rng_source.next_seed();
        let keypair = VanityKeypair::from_seed(&seed);
        let public_key = keypair.public_key_bytes();

        if !pattern.matches(&public_key) {
            pending_mismatches += 1;
            continue;
        }

        if sig_verify && keypair.self_check_signature().is_err() {
            tracing::debug!(worker_id, "❌ candidato descartado: autoverificación de firma falló");
            pending_mismatches += 1;
            continue;
        }

        // Another worker may have matched at the same instant; only the
        // first `target` claimants actually get to persist and deliver a
        // result, so the total ever sent never exceeds `target` even under
        // a simultaneous multi-worker match.
        if !state.try_claim_slot() {
            state.add_searched(pending_mismatches + 1);
            tracing::debug!(worker_id, "🛑 worker deteniéndose: objetivo ya alcanzado por otro trabajador");
            break;
        }

        let attempts = state.add_searched(pending_mismatches + 1);
        pending_mismatches = 0;

        let elapsed_nanos = started_at.elapsed().as_nanos() as u64;
        let mut found_match = VanityMatch::from_keypair(&keypair, attempts, elapsed_nanos);
        tracing::info!(worker_id, public_key = %found_match.public_key_base58, "🎯 coincidencia encontrada");

        if let Err(e) = sink.persist(&found_match) {
            tracing::error!(worker_id, error = %e, "⚠️ no se pudo persistir la coincidencia");
            found_match.persisted = false;
        }

        let found_total = state.record_found();
        let should_stop = found_total >= state.target() || state.stop_requested();

        if sender.send(found_match).is_err() {
            tracing::debug!(worker_id, "receptor descartado, worker termina");
            break;
        }

        if should_stop {
            tracing::debug!(worker_id, "🛑 worker deteniéndose: objetivo alcanzado o breakOut solicitado");
            break;
        }
    }
}
