// [libs/domain/search/src/generator.rs]
//! `ConcurrentGenerator`: el conjunto de trabajadores que comparten un
//! patrón compilado, un estado atómico y el extremo productor de una cola
//! acotada. El extremo consumidor se devuelve a la fachada; la cola acotada
//! (`std::sync::mpsc::sync_channel`) aplica presión contrarreactiva: un
//! trabajador se bloquea en `send` si la fachada no ha drenado coincidencias
//! anteriores.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use vanguard_core_codec::Subsequence;
use vanguard_core_keygen::RngFactory;
use vanguard_domain_models::{GeneratorPhase, SharedState, VanityMatch};
use vanguard_infra_persistence::MatchSink;

use crate::worker::{self, WorkerConfig};

/// Cuántos candidatos genera cada trabajador entre cada lectura de la
/// bandera de cancelación cooperativa y cada volcado de su contador local.
/// También fija, multiplicado por el número de trabajadores, la capacidad
/// de la cola acotada de coincidencias.
const DEFAULT_CHECK_EVERY: u64 = 262_144;

/// Un conjunto de trabajadores en ejecución, compartiendo estado atómico y
/// un patrón compilado inmutable.
pub struct ConcurrentGenerator {
    state: Arc<SharedState>,
    handles: Vec<JoinHandle<()>>,
}

impl ConcurrentGenerator {
    /// Arranca `thread_count` trabajadores evaluando `pattern`, cada uno con
    /// su propia fuente de entropía obtenida de `rng_factory`, persistiendo
    /// cada coincidencia en `sink` antes de entregarla. Los trabajadores se
    /// detienen solos en cuanto `found() >= target`. Devuelve el generador
    /// junto con el extremo consumidor de su cola de coincidencias.
    pub fn spawn(
        pattern: Arc<Subsequence>,
        thread_count: usize,
        sig_verify: bool,
        target: u64,
        rng_factory: Arc<dyn RngFactory>,
        sink: Arc<MatchSink>,
    ) -> (Self, Receiver<VanityMatch>) {
        let state = Arc::new(SharedState::new(target));
        let queue_capacity = DEFAULT_CHECK_EVERY as usize * thread_count.max(1);
        let (sender, receiver) = mpsc::sync_channel(queue_capacity);
        let started_at = Instant::now();

        let mut handles = Vec::with_capacity(thread_count);
        for worker_id in 0..thread_count {
            let config = WorkerConfig {
                worker_id,
                pattern: Arc::clone(&pattern),
                state: Arc::clone(&state),
                sender: sender.clone(),
                rng_source: rng_factory.create(),
                sink: Arc::clone(&sink),
                check_every: DEFAULT_CHECK_EVERY,
                sig_verify,
                started_at,
            };
            handles.push(std::thread::spawn(move || worker::run(config)));
        }
        // Drop our own sender so the channel closes once every worker has
        // exited, letting the facade's `recv_timeout`/iteration observe
        // end-of-stream instead of blocking forever.
        drop(sender);

        tracing::info!(thread_count, target, "🔥 generador concurrente arrancado");
        (ConcurrentGenerator { state, handles }, receiver)
    }

    /// Estado compartido, para que la fachada pueda reportar progreso sin
    /// consumir la cola de coincidencias.
    pub fn shared_state(&self) -> Arc<SharedState> {
        Arc::clone(&self.state)
    }

    /// Solicita cancelación cooperativa (`breakOut`). Los trabajadores la
    /// observan en su siguiente límite de `checkEvery` candidatos.
    pub fn request_stop(&self) {
        self.state.transition_to(GeneratorPhase::Draining);
        self.state.request_stop();
    }

    /// Bloquea hasta que todos los trabajadores terminen y marca la fase
    /// final como [`GeneratorPhase::Terminated`].
    pub fn join(&mut self) {
        if self.state.phase() == GeneratorPhase::Running {
            self.state.transition_to(GeneratorPhase::Draining);
        }
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
        self.state.transition_to(GeneratorPhase::Terminated);
        tracing::info!("💠 generador concurrente terminado");
    }
}
