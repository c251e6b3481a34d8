// [libs/domain/search/src/facade.rs]
//! `VanitySearch`: la superficie pública de este crate. Compila el patrón,
//! prueba que el generador criptográfico y Ed25519 están disponibles,
//! arranca el generador concurrente, y ofrece las dos formas de consumo
//! que describe el contrato de la búsqueda: bloquear por la siguiente
//! coincidencia individual (`take`) o leerla con un plazo (`poll`).

use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use vanguard_core_codec::Subsequence;
use vanguard_core_keygen::{OsRngFactory, RngFactory, VanityKeypair};
use vanguard_domain_models::{SharedState, VanityMatch};
use vanguard_infra_persistence::MatchSink;

use crate::errors::SearchError;
use crate::generator::ConcurrentGenerator;

/// Número máximo de claves que una sola búsqueda puede pedir (`2^31 - 1`).
const MAX_FIND_KEYS: u64 = (1u64 << 31) - 1;

/// Parámetros de una búsqueda. Espejo del conjunto de argumentos que la
/// CLI (`vanity-search`) expone al usuario.
#[derive(Clone)]
pub struct SearchParams {
    /// Prefijo Base58 que debe tener la clave pública, si se suministra.
    pub begins_with: Option<String>,
    /// Sufijo Base58 que debe tener la clave pública, si se suministra.
    pub ends_with: Option<String>,
    /// Si el patrón distingue mayúsculas de minúsculas.
    pub case_sensitive: bool,
    /// Número de hilos trabajadores. `None` usa el número de CPUs lógicas.
    pub thread_count: Option<usize>,
    /// Si cada candidato que supera el patrón debe además autoverificarse
    /// firmando y validando un mensaje fijo antes de entregarse.
    pub sig_verify: bool,
    /// Cuántas coincidencias debe encontrar la búsqueda antes de que sus
    /// trabajadores se detengan por sí mismos. Debe estar en `1..=2^31-1`.
    pub find_keys: u64,
    /// Directorio donde cada coincidencia se persiste como su propio
    /// archivo, nombrado por su clave pública en Base58.
    pub key_path: PathBuf,
    /// Fábrica de fuentes de entropía, una instancia fresca por
    /// trabajador. `None` usa [`OsRngFactory`].
    pub rng_factory: Option<Arc<dyn RngFactory>>,
}

impl std::fmt::Debug for SearchParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchParams")
            .field("begins_with", &self.begins_with)
            .field("ends_with", &self.ends_with)
            .field("case_sensitive", &self.case_sensitive)
            .field("thread_count", &self.thread_count)
            .field("sig_verify", &self.sig_verify)
            .field("find_keys", &self.find_keys)
            .field("key_path", &self.key_path)
            .field("rng_factory", &self.rng_factory.as_ref().map(|_| "<factory>"))
            .finish()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            begins_with: None,
            ends_with: None,
            case_sensitive: false,
            thread_count: None,
            sig_verify: false,
            find_keys: 1,
            key_path: PathBuf::from("."),
            rng_factory: None,
        }
    }
}

/// Una búsqueda vanity en curso: un conjunto de trabajadores arrancado y su
/// cola de coincidencias.
pub struct VanitySearch {
    generator: ConcurrentGenerator,
    receiver: std::sync::mpsc::Receiver<VanityMatch>,
}

impl VanitySearch {
    /// Compila `params`, prueba que la criptografía subyacente está
    /// disponible y arranca los trabajadores. La búsqueda corre hasta que
    /// cada trabajador observa `found() >= findKeys` por sí mismo, o hasta
    /// que el llamador pide cancelación anticipada con
    /// [`VanitySearch::break_out`].
    pub fn launch(params: SearchParams) -> Result<Self, SearchError> {
        let thread_count = match params.thread_count {
            Some(0) => {
                return Err(SearchError::InvalidArgument(
                    "thread_count must be at least 1".to_string(),
                ))
            }
            Some(n) => n,
            None => num_cpus::get().max(1),
        };

        if params.find_keys < 1 || params.find_keys > MAX_FIND_KEYS {
            return Err(SearchError::InvalidArgument(format!(
                "find_keys must be in 1..={MAX_FIND_KEYS}, got {}",
                params.find_keys
            )));
        }

        let pattern = Subsequence::compile(
            params.begins_with.as_deref(),
            params.ends_with.as_deref(),
            params.case_sensitive,
        )
        .map_err(|e| SearchError::InvalidArgument(e.to_string()))?;

        let rng_factory: Arc<dyn RngFactory> = params
            .rng_factory
            .clone()
            .unwrap_or_else(|| Arc::new(OsRngFactory));

        let mut probe_source = rng_factory.create();
        VanityKeypair::probe_algorithm_available(&mut *probe_source)
            .map_err(|e| SearchError::UnavailableAlgorithm(e.to_string()))?;

        let sink = Arc::new(MatchSink::new(params.key_path.clone()));

        let (generator, receiver) = ConcurrentGenerator::spawn(
            Arc::new(pattern),
            thread_count,
            params.sig_verify,
            params.find_keys,
            rng_factory,
            sink,
        );

        Ok(VanitySearch { generator, receiver })
    }

    /// Estado compartido de la búsqueda, para reportar progreso sin
    /// consumir coincidencias.
    pub fn shared_state(&self) -> Arc<SharedState> {
        self.generator.shared_state()
    }

    /// Coincidencias entregadas hasta el momento.
    pub fn num_found(&self) -> u64 {
        self.shared_state().found()
    }

    /// Candidatos examinados hasta el momento (puede retrasarse respecto al
    /// conteo real, ver [`SharedState::searched`]).
    pub fn num_searched(&self) -> u64 {
        self.shared_state().searched()
    }

    /// Solicita cancelación cooperativa. Los trabajadores en curso
    /// terminan su candidato actual y se detienen en su siguiente límite
    /// de verificación.
    pub fn break_out(&self) {
        self.generator.request_stop();
    }

    /// Bloquea hasta la siguiente coincidencia individual. Devuelve
    /// [`SearchError::Interrupted`] una vez que todos los trabajadores han
    /// terminado (porque alcanzaron `findKeys`, o porque
    /// [`VanitySearch::break_out`] fue llamado) y no queda ninguna
    /// coincidencia pendiente en la cola.
    pub fn take(&self) -> Result<VanityMatch, SearchError> {
        self.receiver.recv().map_err(|_| SearchError::Interrupted)
    }

    /// Espera hasta `timeout` por la siguiente coincidencia individual.
    /// `Ok(None)` significa que el plazo venció sin una nueva coincidencia;
    /// la búsqueda sigue corriendo. `Err(Interrupted)` significa que todos
    /// los trabajadores ya se detuvieron (por ejemplo tras `break_out`).
    pub fn poll(&self, timeout: Duration) -> Result<Option<VanityMatch>, SearchError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(found) => Ok(Some(found)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(SearchError::Interrupted),
        }
    }
}

impl Drop for VanitySearch {
    fn drop(&mut self) {
        self.generator.request_stop();
        self.generator.join();
    }
}
