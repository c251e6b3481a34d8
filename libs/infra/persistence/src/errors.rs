// [libs/infra/persistence/src/errors.rs]
//! Catálogo de fallos del sumidero de persistencia.

use thiserror::Error;

/// Errores que puede producir la escritura del archivo de coincidencias.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Una operación de E/S (lectura, escritura o renombrado atómico) falló,
    /// incluso tras el reintento único.
    #[error("persistence I/O fault: {0}")]
    IoFault(String),
}
