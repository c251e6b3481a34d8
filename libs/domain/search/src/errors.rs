// [libs/domain/search/src/errors.rs]
//! Catálogo de fallos de la fachada de búsqueda.

use thiserror::Error;

/// Errores producidos al configurar o conducir una búsqueda vanity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Un parámetro de la fachada (conteo de hilos, conteo objetivo, etc.)
    /// es inválido.
    #[error("invalid search argument: {0}")]
    InvalidArgument(String),

    /// La búsqueda fue cancelada cooperativamente (`breakOut`) antes de
    /// entregar el número de coincidencias solicitado.
    #[error("search interrupted before satisfying the request")]
    Interrupted,

    /// El probe de construcción detectó que el CSPRNG o la implementación
    /// Ed25519 no se pueden instanciar correctamente; la búsqueda nunca
    /// llega a arrancar ningún trabajador.
    #[error("cryptographic algorithm unavailable: {0}")]
    UnavailableAlgorithm(String),
}
