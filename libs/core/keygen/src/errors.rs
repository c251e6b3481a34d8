// [libs/core/keygen/src/errors.rs]
//! Catálogo de fallos de generación de claves.

use thiserror::Error;

/// Errores que puede producir la generación y autoverificación de un par de
/// claves Ed25519.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeygenError {
    /// La fuente de entropía o la construcción de la clave de firma fallaron.
    #[error("signing key construction failed: {0}")]
    UnavailableAlgorithm(String),

    /// La autoverificación opcional de firma (`--sig-verify`) rechazó una
    /// firma producida por la propia clave recién generada.
    #[error("self-check signature verification failed: {0}")]
    GenerationFault(String),
}
