// [libs/core/codec/src/errors.rs]
//! Catálogo de fallos del codec Base58 y del compilador de patrones.

use thiserror::Error;

/// Errores de validación y codificación del estrato de codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// La cadena de patrón está vacía o excede los 44 caracteres admitidos.
    #[error("pattern length must be between 1 and 44 characters, got {0}")]
    InvalidPatternLength(usize),

    /// Un carácter del patrón no pertenece al alfabeto Base58.
    #[error("character '{0}' at position {1} is not part of the base58 alphabet")]
    InvalidAlphabetCharacter(char, usize),

    /// Un prefijo y un sufijo combinados exceden la longitud máxima de una clave codificada.
    #[error("combined prefix ({prefix_len}) and suffix ({suffix_len}) length exceeds 44 characters")]
    PatternOverlap {
        /// Longitud del prefijo compilado.
        prefix_len: usize,
        /// Longitud del sufijo compilado.
        suffix_len: usize,
    },

    /// Ni `beginsWith` ni `endsWith` fueron suministrados.
    #[error("at least one of beginsWith or endsWith must be supplied")]
    NoAnchorSupplied,

    /// La entrada binaria decodificada no corresponde a una clave pública de 32 bytes.
    #[error("decoded payload has {0} bytes, expected 32")]
    InvalidDecodedLength(usize),

    /// La cadena de entrada contiene un carácter fuera del alfabeto Base58 durante la decodificación.
    #[error("invalid base58 string: {0}")]
    InvalidBase58String(String),
}
