// [libs/core/codec/src/lib.rs]
//!
//! =================================================================
//! APARATO: CODEC BASE58 Y MOTOR DE SUBSECUENCIA (V1.0)
//! CLASIFICACIÓN: PRIMITIVA CRIPTOGRÁFICA (ESTRATO L1)
//! RESPONSABILIDAD: CODIFICACIÓN BASE58 Y COMPARACIÓN DE PATRONES
//! =================================================================
//!
//! Codifica/decodifica claves públicas Ed25519 de 32 bytes en su
//! representación Base58 (alfabeto Bitcoin/Solana) y compila patrones
//! `beginsWith`/`endsWith` en comparadores que evalúan cada candidato sin
//! asignar la `String` final en el camino de rechazo, que es el
//! abrumadoramente más común en una búsqueda vanity.

#![deny(missing_docs)]

mod bignum;

pub mod alphabet;
pub mod errors;
pub mod subsequence;

pub use errors::CodecError;
pub use subsequence::Subsequence;

/// Reexportaciones convenientes para los consumidores de este crate.
pub mod prelude {
    pub use crate::alphabet::{decode, decode_public_key, encode};
    pub use crate::errors::CodecError;
    pub use crate::subsequence::Subsequence;
}
