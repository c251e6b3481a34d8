// [libs/core/keygen/src/lib.rs]
//!
//! =================================================================
//! APARATO: GENERADOR DE CLAVES ED25519 (V1.0)
//! CLASIFICACIÓN: PRIMITIVA CRIPTOGRÁFICA (ESTRATO L1)
//! RESPONSABILIDAD: PRODUCCIÓN Y AUTOVERIFICACIÓN DE PARES DE CLAVES
//! =================================================================
//!
//! Produce pares de claves Ed25519 candidatos para el motor de búsqueda
//! vanity y ofrece una autoverificación opcional de firma para los
//! candidatos que ya superaron el comparador de patrones.

#![deny(missing_docs)]

pub mod errors;
pub mod keypair;
pub mod rng;

pub use errors::KeygenError;
pub use keypair::VanityKeypair;
pub use rng::{KeyMaterialSource, OsEntropySource, OsRngFactory, RngFactory};

/// Reexportaciones convenientes para los consumidores de este crate.
pub mod prelude {
    pub use crate::errors::KeygenError;
    pub use crate::keypair::VanityKeypair;
    pub use crate::rng::{KeyMaterialSource, OsEntropySource, OsRngFactory, RngFactory};
}
