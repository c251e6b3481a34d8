// [libs/infra/persistence/src/lib.rs]
//!
//! =================================================================
//! APARATO: SUMIDERO DE PERSISTENCIA (V1.0)
//! CLASIFICACIÓN: INFRAESTRUCTURA (ESTRATO L3)
//! RESPONSABILIDAD: ESCRITURA DURABLE DE COINCIDENCIAS EN DISCO
//! =================================================================

#![deny(missing_docs)]

pub mod errors;
pub mod sink;

pub use errors::PersistenceError;
pub use sink::MatchSink;

/// Reexportaciones convenientes para los consumidores de este crate.
pub mod prelude {
    pub use crate::errors::PersistenceError;
    pub use crate::sink::MatchSink;
}
