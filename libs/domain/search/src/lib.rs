// [libs/domain/search/src/lib.rs]
//!
//! =================================================================
//! APARATO: MOTOR DE BÚSQUEDA CONCURRENTE (V1.0)
//! CLASIFICACIÓN: DOMINIO (ESTRATO L2)
//! RESPONSABILIDAD: ORQUESTACIÓN DE TRABAJADORES Y FACHADA PÚBLICA
//! =================================================================
//!
//! Compila un patrón `beginsWith`/`endsWith`, arranca un conjunto de
//! trabajadores sobre hilos de sistema operativo, y entrega las
//! coincidencias por una cola acotada con presión contrarreactiva.

#![deny(missing_docs)]

mod generator;
mod worker;

pub mod errors;
pub mod facade;

pub use errors::SearchError;
pub use facade::{SearchParams, VanitySearch};

/// Reexportaciones convenientes para los consumidores de este crate.
pub mod prelude {
    pub use crate::errors::SearchError;
    pub use crate::facade::{SearchParams, VanitySearch};
}
