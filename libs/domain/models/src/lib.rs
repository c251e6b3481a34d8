// [libs/domain/models/src/lib.rs]
//!
//! =================================================================
//! APARATO: MODELOS DE DOMINIO DE LA BÚSQUEDA VANITY (V1.0)
//! CLASIFICACIÓN: DOMINIO (ESTRATO L2)
//! RESPONSABILIDAD: TIPOS COMPARTIDOS ENTRE TRABAJADORES Y LA FACHADA
//! =================================================================

#![deny(missing_docs)]

pub mod result;
pub mod shared_state;

pub use result::VanityMatch;
pub use shared_state::{GeneratorPhase, SharedState};

/// Reexportaciones convenientes para los consumidores de este crate.
pub mod prelude {
    pub use crate::result::VanityMatch;
    pub use crate::shared_state::{GeneratorPhase, SharedState};
}
