// [libs/core/keygen/src/rng.rs]
//! Fuente de entropía inyectable para la generación de semillas Ed25519.
//!
//! Una única capacidad (`next_seed`) en lugar de una jerarquía de traits:
//! el motor de búsqueda solo necesita 32 bytes de entropía nueva por
//! candidato, nunca un `Rng` de propósito general.

use rand::rngs::OsRng;
use rand::RngCore;

/// Capacidad de producir semillas de 32 bytes para la construcción de claves
/// de firma. La implementación por defecto ([`OsEntropySource`]) delega en
/// el generador criptográfico del sistema operativo; las pruebas pueden
/// sustituirla por una fuente determinista.
pub trait KeyMaterialSource: Send {
    /// Produce la siguiente semilla de 32 bytes.
    fn next_seed(&mut self) -> [u8; 32];
}

/// Fuente de entropía respaldada por el CSPRNG del sistema operativo
/// (`getrandom`, vía [`rand::rngs::OsRng`]).
#[derive(Default, Debug, Clone, Copy)]
pub struct OsEntropySource;

impl KeyMaterialSource for OsEntropySource {
    fn next_seed(&mut self) -> [u8; 32] {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        seed
    }
}

/// A zero-argument producer of a fresh [`KeyMaterialSource`]. Workers must
/// not share a single source instance unless it is documented thread-safe,
/// so each worker calls [`RngFactory::create`] once at spawn time to get
/// its own independent generator.
pub trait RngFactory: Send + Sync {
    /// Produces a new, independent randomness source.
    fn create(&self) -> Box<dyn KeyMaterialSource>;
}

/// The default factory: every call returns a fresh [`OsEntropySource`].
#[derive(Default, Debug, Clone, Copy)]
pub struct OsRngFactory;

impl RngFactory for OsRngFactory {
    fn create(&self) -> Box<dyn KeyMaterialSource> {
        Box::new(OsEntropySource)
    }
}
