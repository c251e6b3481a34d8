// [libs/core/keygen/src/keypair.rs]
//! `VanityKeypair`: el envoltorio de un par de claves Ed25519 recién
//! generado. El secreto se limpia de memoria al destruirse (`zeroize`) y
//! nunca aparece en su `Debug`.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};

use crate::errors::KeygenError;
use crate::rng::KeyMaterialSource;

/// Mensaje fijo firmado por la autoverificación opcional. No es secreto:
/// solo existe para confirmar que firma y verificación son inversas sobre
/// la clave recién construida.
const SELF_CHECK_MESSAGE: &[u8] = b"vanguard-core-keygen/self-check/v1";

/// Un par de claves Ed25519 candidato. Envuelve `SigningKey` sin exponer el
/// material secreto salvo a través de [`VanityKeypair::to_keypair_bytes`].
pub struct VanityKeypair {
    signing_key: SigningKey,
}

impl VanityKeypair {
    /// Genera un nuevo par de claves extrayendo una semilla de 32 bytes de
    /// `source`.
    pub fn generate(source: &mut impl KeyMaterialSource) -> Result<Self, KeygenError> {
        let seed = source.next_seed();
        let signing_key = SigningKey::from_bytes(&seed);
        Ok(VanityKeypair { signing_key })
    }

    /// Construye un par de claves a partir de una semilla ya conocida (usado
    /// por las pruebas y por la recarga desde el archivo de persistencia).
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        VanityKeypair {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Los 32 bytes de la clave pública Ed25519, tal como se codificarían en
    /// Base58 para el comparador de patrones.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Los 64 bytes de la clave expandida (semilla ‖ pública), el mismo
    /// diseño que produce `SigningKey::to_keypair_bytes`.
    pub fn to_keypair_bytes(&self) -> [u8; 64] {
        self.signing_key.to_keypair_bytes()
    }

    /// Firma y verifica inmediatamente un mensaje fijo contra esta misma
    /// clave, como chequeo de cordura antes de entregar un candidato como
    /// coincidencia. No es parte del bucle caliente: se invoca solo para
    /// los (pocos) candidatos que ya superaron el comparador de patrones.
    pub fn self_check_signature(&self) -> Result<(), KeygenError> {
        let signature: Signature = self.signing_key.sign(SELF_CHECK_MESSAGE);
        self.signing_key
            .verifying_key()
            .verify(SELF_CHECK_MESSAGE, &signature)
            .map_err(|e| KeygenError::GenerationFault(e.to_string()))
    }

    /// Construction-time sanity probe: draws one throwaway seed from
    /// `source` and confirms sign/verify round-trips on it. The facade
    /// calls this once before starting any worker, so a broken CSPRNG or
    /// Ed25519 implementation fails the whole search immediately instead
    /// of surfacing only candidate-by-candidate through `sigVerify`.
    pub fn probe_algorithm_available(source: &mut dyn KeyMaterialSource) -> Result<(), KeygenError> {
        let seed = source.next_seed();
        let keypair = VanityKeypair::from_seed(&seed);
        keypair.self_check_signature().map_err(|e| {
            KeygenError::UnavailableAlgorithm(format!(
                "Ed25519 sign/verify self-test failed: {e}"
            ))
        })
    }
}

impl std::fmt::Debug for VanityKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VanityKeypair")
            .field("public_key", &hex::encode(self.public_key_bytes()))
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
