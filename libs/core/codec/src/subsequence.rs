// [libs/core/codec/src/subsequence.rs]
//! `Subsequence`: un patrón `beginsWith`/`endsWith` compilado una sola vez
//! por búsqueda y evaluado contra cada clave pública candidata del bucle
//! caliente.
//!
//! El comparador de prefijo compara valores de dígito Base58 directamente
//! (sin asignar la `String` final) contra la representación canónica de la
//! clave. El comparador de sufijo, cuando el patrón es sensible a
//! mayúsculas, usa el truco de aritmética modular: el valor numérico de los
//! últimos `k` dígitos Base58 de un entero es exactamente ese entero módulo
//! `58^k`, por lo que basta precomputar `58^k` y el valor objetivo una vez
//! por patrón.

use crate::alphabet::{digit_mask_case_insensitive, digit_value};
use crate::bignum::{self, WideUint};
use crate::errors::CodecError;

const MAX_PATTERN_LEN: usize = 44;

#[derive(Clone, Debug)]
struct CompiledAnchor {
    /// Máscara de bits por posición: bit `d` encendido si el dígito de valor
    /// `d` es aceptado en esa posición.
    masks: Vec<u64>,
}

impl CompiledAnchor {
    fn compile(pattern: &str, case_sensitive: bool) -> Result<Self, CodecError> {
        if pattern.is_empty() || pattern.len() > MAX_PATTERN_LEN {
            return Err(CodecError::InvalidPatternLength(pattern.len()));
        }
        let mut masks = Vec::with_capacity(pattern.len());
        for (i, c) in pattern.bytes().enumerate() {
            let mask = if case_sensitive {
                let d = digit_value(c)
                    .ok_or_else(|| CodecError::InvalidAlphabetCharacter(c as char, i))?;
                1u64 << d
            } else {
                digit_mask_case_insensitive(c)
                    .ok_or_else(|| CodecError::InvalidAlphabetCharacter(c as char, i))?
            };
            masks.push(mask);
        }
        Ok(CompiledAnchor { masks })
    }

    fn len(&self) -> usize {
        self.masks.len()
    }
}

/// Un patrón `beginsWith`/`endsWith` compilado, listo para evaluarse contra
/// claves públicas de 32 bytes en el bucle caliente de búsqueda.
#[derive(Clone, Debug)]
pub struct Subsequence {
    prefix: Option<CompiledAnchor>,
    suffix_exact: Option<(CompiledAnchor, WideUint, WideUint)>, // (anchor, modulus, target) — sensible a mayúsculas
    suffix_general: Option<CompiledAnchor>, // insensible a mayúsculas, camino por arreglo de dígitos
    case_sensitive: bool,
}

impl Subsequence {
    /// Compila un patrón combinado. Al menos uno de `begins_with` /
    /// `ends_with` debe estar presente. Rechaza combinaciones cuya longitud
    /// conjunta exceda los 44 caracteres que caben en una clave de 32 bytes.
    pub fn compile(
        begins_with: Option<&str>,
        ends_with: Option<&str>,
        case_sensitive: bool,
    ) -> Result<Self, CodecError> {
        if begins_with.is_none() && ends_with.is_none() {
            return Err(CodecError::NoAnchorSupplied);
        }
        let prefix = begins_with
            .map(|p| CompiledAnchor::compile(p, case_sensitive))
            .transpose()?;
        let suffix_anchor = ends_with
            .map(|s| CompiledAnchor::compile(s, case_sensitive))
            .transpose()?;

        let prefix_len = prefix.as_ref().map(CompiledAnchor::len).unwrap_or(0);
        let suffix_len = suffix_anchor.as_ref().map(CompiledAnchor::len).unwrap_or(0);
        if prefix_len + suffix_len > MAX_PATTERN_LEN {
            return Err(CodecError::PatternOverlap {
                prefix_len,
                suffix_len,
            });
        }

        let (suffix_exact, suffix_general) = match (suffix_anchor, case_sensitive) {
            (Some(anchor), true) => {
                let k = anchor.len() as u32;
                let modulus = WideUint::pow58(k);
                let mut target = WideUint::ZERO;
                for &mask in &anchor.masks {
                    let digit = mask.trailing_zeros();
                    target = target.mul_small(58).add_u32(digit);
                }
                (Some((anchor, modulus, target)), None)
            }
            (Some(anchor), false) => (None, Some(anchor)),
            (None, _) => (None, None),
        };

        Ok(Subsequence {
            prefix,
            suffix_exact,
            suffix_general,
            case_sensitive,
        })
    }

    /// Evalúa la clave pública de 32 bytes contra el patrón compilado.
    pub fn matches(&self, pubkey: &[u8; 32]) -> bool {
        if let Some(anchor) = &self.prefix {
            if !matches_prefix(anchor, pubkey) {
                return false;
            }
        }
        if let Some((anchor, modulus, target)) = &self.suffix_exact {
            if !matches_suffix_exact(anchor, modulus, target, pubkey) {
                return false;
            }
        }
        if let Some(anchor) = &self.suffix_general {
            if !matches_suffix_general(anchor, pubkey) {
                return false;
            }
        }
        true
    }

    /// `true` si el patrón ignora mayúsculas/minúsculas.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

fn matches_prefix(anchor: &CompiledAnchor, pubkey: &[u8; 32]) -> bool {
    let leading_zero_bytes = pubkey.iter().take_while(|&&b| b == 0).count();
    // Zero bytes beyond the pattern's own length are not a mismatch — a
    // pattern of "1" matches any key with one or more leading zero bytes,
    // the same way "abc".starts_with("a") ignores what follows.
    let covered = leading_zero_bytes.min(anchor.len());
    for mask in &anchor.masks[..covered] {
        if mask & 1 == 0 {
            return false;
        }
    }
    if leading_zero_bytes >= anchor.len() {
        return true;
    }
    let remaining_masks = &anchor.masks[leading_zero_bytes..];
    let digits = bignum::encode_digits_be(&pubkey[leading_zero_bytes..]);
    if digits.len() < remaining_masks.len() {
        return false;
    }
    remaining_masks
        .iter()
        .zip(digits.iter())
        .all(|(mask, &digit)| mask & (1u64 << digit) != 0)
}

fn matches_suffix_exact(
    _anchor: &CompiledAnchor,
    modulus: &WideUint,
    target: &WideUint,
    pubkey: &[u8; 32],
) -> bool {
    &bignum::mod_pow58(pubkey, modulus) == target
}

fn matches_suffix_general(anchor: &CompiledAnchor, pubkey: &[u8; 32]) -> bool {
    let leading_zero_bytes = pubkey.iter().take_while(|&&b| b == 0).count();
    let digits = bignum::encode_digits_be(&pubkey[leading_zero_bytes..]);
    let total_len = leading_zero_bytes + digits.len();
    if total_len < anchor.len() {
        return false;
    }
    for (offset, mask) in anchor.masks.iter().rev().enumerate() {
        let digit = if offset < digits.len() {
            digits[digits.len() - 1 - offset]
        } else {
            0
        };
        if mask & (1u64 << digit) == 0 {
            return false;
        }
    }
    true
}
