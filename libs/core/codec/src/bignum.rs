// [libs/core/codec/src/bignum.rs]
//! Aritmética de enteros grandes sobre buffers de ancho fijo, sin asignación
//! de memoria en el camino caliente. Dos piezas viven aquí:
//!
//! - [`encode_digits_be`]: la conversión base-256 → base-58 estándar (el
//!   mismo algoritmo que usan los codificadores Base58 de uso general),
//!   expuesta a nivel de valores de dígito en lugar de caracteres, para que
//!   el comparador de prefijo pueda rechazar un candidato sin nunca
//!   construir la `String` final.
//! - [`WideUint`]: un entero sin signo de 288 bits respaldado por un arreglo
//!   fijo de limbos `u32`, usado para precomputar `58^k` y reducir la clave
//!   candidata módulo esa potencia en el comparador de sufijo.

/// Convierte un buffer big-endian (sin bytes cero iniciales) a sus dígitos
/// Base58, de más a menos significativo. Devuelve un vector vacío para un
/// buffer vacío.
pub(crate) fn encode_digits_be(bytes: &[u8]) -> Vec<u8> {
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
    for &byte in bytes {
        let mut carry = byte as u32;
        for d in digits.iter_mut() {
            let value = (*d as u32) * 256 + carry;
            *d = (value % 58) as u8;
            carry = value / 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    digits.reverse();
    digits
}

const LIMBS: usize = 9; // 9 * 32 = 288 bits, enough headroom for 58^44 (~258 bits) plus a byte*256 step.

/// Entero sin signo de ancho fijo, limbos little-endian en base 2^32.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct WideUint([u32; LIMBS]);

impl WideUint {
    pub(crate) const ZERO: WideUint = WideUint([0; LIMBS]);

    pub(crate) fn from_u32(v: u32) -> Self {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = v;
        WideUint(limbs)
    }

    /// `self * m`, donde `m` es un multiplicador pequeño (usado con 58 y 256).
    pub(crate) fn mul_small(&self, m: u32) -> Self {
        let mut out = [0u32; LIMBS];
        let mut carry: u64 = 0;
        for i in 0..LIMBS {
            let acc = self.0[i] as u64 * m as u64 + carry;
            out[i] = (acc & 0xFFFF_FFFF) as u32;
            carry = acc >> 32;
        }
        debug_assert_eq!(carry, 0, "WideUint::mul_small overflowed {LIMBS} limbs");
        WideUint(out)
    }

    /// `self + a`, donde `a` es pequeño (usado para sumar el siguiente byte).
    pub(crate) fn add_u32(&self, a: u32) -> Self {
        let mut out = self.0;
        let mut carry = a as u64;
        let mut i = 0;
        while carry > 0 {
            debug_assert!(i < LIMBS, "WideUint::add_u32 overflowed {LIMBS} limbs");
            let acc = out[i] as u64 + carry;
            out[i] = (acc & 0xFFFF_FFFF) as u32;
            carry = acc >> 32;
            i += 1;
        }
        WideUint(out)
    }

    pub(crate) fn shl1(&self) -> Self {
        let mut out = [0u32; LIMBS];
        let mut carry = 0u32;
        for i in 0..LIMBS {
            out[i] = (self.0[i] << 1) | carry;
            carry = self.0[i] >> 31;
        }
        WideUint(out)
    }

    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        for i in (0..LIMBS).rev() {
            let ord = self.0[i].cmp(&other.0[i]);
            if ord != core::cmp::Ordering::Equal {
                return ord;
            }
        }
        core::cmp::Ordering::Equal
    }

    fn sub(&self, other: &Self) -> Self {
        let mut out = [0u32; LIMBS];
        let mut borrow: i64 = 0;
        for i in 0..LIMBS {
            let diff = self.0[i] as i64 - other.0[i] as i64 - borrow;
            if diff < 0 {
                out[i] = (diff + (1i64 << 32)) as u32;
                borrow = 1;
            } else {
                out[i] = diff as u32;
                borrow = 0;
            }
        }
        WideUint(out)
    }

    /// `58^exp`, computado por multiplicación repetida. `exp` está acotado
    /// por la longitud máxima de patrón (44), así que esto nunca desborda.
    pub(crate) fn pow58(exp: u32) -> Self {
        let mut result = WideUint::from_u32(1);
        for _ in 0..exp {
            result = result.mul_small(58);
        }
        result
    }

    /// Reduce `self` módulo `modulus`, asumiendo `self < 256 * modulus`
    /// (el caso de uso único de este tipo: un paso de `value*256 + byte`).
    fn reduce_below_256x(&self, modulus: &WideUint) -> Self {
        if modulus.cmp(&WideUint::ZERO) == core::cmp::Ordering::Equal {
            return *self;
        }
        let mut shifted = [WideUint::ZERO; 8];
        shifted[0] = *modulus;
        for i in 1..8 {
            shifted[i] = shifted[i - 1].shl1();
        }
        let mut r = *self;
        for i in (0..8).rev() {
            if r.cmp(&shifted[i]) != core::cmp::Ordering::Less {
                r = r.sub(&shifted[i]);
            }
        }
        r
    }

    /// Valor como `u64`, perdiendo silenciosamente cualquier magnitud en
    /// limbos superiores. Solo se llama sobre residuos ya reducidos módulo
    /// un `58^k` que se sabe cabe en 64 bits.
    pub(crate) fn to_u64_lossy(&self) -> u64 {
        (self.0[0] as u64) | ((self.0[1] as u64) << 32)
    }
}

/// Calcula `bytes` (entero big-endian) módulo `modulus`, procesando un byte
/// a la vez. No asigna memoria.
pub(crate) fn mod_pow58(bytes: &[u8], modulus: &WideUint) -> WideUint {
    let mut remainder = WideUint::ZERO;
    for &byte in bytes {
        remainder = remainder.mul_small(256).add_u32(byte as u32);
        remainder = remainder.reduce_below_256x(modulus);
    }
    remainder
}
