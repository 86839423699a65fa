use super::error::QRResult;
use super::gf;

// Polynomial over GF(256)
//------------------------------------------------------------------------------

/// Coefficient sequence ordered from the highest-degree term down. Leading
/// zeros are trimmed on construction; `shift` appends zero low-order terms,
/// i.e. multiplies by x^shift. Values are immutable once built.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Polynomial {
    coeffs: Vec<u8>,
}

impl Polynomial {
    pub fn new(coeffs: &[u8], shift: usize) -> Self {
        let offset = coeffs.iter().position(|&c| c != 0).unwrap_or(coeffs.len());
        let mut trimmed = Vec::with_capacity(coeffs.len() - offset + shift);
        trimmed.extend_from_slice(&coeffs[offset..]);
        trimmed.resize(coeffs.len() - offset + shift, 0);
        Self { coeffs: trimmed }
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn get(&self, index: usize) -> u8 {
        self.coeffs[index]
    }

    /// Convolution product; addition in GF(256) is XOR.
    pub fn multiply(&self, other: &Self) -> QRResult<Self> {
        let mut out = vec![0u8; self.len() + other.len() - 1];
        for i in 0..self.len() {
            for j in 0..other.len() {
                out[i + j] ^= gf::exp(gf::log(self.get(i))? + gf::log(other.get(j))?);
            }
        }
        Ok(Self::new(&out, 0))
    }

    /// Remainder under synthetic division. Each round cancels the leading
    /// coefficient, so the trimmed length strictly decreases until the
    /// degree drops below the divisor's.
    pub fn rem(&self, divisor: &Self) -> QRResult<Self> {
        let mut cur = self.clone();
        while cur.len() >= divisor.len() {
            let ratio = gf::log(cur.get(0))? - gf::log(divisor.get(0))?;
            let mut num = cur.coeffs;
            for i in 0..divisor.len() {
                num[i] ^= gf::exp(gf::log(divisor.get(i))? + ratio);
            }
            cur = Self::new(&num, 0);
        }
        Ok(cur)
    }
}

/// Error correction generator polynomial: the product of (x + alpha^i)
/// for i in 0..ec_len.
pub fn generator(ec_len: usize) -> QRResult<Polynomial> {
    let mut acc = Polynomial::new(&[1], 0);
    for i in 0..ec_len {
        acc = acc.multiply(&Polynomial::new(&[1, gf::exp(i as i32)], 0))?;
    }
    Ok(acc)
}
