use super::error::{QRError, QRResult};

// GF(256) exponent & logarithm tables
//------------------------------------------------------------------------------

// Field generator polynomial x^8 + x^4 + x^3 + x^2 + 1: reducing x^8 gives
// the recurrence exp[i] = exp[i-4] ^ exp[i-5] ^ exp[i-6] ^ exp[i-8].
const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        table[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        table[i] = table[i - 4] ^ table[i - 5] ^ table[i - 6] ^ table[i - 8];
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static EXP_TABLE: [u8; 256] = build_exp_table();
static LOG_TABLE: [u8; 256] = build_log_table();

/// Logarithm of `n` to base alpha. Zero has no logarithm.
pub fn log(n: u8) -> QRResult<i32> {
    if n < 1 {
        return Err(QRError::InvalidFieldOperand);
    }
    Ok(LOG_TABLE[n as usize] as i32)
}

/// Alpha raised to `n`, for any integer exponent. The multiplicative group
/// of GF(256) has order 255, so `n` is normalized into [0, 255] by
/// repeated wraparound before indexing.
pub fn exp(mut n: i32) -> u8 {
    while n < 0 {
        n += 255;
    }
    while n >= 256 {
        n -= 255;
    }
    EXP_TABLE[n as usize]
}
