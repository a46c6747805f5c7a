use super::i256::{i256_div, i256_mod};
use crate::host::Host;
use crate::interpreter::Interpreter;
use ruint::aliases::U256;

pub fn add<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = op1.wrapping_add(*op2);
}

pub fn mul<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = op1.wrapping_mul(*op2);
}

pub fn sub<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = op1.wrapping_sub(*op2);
}

pub fn div<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    if !op2.is_zero() {
        *op2 = op1.wrapping_div(*op2);
    }
}

pub fn sdiv<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = i256_div(op1, *op2);
}

pub fn rem<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    if !op2.is_zero() {
        *op2 = op1.wrapping_rem(*op2);
    }
}

pub fn smod<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = i256_mod(op1, *op2);
}

/// `(a + b) % n` over a 512-bit intermediate; zero when the modulus is zero.
pub fn addmod<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2, op3);
    *op3 = op1.add_mod(op2, *op3);
}

/// `(a * b) % n` over a 512-bit intermediate; zero when the modulus is zero.
pub fn mulmod<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2, op3);
    *op3 = op1.mul_mod(op2, *op3);
}

/// Wrapping binary exponentiation; total for all operands.
pub fn exp<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = op1.pow(*op2);
}

/// Sign-extends the value `x` from the byte at index `ext` (counting from the
/// least significant byte). With `ext >= 31` the value is unchanged.
pub fn signextend<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, ext, x);
    if ext < U256::from(31) {
        let ext = ext.as_limbs()[0];
        let bit_index = (8 * ext + 7) as usize;
        let bit = x.bit(bit_index);
        let mask = (U256::from(1) << bit_index) - U256::from(1);
        *x = if bit { *x | !mask } else { *x & mask };
    }
}
