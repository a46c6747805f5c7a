use super::i256::i256_cmp;
use crate::host::Host;
use crate::interpreter::Interpreter;
use core::cmp::Ordering;
use ruint::aliases::U256;

pub fn lt<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = U256::from(op1 < *op2);
}

pub fn gt<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = U256::from(op1 > *op2);
}

pub fn slt<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = U256::from(i256_cmp(op1, *op2) == Ordering::Less);
}

pub fn sgt<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = U256::from(i256_cmp(op1, *op2) == Ordering::Greater);
}

pub fn eq<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = U256::from(op1 == *op2);
}

pub fn iszero<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1);
    *op1 = U256::from(op1.is_zero());
}

pub fn bitand<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = op1 & *op2;
}

pub fn bitor<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = op1 | *op2;
}

pub fn bitxor<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    *op2 = op1 ^ *op2;
}

pub fn not<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1);
    *op1 = !*op1;
}

/// Extracts the `i`-th most significant byte of the value, zero when
/// `i >= 32`.
pub fn byte<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    let i = as_usize_saturated!(op1);
    *op2 = if i < 32 {
        // `31 - i` because `byte` indexes from the little end.
        U256::from(op2.byte(31 - i))
    } else {
        U256::ZERO
    };
}

pub fn shl<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    let shift = as_usize_saturated!(op1);
    *op2 = if shift < 256 { *op2 << shift } else { U256::ZERO };
}

pub fn shr<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    let shift = as_usize_saturated!(op1);
    *op2 = if shift < 256 { *op2 >> shift } else { U256::ZERO };
}

/// Arithmetic right shift: shifts of 256 or more produce the sign-fill word.
pub fn sar<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop_top!(interp, op1, op2);
    let shift = as_usize_saturated!(op1);
    *op2 = if shift < 256 {
        op2.arithmetic_shr(shift)
    } else if op2.bit(255) {
        U256::MAX
    } else {
        U256::ZERO
    };
}
