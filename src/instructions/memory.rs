use crate::host::Host;
use crate::interpreter::Interpreter;
use ruint::aliases::U256;

/// Loads a 32-byte word from memory.
pub fn mload<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop!(interp, offset);
    let offset = as_usize_or_fail!(interp, offset);
    resize_memory!(interp, offset, 32);
    let Some(frame) = interp.frames.last_mut() else {
        return;
    };
    let value = U256::try_from_be_slice(frame.memory.slice(offset, 32)).unwrap_or(U256::ZERO);
    push!(interp, value);
}

/// Stores a 32-byte word to memory.
pub fn mstore<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop!(interp, offset, value);
    let offset = as_usize_or_fail!(interp, offset);
    resize_memory!(interp, offset, 32);
    let Some(frame) = interp.frames.last_mut() else {
        return;
    };
    frame.memory.set_u256(offset, value);
}

/// Stores the low byte of the value to memory.
pub fn mstore8<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop!(interp, offset, value);
    let offset = as_usize_or_fail!(interp, offset);
    resize_memory!(interp, offset, 1);
    let Some(frame) = interp.frames.last_mut() else {
        return;
    };
    frame.memory.set(offset, &[value.byte(0)]);
}

/// Pushes the current memory size in bytes.
pub fn msize<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    let Some(frame) = interp.frames.last() else {
        return;
    };
    let size = frame.memory.len();
    push!(interp, U256::from(size));
}
