//! Environment queries.

use crate::host::Host;
use crate::interpreter::Interpreter;
use ruint::aliases::U256;

/// Pushes the gas remaining after the deduction for GAS itself.
pub fn gas<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    let Some(frame) = interp.frames.last() else {
        return;
    };
    let remaining = frame.gas.remaining();
    push!(interp, U256::from(remaining));
}

/// Pushes the frame's gas limit.
pub fn gaslimit<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    let Some(frame) = interp.frames.last() else {
        return;
    };
    let limit = frame.gas.limit();
    push!(interp, U256::from(limit));
}
