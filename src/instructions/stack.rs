use crate::host::Host;
use crate::instruction_result::InstructionResult;
use crate::interpreter::Interpreter;

/// Discards the top stack item.
pub fn pop<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop!(interp, _value);
}

/// Reads `N` immediate bytes following the opcode, zero-extends them to 256
/// bits big-endian and pushes the result, then advances the program counter
/// past the immediate.
pub fn push<const N: usize, H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    let analysis = interp.analysis;
    let Some(frame) = interp.frames.last_mut() else {
        return;
    };
    // `pc` already points at the first immediate byte; the sentinel padding
    // supplies zeros when the immediate overlaps the code end.
    let pc = frame.pc;
    let Some(slice) = analysis.padded_code().get(pc..pc + N) else {
        interp.instruction_result = InstructionResult::UnexpectedEnd;
        return;
    };
    if let Err(result) = frame.stack.push_slice(slice) {
        interp.instruction_result = result;
        return;
    }
    frame.pc = pc + N;
}

/// Pushes a copy of the `N`th stack item counting from the top.
pub fn dup<const N: usize, H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    let Some(frame) = interp.frames.last_mut() else {
        return;
    };
    if let Err(result) = frame.stack.dup::<N>() {
        interp.instruction_result = result;
    }
}

/// Swaps the top stack item with the `N`th item below it.
pub fn swap<const N: usize, H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    let Some(frame) = interp.frames.last_mut() else {
        return;
    };
    if let Err(result) = frame.stack.swap::<N>() {
        interp.instruction_result = result;
    }
}
