use crate::host::Host;
use crate::instruction_result::InstructionResult;
use crate::interpreter::Interpreter;
use bytes::Bytes;
use ruint::aliases::U256;

pub fn jump<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop!(interp, target);
    jump_inner(interp, target);
}

pub fn jumpi<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    pop!(interp, target, cond);
    if !cond.is_zero() {
        jump_inner(interp, target);
    }
}

/// Validates the jump target against the analysis bitmap and moves the
/// program counter there.
#[inline(always)]
fn jump_inner(interp: &mut Interpreter<'_>, target: U256) {
    let target = as_usize_or_fail!(interp, target, InstructionResult::BadJumpDestination);
    // The bitmap covers only the original code, so targets inside the
    // sentinel padding or PUSH immediates are rejected here.
    if !interp.analysis.is_valid_jump(target) {
        interp.instruction_result = InstructionResult::BadJumpDestination;
        return;
    }
    let Some(frame) = interp.frames.last_mut() else {
        return;
    };
    frame.pc = target;
}

/// A valid jump target; the base cost is its only effect.
pub fn jumpdest<H: Host + ?Sized>(_interp: &mut Interpreter<'_>, _host: &mut H) {}

/// Pushes the byte offset of the PC opcode itself.
pub fn pc<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    let Some(frame) = interp.frames.last() else {
        return;
    };
    // The program counter was advanced past this opcode in `step`.
    let offset = frame.pc - 1;
    push!(interp, U256::from(offset));
}

fn return_inner(interp: &mut Interpreter<'_>, result: InstructionResult) {
    pop!(interp, offset, len);
    let offset = as_usize_or_fail!(interp, offset);
    let len = as_usize_or_fail!(interp, len);
    if offset as u64 + len as u64 > u32::MAX as u64 {
        interp.instruction_result = InstructionResult::IntegerOverflow;
        return;
    }

    let mut output = Bytes::new();
    if len != 0 {
        resize_memory!(interp, offset, len);
        let Some(frame) = interp.frames.last() else {
            return;
        };
        output = Bytes::copy_from_slice(frame.memory.slice(offset, len));
    }

    interp.return_data = output;
    interp.instruction_result = result;
}

/// Halts execution and returns data from memory.
pub fn ret<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    return_inner(interp, InstructionResult::Return);
}

/// Halts execution, reverting observable effects while preserving the return
/// payload and the remaining gas.
pub fn revert<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    return_inner(interp, InstructionResult::Revert);
}

pub fn stop<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    interp.instruction_result = InstructionResult::Stop;
}

/// The designated INVALID opcode.
pub fn invalid<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    interp.instruction_result = InstructionResult::InvalidInstruction;
}

/// Any opcode this interpreter does not implement.
pub fn unknown<H: Host + ?Sized>(interp: &mut Interpreter<'_>, _host: &mut H) {
    interp.instruction_result = InstructionResult::UnsupportedOpcode;
}
