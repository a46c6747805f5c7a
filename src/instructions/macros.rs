//! Helper macros shared by the instruction implementations.
//!
//! Every macro operates on the interpreter's current frame and returns from
//! the enclosing instruction after recording a halt reason, so instruction
//! bodies read as straight-line code.

/// Pops one, two or three values off the current frame's stack.
macro_rules! pop {
    ($interp:expr, $x1:ident) => {
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if frame.stack.len() < 1 {
            $interp.instruction_result =
                $crate::instruction_result::InstructionResult::StackUnderflow;
            return;
        }
        // Safety: length is checked above.
        let $x1 = unsafe { frame.stack.pop_unsafe() };
    };
    ($interp:expr, $x1:ident, $x2:ident) => {
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if frame.stack.len() < 2 {
            $interp.instruction_result =
                $crate::instruction_result::InstructionResult::StackUnderflow;
            return;
        }
        // Safety: length is checked above.
        let ($x1, $x2) = unsafe { frame.stack.pop2_unsafe() };
    };
    ($interp:expr, $x1:ident, $x2:ident, $x3:ident) => {
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if frame.stack.len() < 3 {
            $interp.instruction_result =
                $crate::instruction_result::InstructionResult::StackUnderflow;
            return;
        }
        // Safety: length is checked above.
        let ($x1, $x2, $x3) = unsafe { frame.stack.pop3_unsafe() };
    };
}

/// Pops values and exposes the new top of the stack as a mutable reference,
/// letting two-operand instructions write their result in place.
macro_rules! pop_top {
    ($interp:expr, $x1:ident) => {
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if frame.stack.is_empty() {
            $interp.instruction_result =
                $crate::instruction_result::InstructionResult::StackUnderflow;
            return;
        }
        // Safety: length is checked above.
        let $x1 = unsafe { frame.stack.top_unsafe() };
    };
    ($interp:expr, $x1:ident, $x2:ident) => {
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if frame.stack.len() < 2 {
            $interp.instruction_result =
                $crate::instruction_result::InstructionResult::StackUnderflow;
            return;
        }
        // Safety: length is checked above.
        let ($x1, $x2) = unsafe { frame.stack.pop_top_unsafe() };
    };
    ($interp:expr, $x1:ident, $x2:ident, $x3:ident) => {
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if frame.stack.len() < 3 {
            $interp.instruction_result =
                $crate::instruction_result::InstructionResult::StackUnderflow;
            return;
        }
        // Safety: length is checked above.
        let ($x1, $x2, $x3) = unsafe { frame.stack.pop2_top_unsafe() };
    };
}

/// Pushes values onto the current frame's stack, halting with
/// `StackOverflow` when the limit is hit.
macro_rules! push {
    ($interp:expr, $($x:expr),* $(,)?) => {$(
        let value = $x;
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if let Err(result) = frame.stack.push(value) {
            $interp.instruction_result = result;
            return;
        }
    )*};
}

/// Saturating conversion of a word to `u64`.
macro_rules! as_u64_saturated {
    ($v:expr) => {{
        let limbs = $v.as_limbs();
        if limbs[1] != 0 || limbs[2] != 0 || limbs[3] != 0 {
            u64::MAX
        } else {
            limbs[0]
        }
    }};
}

/// Saturating conversion of a word to `usize`.
macro_rules! as_usize_saturated {
    ($v:expr) => {
        as_u64_saturated!($v) as usize
    };
}

/// Converts a word used as a memory offset or length to `usize`, halting when
/// it exceeds `u32::MAX`. An alternate halt reason may be supplied for
/// operands with their own failure taxonomy (jump targets).
macro_rules! as_usize_or_fail {
    ($interp:expr, $v:expr) => {
        as_usize_or_fail!(
            $interp,
            $v,
            $crate::instruction_result::InstructionResult::IntegerOverflow
        )
    };
    ($interp:expr, $v:expr, $reason:expr) => {{
        let limbs = $v.as_limbs();
        if limbs[1] != 0 || limbs[2] != 0 || limbs[3] != 0 || limbs[0] > u32::MAX as u64 {
            $interp.instruction_result = $reason;
            return;
        }
        limbs[0] as usize
    }};
}

/// Grows the current frame's memory to cover `offset + len` bytes, charging
/// the expansion cost first. The new size is the smallest multiple of 32
/// covering the requested range.
macro_rules! resize_memory {
    ($interp:expr, $offset:expr, $len:expr) => {
        let offset: usize = $offset;
        let len: usize = $len;
        let required = match offset.checked_add(len) {
            Some(required) => required,
            None => {
                $interp.instruction_result =
                    $crate::instruction_result::InstructionResult::IntegerOverflow;
                return;
            }
        };
        let Some(new_size) = $crate::interpreter::next_multiple_of_32(required) else {
            $interp.instruction_result =
                $crate::instruction_result::InstructionResult::IntegerOverflow;
            return;
        };
        let Some(frame) = $interp.frames.last_mut() else {
            return;
        };
        if new_size > frame.memory.len() {
            let cost = $crate::gas::memory_expansion_cost(frame.memory.len(), new_size);
            if !frame.gas.record_cost(cost) {
                $interp.instruction_result =
                    $crate::instruction_result::InstructionResult::OutOfGas;
                return;
            }
            frame.memory.resize(new_size);
        }
    };
}
