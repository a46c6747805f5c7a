//! The execution context and dispatch loop.

pub mod analysis;
pub mod memory;
pub mod stack;

pub use analysis::{CodeAnalysis, JumpMap};
pub use memory::{next_multiple_of_32, Memory};
pub use stack::{Stack, STACK_LIMIT};

use crate::gas::{self, Gas};
use crate::host::Host;
use crate::instruction_result::{InstructionResult, Status};
use crate::instructions::{make_instruction_table, InstructionTable};
use crate::opcode;
use bytes::Bytes;
use ruint::aliases::U256;
use std::collections::HashMap;

/// A single call frame: value stack, byte memory, transient storage view,
/// program counter and gas budget.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Value stack, at most [`STACK_LIMIT`] words deep.
    pub stack: Stack,
    /// Byte memory, grown in 32-byte words and released with the frame.
    pub memory: Memory,
    /// Transient storage view of the frame, released with it. Reserved for
    /// the storage opcodes of a fuller opcode set; nothing in the executed
    /// subset touches it.
    pub storage: HashMap<U256, U256>,
    /// Program counter into the padded code. Advanced past the opcode before
    /// the instruction executes.
    pub pc: usize,
    /// Gas state of this frame.
    pub gas: Gas,
    /// Call value, immutable for the frame's lifetime.
    pub value: U256,
}

impl Frame {
    /// Create a frame with a fresh stack and memory and a full gas budget.
    pub fn new(gas_limit: u64, value: U256) -> Self {
        Self {
            stack: Stack::new(),
            memory: Memory::new(),
            storage: HashMap::new(),
            pc: 0,
            gas: Gas::new(gas_limit),
            value,
        }
    }
}

/// Observable result of one top-level invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Terminal status.
    pub status: Status,
    /// Data produced by RETURN or REVERT, empty otherwise.
    pub return_data: Bytes,
    /// Gas remaining after the invocation; zero on fault.
    pub gas_left: u64,
}

/// EVM bytecode interpreter: the frame stack, the shared code analysis and
/// the per-invocation status.
///
/// Instructions receive the interpreter and the host as explicit parameters;
/// there is no process-global state, so independent interpreters may run on
/// independent threads.
#[derive(Debug)]
pub struct Interpreter<'a> {
    /// Shared, immutable analysis of the executed bytecode.
    pub analysis: &'a CodeAnalysis,
    /// Call frames; the last entry is the executing frame. Frames are
    /// addressed through this vector rather than long-lived references, as
    /// frame entry and exit reallocate it.
    pub frames: Vec<Frame>,
    /// Call data of the invocation; carried for the data opcodes of a fuller
    /// opcode set.
    pub call_data: Bytes,
    /// Data produced by RETURN or REVERT.
    pub return_data: Bytes,
    /// The execution control flag. Execution continues while this is
    /// [`InstructionResult::Continue`].
    pub instruction_result: InstructionResult,
}

impl<'a> Interpreter<'a> {
    /// Create a new interpreter with a single root frame.
    pub fn new(
        analysis: &'a CodeAnalysis,
        gas_limit: u64,
        call_value: U256,
        call_data: Bytes,
    ) -> Self {
        let mut interpreter = Self {
            analysis,
            frames: Vec::new(),
            call_data,
            return_data: Bytes::new(),
            instruction_result: InstructionResult::Continue,
        };
        interpreter.alloc_frame(gas_limit, call_value);
        interpreter
    }

    /// Push a new frame with its own gas budget.
    pub fn alloc_frame(&mut self, gas_limit: u64, value: U256) {
        self.frames.push(Frame::new(gas_limit, value));
    }

    /// Pop the executing frame. On RETURN and REVERT the frame's unspent gas
    /// is credited back to the parent frame, when one exists.
    pub fn free_frame(&mut self) -> Option<Frame> {
        let frame = self.frames.pop()?;
        if matches!(
            self.instruction_result,
            InstructionResult::Return | InstructionResult::Revert
        ) {
            if let Some(parent) = self.frames.last_mut() {
                parent.gas.erase_cost(frame.gas.remaining());
            }
        }
        Some(frame)
    }

    /// The executing frame, if any.
    #[inline]
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Mutable access to the executing frame, if any.
    #[inline]
    pub fn current_frame_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Execute one instruction: fetch the opcode, advance the program
    /// counter past it, charge the static base cost and run the semantic
    /// action.
    fn step<H: Host + ?Sized>(&mut self, table: &InstructionTable<H>, host: &mut H) {
        let Some(frame) = self.frames.last_mut() else {
            self.instruction_result = InstructionResult::Stop;
            return;
        };

        // The sentinel padding keeps sequential execution inside the buffer;
        // falling back to STOP realizes the implicit halt at end of code.
        let pc = frame.pc;
        let op = self
            .analysis
            .padded_code()
            .get(pc)
            .copied()
            .unwrap_or(opcode::STOP);
        frame.pc = pc + 1;

        if !frame.gas.record_cost(gas::BASE_COST[op as usize]) {
            self.instruction_result = InstructionResult::OutOfGas;
            return;
        }

        (table[op as usize])(self, host);
    }

    /// Run the dispatch loop until the invocation halts, then build the
    /// observable outcome.
    pub fn run<H: Host + ?Sized>(&mut self, host: &mut H) -> Outcome {
        let table = make_instruction_table::<H>();
        while self.instruction_result == InstructionResult::Continue {
            self.step(&table, host);
        }

        let result = self.instruction_result;
        let frame = self.free_frame();
        let gas_left = match result {
            InstructionResult::Stop | InstructionResult::Return | InstructionResult::Revert => {
                frame.map_or(0, |frame| frame.gas.remaining())
            }
            // Faults consume the remaining gas.
            _ => 0,
        };
        let return_data = match result {
            InstructionResult::Return | InstructionResult::Revert => {
                core::mem::take(&mut self.return_data)
            }
            _ => Bytes::new(),
        };

        Outcome {
            status: Status::from(result),
            return_data,
            gas_left,
        }
    }
}

/// Execute analyzed bytecode to a terminal outcome.
///
/// The interpreter is pure over `(code, inputs, gas)`: it owns its frames and
/// memory and shares the analysis immutably. The executed opcode subset
/// issues no host queries; the host is threaded through for the hooks a
/// fuller opcode set would add.
pub fn interpret<H: Host + ?Sized>(
    analysis: &CodeAnalysis,
    host: &mut H,
    gas_limit: u64,
    call_value: U256,
    call_data: &[u8],
) -> Outcome {
    let mut interpreter = Interpreter::new(
        analysis,
        gas_limit,
        call_value,
        Bytes::copy_from_slice(call_data),
    );
    interpreter.run(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DummyHost;
    use proptest::prelude::*;

    #[test]
    fn empty_code_is_implicit_stop() {
        let analysis = CodeAnalysis::analyze(&[]);
        let mut host = DummyHost;
        let outcome = interpret(&analysis, &mut host, 100, U256::ZERO, &[]);
        assert_eq!(outcome.status, Status::Success);
        assert!(outcome.return_data.is_empty());
        assert_eq!(outcome.gas_left, 100);
    }

    #[test]
    fn frame_refunds_gas_to_parent_on_return() {
        let analysis = CodeAnalysis::analyze(&[]);
        let mut interpreter = Interpreter::new(&analysis, 100, U256::ZERO, Bytes::new());
        interpreter.alloc_frame(40, U256::ZERO);
        let child = interpreter.current_frame_mut().unwrap();
        assert!(child.gas.record_cost(15));
        interpreter.instruction_result = InstructionResult::Return;
        interpreter.free_frame();
        assert_eq!(
            interpreter.current_frame().unwrap().gas.remaining(),
            100 + 25
        );
    }

    proptest! {
        // Invariants of the dispatch loop over arbitrary byte programs: the
        // stack height stays within bounds and gas never increases within a
        // frame.
        #[test]
        fn stack_bound_and_gas_monotone(code in proptest::collection::vec(any::<u8>(), 0..256)) {
            let analysis = CodeAnalysis::analyze(&code);
            let mut host = DummyHost;
            let mut interpreter =
                Interpreter::new(&analysis, 50_000, U256::ZERO, Bytes::new());
            let table = make_instruction_table::<DummyHost>();
            let mut last_gas = 50_000u64;
            while interpreter.instruction_result == InstructionResult::Continue {
                interpreter.step(&table, &mut host);
                if let Some(frame) = interpreter.current_frame() {
                    prop_assert!(frame.stack.len() <= STACK_LIMIT);
                    prop_assert!(frame.gas.remaining() <= last_gas);
                    last_gas = frame.gas.remaining();
                }
            }
        }

        #[test]
        fn outcome_gas_never_exceeds_limit(code in proptest::collection::vec(any::<u8>(), 0..128)) {
            let analysis = CodeAnalysis::analyze(&code);
            let mut host = DummyHost;
            let outcome = interpret(&analysis, &mut host, 10_000, U256::ZERO, &[]);
            prop_assert!(outcome.gas_left <= 10_000);
        }
    }
}
