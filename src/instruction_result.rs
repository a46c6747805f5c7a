use core::fmt;

/// Per-step execution state threaded through the dispatch loop.
///
/// The loop keeps stepping while this is [`Continue`][InstructionResult::Continue];
/// any other value terminates the current frame.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstructionResult {
    // success codes
    Continue = 0x00,
    Stop = 0x01,
    Return = 0x02,

    // revert code
    Revert = 0x20,

    // error codes
    OutOfGas = 0x50,
    StackUnderflow,
    StackOverflow,
    BadJumpDestination,
    InvalidInstruction,
    UnsupportedOpcode,
    IntegerOverflow,
    UnexpectedEnd,
}

impl InstructionResult {
    /// Returns whether the result is an ordinary (non-revert) halt.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Continue | Self::Stop | Self::Return)
    }

    /// Returns whether the result is a revert.
    #[inline]
    pub const fn is_revert(self) -> bool {
        matches!(self, Self::Revert)
    }

    /// Returns whether the result is a fault.
    #[inline]
    pub const fn is_error(self) -> bool {
        !self.is_ok() && !self.is_revert()
    }
}

/// Fault taxonomy observable in an [`Outcome`](crate::interpreter::Outcome).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fault {
    /// Pushing when the stack already holds 1024 words.
    StackOverflow,
    /// Popping or peeking below the stack bottom, including DUP/SWAP with
    /// insufficient depth.
    StackUnderflow,
    /// Base-cost or memory-expansion deduction exceeded the remaining gas.
    OutOfGas,
    /// JUMP/JUMPI target outside the code, inside PUSH data, or not a
    /// JUMPDEST.
    BadJumpDestination,
    /// The designated INVALID (0xfe) opcode.
    InvalidInstruction,
    /// An opcode this interpreter does not implement.
    UnsupportedOpcode,
    /// A memory offset or `offset + size` exceeded `u32::MAX`.
    IntegerOverflow,
    /// A PUSH immediate would run past the end of the code. Cannot occur
    /// while the analysis pads the bytecode; kept as a defensive kind.
    UnexpectedEnd,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StackOverflow => "stack overflow",
            Self::StackUnderflow => "stack underflow",
            Self::OutOfGas => "out of gas",
            Self::BadJumpDestination => "bad jump destination",
            Self::InvalidInstruction => "invalid instruction",
            Self::UnsupportedOpcode => "unsupported opcode",
            Self::IntegerOverflow => "integer overflow",
            Self::UnexpectedEnd => "unexpected end of code",
        };
        f.write_str(name)
    }
}

/// Terminal status of one top-level invocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The program halted with STOP, RETURN, or by running off the code end.
    Success,
    /// The program halted with REVERT; return data is preserved and the
    /// remaining gas is refunded to the caller.
    Revert,
    /// The program faulted; remaining gas is consumed.
    Fault(Fault),
}

impl From<InstructionResult> for Status {
    fn from(result: InstructionResult) -> Self {
        match result {
            // `Continue` only reaches here if the loop was never run.
            InstructionResult::Continue
            | InstructionResult::Stop
            | InstructionResult::Return => Self::Success,
            InstructionResult::Revert => Self::Revert,
            InstructionResult::OutOfGas => Self::Fault(Fault::OutOfGas),
            InstructionResult::StackUnderflow => Self::Fault(Fault::StackUnderflow),
            InstructionResult::StackOverflow => Self::Fault(Fault::StackOverflow),
            InstructionResult::BadJumpDestination => Self::Fault(Fault::BadJumpDestination),
            InstructionResult::InvalidInstruction => Self::Fault(Fault::InvalidInstruction),
            InstructionResult::UnsupportedOpcode => Self::Fault(Fault::UnsupportedOpcode),
            InstructionResult::IntegerOverflow => Self::Fault(Fault::IntegerOverflow),
            InstructionResult::UnexpectedEnd => Self::Fault(Fault::UnexpectedEnd),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Revert => f.write_str("revert"),
            Self::Fault(fault) => write!(f, "fault: {fault}"),
        }
    }
}
