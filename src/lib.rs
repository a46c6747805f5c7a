//! sevm - a stack-based EVM bytecode interpreter.
//!
//! Given a read-only byte string of EVM opcodes, a gas budget and a mutable
//! execution environment, [`interpret`] runs the program to a terminal
//! outcome (stop, return, revert or fault) while metering gas at per-opcode
//! granularity and enforcing the stack, memory and control-flow invariants.
//!
//! ```
//! use sevm::{decode_hex, interpret, CodeAnalysis, DummyHost, Status, U256};
//!
//! // PUSH1 3, PUSH1 4, ADD; MSTORE at 0; RETURN 32 bytes.
//! let code = decode_hex("600360040160005260206000f3").unwrap();
//! let analysis = CodeAnalysis::analyze(&code);
//! let mut host = DummyHost;
//! let outcome = interpret(&analysis, &mut host, 100_000, U256::ZERO, &[]);
//! assert_eq!(outcome.status, Status::Success);
//! assert_eq!(outcome.return_data.as_ref(), &U256::from(7u64).to_be_bytes::<32>());
//! ```

#[macro_use]
pub mod instructions;

pub mod gas;
pub mod host;
pub mod instruction_result;
pub mod interpreter;
pub mod opcode;

pub use gas::Gas;
pub use host::{DummyHost, Host};
pub use instruction_result::{Fault, InstructionResult, Status};
pub use interpreter::{
    interpret, CodeAnalysis, Frame, Interpreter, JumpMap, Memory, Outcome, Stack, STACK_LIMIT,
};
pub use opcode::OpCode;
pub use ruint::aliases::U256;

/// Decode a hex string into bytes, accepting an optional `0x` prefix and
/// surrounding whitespace. Odd-length strings and non-hex characters are
/// rejected.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let input = input.trim();
    let input = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_hex_accepts_prefix_and_whitespace() {
        assert_eq!(decode_hex("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex("  00ff \n").unwrap(), vec![0x00, 0xff]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_hex_rejects_bad_input() {
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("zz").is_err());
    }
}
