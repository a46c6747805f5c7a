//! EVM opcode implementations.

#[macro_use]
pub mod macros;
pub mod arithmetic;
pub mod bitwise;
pub mod control;
pub mod i256;
pub mod memory;
pub mod stack;
pub mod system;

use crate::host::Host;
use crate::interpreter::Interpreter;
use crate::opcode;

/// EVM instruction function signature.
pub type Instruction<H> = fn(&mut Interpreter<'_>, &mut H);

/// List of instruction function pointers mapped to the 256 EVM opcodes.
pub type InstructionTable<H> = [Instruction<H>; 256];

/// Returns the instruction function for the given opcode.
pub const fn instruction<H: Host + ?Sized>(opcode: u8) -> Instruction<H> {
    match opcode {
        opcode::STOP => control::stop,

        opcode::ADD => arithmetic::add,
        opcode::MUL => arithmetic::mul,
        opcode::SUB => arithmetic::sub,
        opcode::DIV => arithmetic::div,
        opcode::SDIV => arithmetic::sdiv,
        opcode::MOD => arithmetic::rem,
        opcode::SMOD => arithmetic::smod,
        opcode::ADDMOD => arithmetic::addmod,
        opcode::MULMOD => arithmetic::mulmod,
        opcode::EXP => arithmetic::exp,
        opcode::SIGNEXTEND => arithmetic::signextend,

        opcode::LT => bitwise::lt,
        opcode::GT => bitwise::gt,
        opcode::SLT => bitwise::slt,
        opcode::SGT => bitwise::sgt,
        opcode::EQ => bitwise::eq,
        opcode::ISZERO => bitwise::iszero,
        opcode::AND => bitwise::bitand,
        opcode::OR => bitwise::bitor,
        opcode::XOR => bitwise::bitxor,
        opcode::NOT => bitwise::not,
        opcode::BYTE => bitwise::byte,
        opcode::SHL => bitwise::shl,
        opcode::SHR => bitwise::shr,
        opcode::SAR => bitwise::sar,

        opcode::GASLIMIT => system::gaslimit,

        opcode::POP => stack::pop,
        opcode::MLOAD => memory::mload,
        opcode::MSTORE => memory::mstore,
        opcode::MSTORE8 => memory::mstore8,
        opcode::JUMP => control::jump,
        opcode::JUMPI => control::jumpi,
        opcode::PC => control::pc,
        opcode::MSIZE => memory::msize,
        opcode::GAS => system::gas,
        opcode::JUMPDEST => control::jumpdest,

        opcode::PUSH1 => stack::push::<1, H>,
        opcode::PUSH2 => stack::push::<2, H>,
        opcode::PUSH3 => stack::push::<3, H>,
        opcode::PUSH4 => stack::push::<4, H>,
        opcode::PUSH5 => stack::push::<5, H>,
        opcode::PUSH6 => stack::push::<6, H>,
        opcode::PUSH7 => stack::push::<7, H>,
        opcode::PUSH8 => stack::push::<8, H>,
        opcode::PUSH9 => stack::push::<9, H>,
        opcode::PUSH10 => stack::push::<10, H>,
        opcode::PUSH11 => stack::push::<11, H>,
        opcode::PUSH12 => stack::push::<12, H>,
        opcode::PUSH13 => stack::push::<13, H>,
        opcode::PUSH14 => stack::push::<14, H>,
        opcode::PUSH15 => stack::push::<15, H>,
        opcode::PUSH16 => stack::push::<16, H>,
        opcode::PUSH17 => stack::push::<17, H>,
        opcode::PUSH18 => stack::push::<18, H>,
        opcode::PUSH19 => stack::push::<19, H>,
        opcode::PUSH20 => stack::push::<20, H>,
        opcode::PUSH21 => stack::push::<21, H>,
        opcode::PUSH22 => stack::push::<22, H>,
        opcode::PUSH23 => stack::push::<23, H>,
        opcode::PUSH24 => stack::push::<24, H>,
        opcode::PUSH25 => stack::push::<25, H>,
        opcode::PUSH26 => stack::push::<26, H>,
        opcode::PUSH27 => stack::push::<27, H>,
        opcode::PUSH28 => stack::push::<28, H>,
        opcode::PUSH29 => stack::push::<29, H>,
        opcode::PUSH30 => stack::push::<30, H>,
        opcode::PUSH31 => stack::push::<31, H>,
        opcode::PUSH32 => stack::push::<32, H>,

        opcode::DUP1 => stack::dup::<1, H>,
        opcode::DUP2 => stack::dup::<2, H>,
        opcode::DUP3 => stack::dup::<3, H>,
        opcode::DUP4 => stack::dup::<4, H>,
        opcode::DUP5 => stack::dup::<5, H>,
        opcode::DUP6 => stack::dup::<6, H>,
        opcode::DUP7 => stack::dup::<7, H>,
        opcode::DUP8 => stack::dup::<8, H>,
        opcode::DUP9 => stack::dup::<9, H>,
        opcode::DUP10 => stack::dup::<10, H>,
        opcode::DUP11 => stack::dup::<11, H>,
        opcode::DUP12 => stack::dup::<12, H>,
        opcode::DUP13 => stack::dup::<13, H>,
        opcode::DUP14 => stack::dup::<14, H>,
        opcode::DUP15 => stack::dup::<15, H>,
        opcode::DUP16 => stack::dup::<16, H>,

        opcode::SWAP1 => stack::swap::<1, H>,
        opcode::SWAP2 => stack::swap::<2, H>,
        opcode::SWAP3 => stack::swap::<3, H>,
        opcode::SWAP4 => stack::swap::<4, H>,
        opcode::SWAP5 => stack::swap::<5, H>,
        opcode::SWAP6 => stack::swap::<6, H>,
        opcode::SWAP7 => stack::swap::<7, H>,
        opcode::SWAP8 => stack::swap::<8, H>,
        opcode::SWAP9 => stack::swap::<9, H>,
        opcode::SWAP10 => stack::swap::<10, H>,
        opcode::SWAP11 => stack::swap::<11, H>,
        opcode::SWAP12 => stack::swap::<12, H>,
        opcode::SWAP13 => stack::swap::<13, H>,
        opcode::SWAP14 => stack::swap::<14, H>,
        opcode::SWAP15 => stack::swap::<15, H>,
        opcode::SWAP16 => stack::swap::<16, H>,

        opcode::RETURN => control::ret,
        opcode::REVERT => control::revert,
        opcode::INVALID => control::invalid,

        _ => control::unknown,
    }
}

/// Builds the plain instruction table mapping each opcode to its function.
pub fn make_instruction_table<H: Host + ?Sized>() -> InstructionTable<H> {
    core::array::from_fn(|i| instruction::<H>(i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DummyHost;

    #[test]
    fn table_covers_all_opcodes() {
        let table = make_instruction_table::<DummyHost>();
        assert_eq!(table.len(), 256);
        // Unassigned opcodes fall back to the unknown handler.
        let unknown = control::unknown::<DummyHost> as Instruction<DummyHost>;
        assert!(table[0x0C] == unknown);
        assert!(table[opcode::ADD as usize] != unknown);
    }
}
