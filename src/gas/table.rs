//! Static per-opcode base gas costs for the Cancun revision.
//!
//! The dispatch loop charges `BASE_COST[opcode]` before executing an
//! instruction; dynamic costs (memory expansion, copied words) are charged
//! inside the instruction itself. Unassigned opcodes carry a zero base cost
//! and fault as unsupported when executed.

use super::constants;
use crate::opcode;

/// Base gas cost per opcode.
pub static BASE_COST: [u64; 256] = base_cost_table();

const fn base_cost_table() -> [u64; 256] {
    let mut table = [0u64; 256];

    table[opcode::STOP as usize] = constants::ZERO;

    table[opcode::ADD as usize] = constants::VERYLOW;
    table[opcode::MUL as usize] = constants::LOW;
    table[opcode::SUB as usize] = constants::VERYLOW;
    table[opcode::DIV as usize] = constants::LOW;
    table[opcode::SDIV as usize] = constants::LOW;
    table[opcode::MOD as usize] = constants::LOW;
    table[opcode::SMOD as usize] = constants::LOW;
    table[opcode::ADDMOD as usize] = constants::MID;
    table[opcode::MULMOD as usize] = constants::MID;
    table[opcode::EXP as usize] = constants::EXP;
    table[opcode::SIGNEXTEND as usize] = constants::LOW;

    table[opcode::LT as usize] = constants::VERYLOW;
    table[opcode::GT as usize] = constants::VERYLOW;
    table[opcode::SLT as usize] = constants::VERYLOW;
    table[opcode::SGT as usize] = constants::VERYLOW;
    table[opcode::EQ as usize] = constants::VERYLOW;
    table[opcode::ISZERO as usize] = constants::VERYLOW;
    table[opcode::AND as usize] = constants::VERYLOW;
    table[opcode::OR as usize] = constants::VERYLOW;
    table[opcode::XOR as usize] = constants::VERYLOW;
    table[opcode::NOT as usize] = constants::VERYLOW;
    table[opcode::BYTE as usize] = constants::VERYLOW;
    table[opcode::SHL as usize] = constants::VERYLOW;
    table[opcode::SHR as usize] = constants::VERYLOW;
    table[opcode::SAR as usize] = constants::VERYLOW;

    table[opcode::GASLIMIT as usize] = constants::BASE;

    table[opcode::POP as usize] = constants::BASE;
    table[opcode::MLOAD as usize] = constants::VERYLOW;
    table[opcode::MSTORE as usize] = constants::VERYLOW;
    table[opcode::MSTORE8 as usize] = constants::VERYLOW;
    table[opcode::JUMP as usize] = constants::MID;
    table[opcode::JUMPI as usize] = constants::HIGH;
    table[opcode::PC as usize] = constants::BASE;
    table[opcode::MSIZE as usize] = constants::BASE;
    table[opcode::GAS as usize] = constants::BASE;
    table[opcode::JUMPDEST as usize] = constants::JUMPDEST;

    let mut op = opcode::PUSH1 as usize;
    while op <= opcode::PUSH32 as usize {
        table[op] = constants::VERYLOW;
        op += 1;
    }

    let mut op = opcode::DUP1 as usize;
    while op <= opcode::DUP16 as usize {
        table[op] = constants::VERYLOW;
        op += 1;
    }

    let mut op = opcode::SWAP1 as usize;
    while op <= opcode::SWAP16 as usize {
        table[op] = constants::VERYLOW;
        op += 1;
    }

    table[opcode::RETURN as usize] = constants::ZERO;
    table[opcode::REVERT as usize] = constants::ZERO;
    table[opcode::INVALID as usize] = constants::ZERO;

    table
}
