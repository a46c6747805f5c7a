//! End-to-end bytecode execution tests.

use proptest::prelude::*;
use sevm::{decode_hex, interpret, CodeAnalysis, DummyHost, Fault, Outcome, Status, U256};

const GAS_LIMIT: u64 = 100_000;

fn run_bytes(code: &[u8], gas_limit: u64) -> Outcome {
    let analysis = CodeAnalysis::analyze(code);
    let mut host = DummyHost;
    interpret(&analysis, &mut host, gas_limit, U256::ZERO, &[])
}

fn run(code_hex: &str, gas_limit: u64) -> Outcome {
    run_bytes(&decode_hex(code_hex).unwrap(), gas_limit)
}

/// Appends `MSTORE at 0; RETURN 32 bytes from 0` so the value on top of the
/// stack becomes the return data.
fn ret_top(prefix: &[u8]) -> Vec<u8> {
    let mut code = prefix.to_vec();
    code.extend_from_slice(&[0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3]);
    code
}

fn push32(value: U256) -> Vec<u8> {
    let mut code = vec![0x7f];
    code.extend_from_slice(&value.to_be_bytes::<32>());
    code
}

#[test]
fn simple_return() {
    // PUSH1 0xbe; PUSH1 0x00; MSTORE8; implicit STOP.
    let outcome = run("60be600053", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert!(outcome.return_data.is_empty());
    // 3 + 3 + (3 base + 3 expansion to one word)
    assert_eq!(outcome.gas_left, GAS_LIMIT - 12);
}

#[test]
fn add_and_return() {
    // PUSH1 3; PUSH1 4; ADD; MSTORE at 0; RETURN 32 bytes from 0.
    let outcome = run("600360040160005260206000f3", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.return_data.as_ref(), &U256::from(7u64).to_be_bytes::<32>());
    assert_eq!(outcome.gas_left, GAS_LIMIT - 24);
}

#[test]
fn revert_preserves_payload_and_gas() {
    // Store 0xaa in the first word, REVERT 32 bytes.
    let outcome = run("60aa60005260206000fd", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Revert);
    assert_eq!(outcome.return_data.len(), 32);
    assert_eq!(outcome.return_data[31], 0xaa);
    assert_eq!(outcome.gas_left, GAS_LIMIT - 18);
}

#[test]
fn bad_jump_faults() {
    // PUSH1 3; JUMP -- position 3 is past the end of the two-byte program.
    let outcome = run("600356", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Fault(Fault::BadJumpDestination));
    assert!(outcome.return_data.is_empty());
    assert_eq!(outcome.gas_left, 0);
}

#[test]
fn pop_on_empty_stack_faults() {
    let outcome = run("50", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Fault(Fault::StackUnderflow));
    assert_eq!(outcome.gas_left, 0);
}

#[test]
fn out_of_gas_on_first_opcode() {
    let outcome = run("6001", 1);
    assert_eq!(outcome.status, Status::Fault(Fault::OutOfGas));
    assert_eq!(outcome.gas_left, 0);
}

#[test]
fn jump_to_jumpdest_skips_invalid() {
    // PUSH1 4; JUMP; INVALID; JUMPDEST; STOP.
    let outcome = run("600456fe5b00", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.gas_left, GAS_LIMIT - 12);
}

#[test]
fn jumpi_taken_and_not_taken() {
    // PUSH1 cond; PUSH1 6; JUMPI; INVALID; JUMPDEST; STOP.
    let taken = run("6001600657fe5b00", GAS_LIMIT);
    assert_eq!(taken.status, Status::Success);

    let not_taken = run("6000600657fe5b00", GAS_LIMIT);
    assert_eq!(not_taken.status, Status::Fault(Fault::InvalidInstruction));
    assert_eq!(not_taken.gas_left, 0);
}

#[test]
fn jump_into_push_immediate_faults() {
    // PUSH1 0x5b; PUSH1 1; JUMP -- position 1 is immediate data.
    let outcome = run("605b600156", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Fault(Fault::BadJumpDestination));
}

#[test]
fn pc_pushes_offset_of_its_own_opcode() {
    // PUSH1 1; PC (at offset 2); return the pushed value.
    let outcome = run("60015860005260206000f3", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.return_data.as_ref(), &U256::from(2u64).to_be_bytes::<32>());
}

#[test]
fn gas_opcode_reports_remaining_after_its_own_cost() {
    // GAS; return the pushed value.
    let outcome = run("5a60005260206000f3", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(
        outcome.return_data.as_ref(),
        &U256::from(GAS_LIMIT - 2).to_be_bytes::<32>()
    );
}

#[test]
fn gaslimit_reports_frame_limit() {
    let outcome = run("4560005260206000f3", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(
        outcome.return_data.as_ref(),
        &U256::from(GAS_LIMIT).to_be_bytes::<32>()
    );
}

#[test]
fn truncated_push_reads_sentinel_zeros() {
    // A PUSH32 with a single immediate byte available; the padding supplies
    // the zero suffix and the implicit STOP.
    let outcome = run("7fff", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.gas_left, GAS_LIMIT - 3);
}

#[test]
fn invalid_opcode_faults() {
    let outcome = run("fe", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Fault(Fault::InvalidInstruction));
    assert_eq!(outcome.gas_left, 0);
}

#[test]
fn opcodes_outside_the_subset_are_unsupported() {
    // Unassigned byte, CALLVALUE, SSTORE, PUSH0: all outside the executed
    // subset and rejected alike.
    for code in ["0c", "34", "6001600155", "5f"] {
        let outcome = run(code, GAS_LIMIT);
        assert_eq!(
            outcome.status,
            Status::Fault(Fault::UnsupportedOpcode),
            "code {code}"
        );
        assert_eq!(outcome.gas_left, 0);
    }
}

#[test]
fn huge_memory_expansion_runs_out_of_gas() {
    // PUSH1 0 (value); PUSH4 0xffffffff (offset); MSTORE.
    let outcome = run("600063ffffffff52", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Fault(Fault::OutOfGas));
    assert_eq!(outcome.gas_left, 0);
}

#[test]
fn memory_offset_past_u32_max_overflows() {
    // PUSH1 0 (value); PUSH5 2^32 (offset); MSTORE.
    let outcome = run("600064010000000052", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Fault(Fault::IntegerOverflow));
}

#[test]
fn return_range_past_u32_max_overflows() {
    // PUSH4 0xffffffff (size); PUSH4 0xffffffff (offset); RETURN.
    let outcome = run("63ffffffff63fffffffff3", GAS_LIMIT);
    assert_eq!(outcome.status, Status::Fault(Fault::IntegerOverflow));
}

#[test]
fn sdiv_int_min_by_minus_one_is_int_min() {
    let int_min = U256::from(1u64) << 255usize;
    let mut code = push32(U256::MAX); // -1, the divisor
    code.extend_from_slice(&push32(int_min)); // dividend on top
    code.push(0x05);
    let outcome = run_bytes(&ret_top(&code), GAS_LIMIT);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.return_data.as_ref(), &int_min.to_be_bytes::<32>());
}

proptest! {
    #[test]
    fn division_by_zero_yields_zero(bytes in any::<[u8; 32]>()) {
        let value = U256::from_be_bytes(bytes);
        for op in [0x04u8, 0x05, 0x06, 0x07] {
            let mut code = push32(U256::ZERO); // zero divisor
            code.extend_from_slice(&push32(value)); // dividend on top
            code.push(op);
            let outcome = run_bytes(&ret_top(&code), GAS_LIMIT);
            prop_assert_eq!(outcome.status, Status::Success);
            prop_assert_eq!(outcome.return_data.as_ref(), &[0u8; 32]);
        }
    }

    #[test]
    fn shifts_saturate_at_256(bytes in any::<[u8; 32]>(), shift in 256u64..100_000) {
        let value = U256::from_be_bytes(bytes);
        for (op, expected) in [
            (0x1bu8, U256::ZERO),
            (0x1c, U256::ZERO),
            (0x1d, if value.bit(255) { U256::MAX } else { U256::ZERO }),
        ] {
            let mut code = push32(value);
            code.extend_from_slice(&push32(U256::from(shift))); // shift on top
            code.push(op);
            let outcome = run_bytes(&ret_top(&code), GAS_LIMIT);
            prop_assert_eq!(outcome.status, Status::Success);
            prop_assert_eq!(outcome.return_data.as_ref(), &expected.to_be_bytes::<32>());
        }
    }

    #[test]
    fn pushed_tail_is_zero_extended(len in 0usize..32) {
        // PUSH32 at the end of the code with only `len` immediate bytes:
        // the pushed value is the suffix zero-extended on the right.
        let mut code = vec![0x7f];
        code.extend(std::iter::repeat(0xab).take(len));
        let outcome = run_bytes(&code, GAS_LIMIT);
        prop_assert_eq!(outcome.status, Status::Success);
        prop_assert_eq!(outcome.gas_left, GAS_LIMIT - 3);
    }
}
