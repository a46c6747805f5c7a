//! Pre-execution bytecode analysis.

use crate::opcode;
use bitvec::prelude::{bitvec, BitVec, Lsb0};
use bytes::Bytes;
use std::sync::Arc;

/// Number of `STOP` sentinels appended to the analyzed bytecode. 33 bytes
/// guarantee that a `PUSH32` whose opcode sits on the last code byte reads a
/// deterministic zero suffix and that the byte after its immediate is `STOP`.
const STOP_PADDING: usize = 33;

/// A map of valid `JUMPDEST` positions, one bit per original code byte.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JumpMap(Arc<BitVec<u8>>);

impl JumpMap {
    /// Returns `true` if `pc` is a valid jump destination.
    #[inline]
    pub fn is_valid(&self, pc: usize) -> bool {
        pc < self.0.len() && self.0[pc]
    }
}

/// Result of scanning a code buffer once before execution: the padded copy of
/// the bytecode and the bitmap of valid jump destinations.
///
/// An analysis is created once per code buffer and is immutable afterwards;
/// it may be shared freely between invocations.
#[derive(Clone, Debug)]
pub struct CodeAnalysis {
    /// Original bytecode followed by `STOP` sentinels.
    padded_code: Bytes,
    /// Length of the original, unpadded bytecode.
    original_len: usize,
    /// Valid jump destinations.
    jumpdest_map: JumpMap,
}

impl CodeAnalysis {
    /// Scan `code` left to right, marking `JUMPDEST` opcodes that are not
    /// part of a `PUSH` immediate, and produce the padded executable copy.
    pub fn analyze(code: &[u8]) -> Self {
        let mut jumps: BitVec<u8> = bitvec![u8, Lsb0; 0; code.len()];

        let mut i = 0;
        while i < code.len() {
            let op = code[i];
            if op == opcode::JUMPDEST {
                jumps.set(i, true);
                i += 1;
            } else if let Some(n) = opcode::OpCode::push_size(op) {
                // Immediate data is not executable; skip over it.
                i += n as usize + 1;
            } else {
                i += 1;
            }
        }

        let mut padded = Vec::with_capacity(code.len() + STOP_PADDING);
        padded.extend_from_slice(code);
        padded.resize(code.len() + STOP_PADDING, opcode::STOP);

        Self {
            padded_code: Bytes::from(padded),
            original_len: code.len(),
            jumpdest_map: JumpMap(Arc::new(jumps)),
        }
    }

    /// The padded executable bytecode.
    #[inline]
    pub fn padded_code(&self) -> &[u8] {
        &self.padded_code
    }

    /// The original bytecode without the sentinel suffix.
    #[inline]
    pub fn original_code(&self) -> &[u8] {
        &self.padded_code[..self.original_len]
    }

    /// Length of the original bytecode.
    #[inline]
    pub fn len(&self) -> usize {
        self.original_len
    }

    /// Returns whether the original bytecode is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.original_len == 0
    }

    /// Returns `true` if `pc` is inside the original code and flagged as a
    /// `JUMPDEST` outside of any `PUSH` immediate.
    #[inline]
    pub fn is_valid_jump(&self, pc: usize) -> bool {
        self.jumpdest_map.is_valid(pc)
    }
}
