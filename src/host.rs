//! Host interface of the interpreter.
//!
//! The opcode subset executed by this core requires no host queries, so the
//! trait carries none; it is the seam where a fuller opcode set (CALL,
//! SSTORE, LOG, block queries) would add per-opcode hooks. Instructions
//! receive the host as an explicit parameter so adding a hook does not
//! change the dispatch shape.

/// EVM context host.
pub trait Host {}

/// The no-op host used by the CLI and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct DummyHost;

impl Host for DummyHost {}
