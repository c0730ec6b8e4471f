//! Snapshot assembly: key rotation followed by currency normalization.

mod assembler;

pub use assembler::SnapshotAssembler;
