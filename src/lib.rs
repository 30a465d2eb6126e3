//! Block Blast (workspace facade crate).
//!
//! This package exposes `block_blast::{core,term,input,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod cli;

pub use block_blast_core as core;
pub use block_blast_input as input;
pub use block_blast_term as term;
pub use block_blast_types as types;
