//! Unit tests - crate-level tests of the public generation and intake API
//!
//! No graph store is needed; the store is replaced by a mock executor.

mod generation_properties;
mod intake_executor_tests;
