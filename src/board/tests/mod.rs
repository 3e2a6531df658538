//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `games.rs` - Whole game sequences and result codes
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests
