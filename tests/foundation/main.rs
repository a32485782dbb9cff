//! Integration tests for Layer 0: Foundation
//!
//! Tests for keys, the slot allocator, and error types.

mod errors;
mod slotmap;
