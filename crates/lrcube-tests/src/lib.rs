//! Integration tests for lrcube crates.
//!
//! End-to-end checks across parsing, the color engine, cube generation
//! and storage.
