//! Quest Macros — inline placeholder resolution for quest and dialogue text.
//!
//! Detects macros like `%pcn`, `__symbol_`, and `=symbol_` inside templated
//! message text and replaces them in place with dynamically computed content:
//! player facts, gendered pronoun forms, and expansions supplied by
//! caller-owned quest resources.

pub mod core;
pub mod schema;
