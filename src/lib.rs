//! # libcmd - Abbreviation-tolerant command parsing
//!
//! A lightweight command-line parser that maps user-typed input words to
//! registered handler functions. This library is designed for embedded
//! systems and supports `no_std` environments.
//!
//! ## Features
//!
//! ### Command Matching
//! - **Exact matching**: A fully typed command always resolves to itself
//! - **Undercompletion**: An abbreviated command resolves when it is an
//!   unambiguous prefix of exactly one registered command (`s` → `subtract`)
//! - **Overcompletion**: A command with trailing garbage resolves once the
//!   typed text has passed a registered command (`addqwerty` → `add`)
//! - **Ambiguity rejection**: Input that could mean more than one command is
//!   rejected rather than guessed at
//!
//! ### Dispatch
//! - String-keyed handler registry with per-command argument counts
//! - Whitespace tokenization of input lines
//! - Surplus arguments are truncated, deficits are reported as errors
//!
//! ### Embedded-First
//! - **Zero-allocation**: All structures use fixed-size `heapless` storage
//! - Commands are case-insensitive (ASCII upper-cased at the boundary)
//! - No I/O: every failure is returned as a value, never printed
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcmd = "0.1.0"
//! ```
//!
//! ### Basic Example
//!
//! ```rust
//! use libcmd::parser::{Arity, Parser};
//!
//! fn add(args: &[&str]) -> i32 {
//!     args.iter().filter_map(|a| a.parse::<i32>().ok()).sum()
//! }
//!
//! fn subtract(args: &[&str]) -> i32 {
//!     args[0].parse::<i32>().unwrap_or(0) - args[1].parse::<i32>().unwrap_or(0)
//! }
//!
//! let mut parser = Parser::new();
//! parser.register_command("add", add, Arity::Variadic).unwrap();
//! parser.register_command("subtract", subtract, Arity::Exact(2)).unwrap();
//! parser.initialize().unwrap();
//!
//! assert_eq!(parser.execute("add 2 4 6 8"), Ok(20));
//! assert_eq!(parser.execute("s 20 3"), Ok(17)); // undercompletion
//! ```
//!
//! ### Standalone Command Tree
//!
//! The prefix tree can be used on its own when the host wants to keep its
//! own dispatch table:
//!
//! ```rust
//! use libcmd::parser::trie::CommandTrie;
//! use libcmd::parser::Error;
//!
//! let mut trie = CommandTrie::new();
//! trie.insert("add").unwrap();
//! trie.insert("addn").unwrap();
//! trie.insert("subtract").unwrap();
//! trie.finalize().unwrap();
//!
//! assert_eq!(trie.resolve("s").unwrap().as_str(), "SUBTRACT");
//! assert_eq!(trie.resolve("ad"), Err(Error::Ambiguous));
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Command parsing and dispatch.
///
/// Contains the prefix-matching command tree and the registry/dispatch
/// layer that routes tokenized input lines to handler functions.
pub mod parser;
