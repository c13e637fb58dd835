//! Command registration and dispatch for embedded command lines.
//!
//! This module routes typed input lines to registered handler functions.
//! It tolerates abbreviated and extended command spellings, validates
//! argument counts, and returns every failure as a value so the host
//! decides how to report errors.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Input Line    │───▶│  Command Tree   │───▶│    Registry     │
//! │  (Tokenization) │    │  (Resolution)   │    │   (Dispatch)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The first whitespace-separated token of a line is the command word; it
//! is resolved through the [`trie::CommandTrie`] to exactly one registered
//! command name, which keys the handler registry. The remaining tokens are
//! passed to the handler as raw argument strings, truncated or rejected
//! according to the command's [`Arity`].
//!
//! # Usage Examples
//!
//! ## Basic Setup
//!
//! ```rust
//! use libcmd::parser::{Arity, Error, Parser};
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
//! assert_eq!(parser.execute("subtract 20 3"), Ok(17));
//! assert_eq!(parser.execute("subtract 20 3 5"), Ok(17)); // surplus dropped
//! assert_eq!(parser.execute("subtract 20"), Err(Error::TooFewArguments));
//! ```
//!
//! ## Abbreviated and Extended Spellings
//!
//! ```rust
//! use libcmd::parser::{Arity, Error, Parser};
//!
//! fn greet(_args: &[&str]) -> &'static str {
//!     "You can do it!"
//! }
//!
//! fn noop(_args: &[&str]) -> &'static str {
//!     ""
//! }
//!
//! let mut parser = Parser::new();
//! parser.register_command("encourage", greet, Arity::Exact(0)).unwrap();
//! parser.register_command("exit", noop, Arity::Exact(0)).unwrap();
//! parser.initialize().unwrap();
//!
//! // "en" is an unambiguous prefix, "encouragement" extends past the
//! // registered command; both resolve to it.
//! assert_eq!(parser.execute("en"), Ok("You can do it!"));
//! assert_eq!(parser.execute("encouragement"), Ok("You can do it!"));
//! // "e" could start either command.
//! assert_eq!(parser.execute("e"), Err(Error::Ambiguous));
//! ```

#![deny(unsafe_code)]

use heapless::{FnvIndexMap, Vec};

pub mod error;
pub mod trie;

pub use error::Error;
pub use trie::{CommandName, CommandTrie, MAX_COMMAND_LENGTH};

/// Maximum number of registered commands. Must be a power of two.
pub const MAX_COMMANDS: usize = 32;

/// Maximum number of whitespace-separated tokens per input line, including
/// the command word itself.
pub const MAX_TOKENS: usize = 16;

/// Function signature for command handlers.
///
/// Handlers receive the argument tokens (the command word excluded) as
/// string slices and convert them as needed. The number of elements is
/// governed by the [`Arity`] the command was registered with.
pub type CommandFn<T> = fn(args: &[&str]) -> T;

/// How many arguments a command expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments. Surplus arguments are dropped before
    /// the handler runs; a deficit fails with
    /// [`Error::TooFewArguments`].
    Exact(usize),
    /// Any number of arguments, passed through untouched.
    Variadic,
}

/// A registered handler and its declared argument count.
struct CommandEntry<T> {
    handler: CommandFn<T>,
    arity: Arity,
}

/// The command parser.
///
/// Pairs a handler registry with a prefix-matching command tree. The
/// lifecycle mirrors the tree's: register every command, call
/// [`initialize`](Self::initialize) once, then [`execute`](Self::execute)
/// input lines. Registration after initialization fails fast, as does
/// execution before it.
///
/// The type parameter `T` is the handlers' common return type;
/// [`execute`](Self::execute) forwards it to the caller.
pub struct Parser<T> {
    commands: FnvIndexMap<CommandName, CommandEntry<T>, MAX_COMMANDS>,
    trie: CommandTrie,
}

impl<T> Parser<T> {
    /// Create a parser with no registered commands.
    pub fn new() -> Self {
        Self {
            commands: FnvIndexMap::new(),
            trie: CommandTrie::new(),
        }
    }

    /// Record a command-handler pair in the registry.
    ///
    /// Command names are case-insensitive and stored ASCII upper-cased.
    /// Registering a name that normalizes to an already-registered key
    /// replaces the previous entry; the last registration wins.
    ///
    /// # Arguments
    ///
    /// * `name` - The text command that will call the handler
    /// * `handler` - The function bound to the command
    /// * `arity` - The number of arguments the handler expects
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyFinalized`] - the parser is already initialized
    /// * [`Error::EmptyCommand`] - `name` is empty
    /// * [`Error::CapacityExceeded`] - `name` is longer than
    ///   [`MAX_COMMAND_LENGTH`] or the registry is full
    pub fn register_command(
        &mut self,
        name: &str,
        handler: CommandFn<T>,
        arity: Arity,
    ) -> Result<(), Error> {
        if self.trie.is_finalized() {
            return Err(Error::AlreadyFinalized);
        }
        if name.is_empty() {
            return Err(Error::EmptyCommand);
        }
        let mut key = CommandName::new();
        for ch in name.chars() {
            key.push(ch.to_ascii_uppercase())
                .map_err(|_| Error::CapacityExceeded)?;
        }
        self.commands
            .insert(key, CommandEntry { handler, arity })
            .map_err(|_| Error::CapacityExceeded)?;
        Ok(())
    }

    /// Build the command tree from the registered names.
    ///
    /// Must be called after all registrations and before any
    /// [`execute`](Self::execute) call.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyFinalized`] - called more than once
    /// * [`Error::CapacityExceeded`] - the command set overflows the tree
    pub fn initialize(&mut self) -> Result<(), Error> {
        if self.trie.is_finalized() {
            return Err(Error::AlreadyFinalized);
        }
        for name in self.commands.keys() {
            self.trie.insert(name)?;
        }
        self.trie.finalize()
    }

    /// Parse an input line and run the command it names.
    ///
    /// The line is split on whitespace; the first token is resolved to a
    /// registered command (tolerating abbreviated and extended spellings)
    /// and the remaining tokens become the handler's arguments, subject to
    /// the command's [`Arity`]. Returns the handler's return value.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFinalized`] - [`initialize`](Self::initialize) has
    ///   not run
    /// * [`Error::NoMatch`] - the line is empty or names no command
    /// * [`Error::Ambiguous`] - the command word could mean more than one
    ///   command
    /// * [`Error::TooFewArguments`] - fewer arguments than the command's
    ///   exact arity
    /// * [`Error::CapacityExceeded`] - more than [`MAX_TOKENS`] tokens
    pub fn execute(&self, input: &str) -> Result<T, Error> {
        if !self.trie.is_finalized() {
            return Err(Error::NotFinalized);
        }

        let mut tokens: Vec<&str, MAX_TOKENS> = Vec::new();
        for token in input.split_whitespace() {
            tokens.push(token).map_err(|_| Error::CapacityExceeded)?;
        }
        let Some((word, args)) = tokens.split_first() else {
            return Err(Error::NoMatch);
        };

        let name = self.trie.resolve(word)?;
        let entry = self.commands.get(&name).ok_or(Error::NoMatch)?;
        match entry.arity {
            Arity::Variadic => Ok((entry.handler)(args)),
            Arity::Exact(count) => {
                if args.len() < count {
                    return Err(Error::TooFewArguments);
                }
                Ok((entry.handler)(&args[..count]))
            }
        }
    }
}

impl<T> Default for Parser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Parser")
            .field("commands", &self.commands.len())
            .field("initialized", &self.trie.is_finalized())
            .finish_non_exhaustive()
    }
}
