//! Prefix-matching command tree
//!
//! The tree answers one question: does a typed word identify exactly one
//! registered command? A word may be the command itself, an unambiguous
//! prefix of it (undercompletion), or the command followed by extra
//! characters (overcompletion). Anything that could mean more than one
//! command is rejected as ambiguous.
//!
//! The tree is build-once, query-many: all commands are inserted, the tree
//! is finalized exactly once, and from then on it is read-only. Queries
//! before [`finalize`](CommandTrie::finalize) and insertions after it fail
//! fast with usage errors.
//!
//! Nodes live in a fixed-capacity arena and address each other by index;
//! both insertion and resolution are plain loops, so stack depth does not
//! grow with command length.

use heapless::{FnvIndexMap, String, Vec};

use super::error::Error;

/// Maximum number of nodes in the command tree.
///
/// One node exists per distinct character position across all registered
/// commands (shared prefixes share nodes), plus the root.
pub const MAX_TRIE_NODES: usize = 256;

/// Maximum number of children per tree node. Must be a power of two.
pub const MAX_NODE_CHILDREN: usize = 32;

/// Maximum length of a registered command name in characters.
pub const MAX_COMMAND_LENGTH: usize = 32;

/// A resolved command name, upper-cased, at most [`MAX_COMMAND_LENGTH`]
/// characters.
pub type CommandName = String<MAX_COMMAND_LENGTH>;

/// Index of a node in the tree's arena.
type NodeId = usize;

const ROOT: NodeId = 0;

/// A single node of the command tree.
///
/// The character a child represents is the key under which it is stored in
/// its parent's `children` map, so nodes do not store their own symbol.
#[derive(Debug)]
struct TrieNode {
    /// Child nodes keyed by character, in first-insertion order.
    children: FnvIndexMap<char, NodeId, MAX_NODE_CHILDREN>,
    /// True iff the path from the root to this node spells a registered
    /// command.
    terminal: bool,
    /// Maximum child count over this node and all of its descendants.
    /// Zero until [`CommandTrie::finalize`] runs.
    max_branching: usize,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: FnvIndexMap::new(),
            terminal: false,
            max_branching: 0,
        }
    }
}

/// The prefix-matching command tree.
///
/// Lifecycle: construct empty, [`insert`](Self::insert) every command,
/// call [`finalize`](Self::finalize) exactly once, then
/// [`resolve`](Self::resolve) any number of queries. Commands are stored
/// and matched ASCII upper-cased; `resolve` normalizes its input the same
/// way.
///
/// # Examples
///
/// ```rust
/// use libcmd::parser::Error;
/// use libcmd::parser::trie::CommandTrie;
///
/// let mut trie = CommandTrie::new();
/// trie.insert("add").unwrap();
/// trie.insert("addn").unwrap();
/// trie.insert("subtract").unwrap();
/// trie.finalize().unwrap();
///
/// // Exact, undercompleted, and overcompleted spellings all resolve.
/// assert_eq!(trie.resolve("add").unwrap().as_str(), "ADD");
/// assert_eq!(trie.resolve("s").unwrap().as_str(), "SUBTRACT");
/// assert_eq!(trie.resolve("addqwerty").unwrap().as_str(), "ADD");
///
/// // A prefix shared by two commands is ambiguous.
/// assert_eq!(trie.resolve("ad"), Err(Error::Ambiguous));
/// ```
#[derive(Debug)]
pub struct CommandTrie {
    /// Node arena. `nodes[0]` is the root and represents the empty string.
    /// Children are always appended after their parent, so a child's index
    /// is strictly greater than its parent's.
    nodes: Vec<TrieNode, MAX_TRIE_NODES>,
    finalized: bool,
}

impl CommandTrie {
    /// Create an empty command tree containing only the root node.
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        // Capacity is at least one, the push cannot fail.
        let _ = nodes.push(TrieNode::new());
        Self {
            nodes,
            finalized: false,
        }
    }

    /// Whether [`finalize`](Self::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a command to the tree.
    ///
    /// The command is ASCII upper-cased and one node per character is
    /// walked or created from the root; the final node is marked terminal.
    /// Commands sharing a prefix share the nodes along it. Inserting the
    /// same command twice is a no-op.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyFinalized`] - the tree has been finalized
    /// * [`Error::EmptyCommand`] - `command` is empty
    /// * [`Error::CapacityExceeded`] - `command` is longer than
    ///   [`MAX_COMMAND_LENGTH`], or a node or child limit was reached
    pub fn insert(&mut self, command: &str) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if command.is_empty() {
            return Err(Error::EmptyCommand);
        }
        if command.chars().count() > MAX_COMMAND_LENGTH {
            return Err(Error::CapacityExceeded);
        }

        let mut current = ROOT;
        for ch in command.chars() {
            let ch = ch.to_ascii_uppercase();
            current = match self.nodes[current].children.get(&ch).copied() {
                Some(child) => child,
                None => {
                    if self.nodes[current].children.len() == MAX_NODE_CHILDREN {
                        return Err(Error::CapacityExceeded);
                    }
                    let id = self.nodes.len();
                    self.nodes
                        .push(TrieNode::new())
                        .map_err(|_| Error::CapacityExceeded)?;
                    self.nodes[current]
                        .children
                        .insert(ch, id)
                        .map_err(|_| Error::CapacityExceeded)?;
                    id
                }
            };
        }
        self.nodes[current].terminal = true;
        Ok(())
    }

    /// Precompute the branching bound of every node and switch the tree to
    /// its read-only query phase.
    ///
    /// After this call, `max_branching` of a node is the maximum child
    /// count over the node and all of its descendants. A value of one
    /// guarantees a single deterministic path down to a leaf, which is
    /// what lets [`resolve`](Self::resolve) complete abbreviations without
    /// re-walking subtrees.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyFinalized`] - called more than once
    pub fn finalize(&mut self) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        // Children are appended after their parents, so a reverse scan of
        // the arena visits every child before its parent.
        for i in (0..self.nodes.len()).rev() {
            let (head, tail) = self.nodes.split_at_mut(i + 1);
            let node = &mut head[i];
            let mut max = node.children.len();
            for &child in node.children.values() {
                max = max.max(tail[child - i - 1].max_branching);
            }
            node.max_branching = max;
        }
        self.finalized = true;
        Ok(())
    }

    /// Resolve a typed word to the one registered command it identifies.
    ///
    /// The query is ASCII upper-cased and walked character by character:
    ///
    /// * While the next character has a matching child, advance.
    /// * If a character has no matching child, the walk stops: if the node
    ///   reached is terminal the trailing characters are discarded and the
    ///   command found so far is returned (overcompletion), otherwise
    ///   there is no match.
    /// * If the query is consumed at a terminal node, that command is
    ///   returned (exact match). If it is consumed at a node whose whole
    ///   subtree never branches, the single path down to the leaf is the
    ///   completed command (undercompletion). Anything else is ambiguous.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFinalized`] - [`finalize`](Self::finalize) has not run
    /// * [`Error::NoMatch`] - the query diverges from every command, or is
    ///   empty
    /// * [`Error::Ambiguous`] - the query could identify more than one
    ///   command
    pub fn resolve(&self, query: &str) -> Result<CommandName, Error> {
        if !self.finalized {
            return Err(Error::NotFinalized);
        }
        if query.is_empty() {
            return Err(Error::NoMatch);
        }

        let mut current = ROOT;
        let mut matched = CommandName::new();
        for ch in query.chars() {
            let ch = ch.to_ascii_uppercase();
            match self.nodes[current].children.get(&ch) {
                Some(&child) => {
                    matched.push(ch).map_err(|_| Error::CapacityExceeded)?;
                    current = child;
                }
                // The typed word extends past a full command: keep the
                // command, discard the rest.
                None if self.nodes[current].terminal => return Ok(matched),
                None => return Err(Error::NoMatch),
            }
        }

        let node = &self.nodes[current];
        if node.terminal {
            Ok(matched)
        } else if node.max_branching == 1 {
            self.follow_unique_path(current, matched)
        } else {
            Err(Error::Ambiguous)
        }
    }

    /// Descend the single-child chain below `start` and return the
    /// completed command.
    ///
    /// Precondition: `start`'s subtree never branches (`max_branching`
    /// is one) and `start` itself is not terminal. A terminal node met on
    /// the way down that still has a child is ambiguous: the typed word
    /// could mean that command or the longer one below it.
    fn follow_unique_path(
        &self,
        start: NodeId,
        mut matched: CommandName,
    ) -> Result<CommandName, Error> {
        let mut current = start;
        loop {
            let node = &self.nodes[current];
            if node.children.len() > 1 {
                return Err(Error::Ambiguous);
            }
            let Some((&ch, &child)) = node.children.iter().next() else {
                return Ok(matched);
            };
            if node.terminal {
                return Err(Error::Ambiguous);
            }
            matched.push(ch).map_err(|_| Error::CapacityExceeded)?;
            current = child;
        }
    }
}

impl Default for CommandTrie {
    fn default() -> Self {
        Self::new()
    }
}
