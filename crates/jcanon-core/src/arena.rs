//! Bump-pointer arena backing string allocation for one parse pass.

use bumpalo::Bump;

/// Default initial arena capacity (16KB).
/// Enough for most documents without reallocation; the arena grows
/// automatically if needed.
const DEFAULT_ARENA_CAPACITY: usize = 16 * 1024;

/// A bump-pointer memory region with a monotonically advancing cursor.
///
/// Every lexeme the [`Tokenizer`](crate::Tokenizer) produces and every
/// string payload in the resulting [`Node`](crate::Node) tree is carved from
/// one `Arena`. Allocations only advance the cursor; individual allocations
/// are never freed, and the whole region is released when the arena drops.
/// Tokens and nodes borrow the arena, so the tree cannot outlive it.
///
/// The arena has exactly one owning pass and is not meant to be shared
/// across concurrently running parses.
pub struct Arena {
    bump: Bump,
}

impl Arena {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARENA_CAPACITY)
    }

    /// Create an arena with the given initial capacity in bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Copy `s` into the arena and return the arena-owned slice.
    pub fn alloc_str<'arena>(&'arena self, s: &str) -> &'arena str {
        self.bump.alloc_str(s)
    }

    /// Total bytes allocated so far, including chunk overhead.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("allocated_bytes", &self.bump.allocated_bytes())
            .finish()
    }
}
