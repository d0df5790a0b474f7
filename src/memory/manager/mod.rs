/*!
 * Memory Space
 *
 * Simulated contiguous address space tracked through two block lists.
 *
 * ## Placement
 *
 * - **Best fit**: `malloc` scans the whole free list and carves from the
 *   block with the smallest leftover; ties keep the first candidate seen.
 * - **Splitting**: a larger block is split, the remainder staying at the
 *   candidate's position in the free list.
 * - **Coalescing**: opt-in via `defrag`; `malloc` never triggers it.
 *
 * Single logical owner, no suspension points: every operation runs to
 * completion before returning.
 */

mod alloc;
mod defrag;
mod release;
mod stats;

use super::list::BlockList;
use super::traits::{Allocator, MemoryInfo};
use super::types::{Block, MemoryError, MemoryResult, MemoryStats};
use crate::core::limits::DEFAULT_SPACE_WORDS;
use crate::core::types::{Address, Size};
use log::info;
use std::fmt;

/// Simulated memory space
///
/// Owns a free list and an allocated list; blocks only ever move between the
/// two, so the tracked word count is conserved across every operation.
#[derive(Debug, Clone)]
pub struct MemorySpace {
    free: BlockList,
    allocated: BlockList,
    total_words: Size,
}

impl MemorySpace {
    /// Create a memory space of `max_size` words, seeded with a single free
    /// block spanning the whole range
    pub fn new(max_size: Size) -> MemoryResult<Self> {
        if max_size == 0 {
            return Err(MemoryError::InvalidSize(max_size));
        }
        let mut free = BlockList::new();
        free.push_back(Block::new(0, max_size));
        info!("memory space initialized with {} words", max_size);
        Ok(Self {
            free,
            allocated: BlockList::new(),
            total_words: max_size,
        })
    }

    /// Configured size of the managed space, in words
    pub fn total_words(&self) -> Size {
        self.total_words
    }

    /// Read-only view of the free list, in list order
    pub fn free_list(&self) -> &BlockList {
        &self.free
    }

    /// Read-only view of the allocated list, in list order
    pub fn allocated_list(&self) -> &BlockList {
        &self.allocated
    }
}

// Implement trait interfaces
impl Allocator for MemorySpace {
    fn malloc(&mut self, length: Size) -> Option<Address> {
        MemorySpace::malloc(self, length)
    }

    fn free(&mut self, address: Address) -> MemoryResult<()> {
        MemorySpace::free(self, address)
    }

    fn defrag(&mut self) {
        MemorySpace::defrag(self)
    }
}

impl MemoryInfo for MemorySpace {
    fn stats(&self) -> MemoryStats {
        MemorySpace::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemorySpace::info(self)
    }
}

impl fmt::Display for MemorySpace {
    // free list on the first line, allocated list on the second, list order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.free)?;
        write!(f, "{}", self.allocated)
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        let mut free = BlockList::new();
        free.push_back(Block::new(0, DEFAULT_SPACE_WORDS));
        Self {
            free,
            allocated: BlockList::new(),
            total_words: DEFAULT_SPACE_WORDS,
        }
    }
}
