/*!
 * Memory Traits
 * Abstractions over the simulated memory space
 */

use super::types::{MemoryPressure, MemoryResult, MemoryStats};
use crate::core::types::{Address, Size};

/// Block allocation interface
pub trait Allocator {
    /// Allocate `length` words, returning the base address of the new block
    /// or `None` when no free block fits
    fn malloc(&mut self, length: Size) -> Option<Address>;

    /// Release the allocated block starting at `address`
    fn free(&mut self, address: Address) -> MemoryResult<()>;

    /// Merge address-adjacent free blocks
    fn defrag(&mut self);
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, free)
    fn info(&self) -> (Size, Size, Size);

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
