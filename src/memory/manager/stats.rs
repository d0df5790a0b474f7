/*!
 * Statistics
 * Usage reporting over the simulated space
 */

use super::MemorySpace;
use crate::core::types::Size;
use crate::memory::types::MemoryStats;

impl MemorySpace {
    /// Snapshot of current usage and fragmentation
    pub fn stats(&self) -> MemoryStats {
        let used_words: Size = self.allocated.blocks().map(|b| b.size).sum();
        let free_words: Size = self.free.blocks().map(|b| b.size).sum();
        let largest_free_block = self.free.blocks().map(|b| b.size).max().unwrap_or(0);

        MemoryStats {
            total_words: self.total_words,
            used_words,
            free_words,
            usage_percentage: (used_words as f64 / self.total_words as f64) * 100.0,
            allocated_blocks: self.allocated.len(),
            free_blocks: self.free.len(),
            largest_free_block,
        }
    }

    /// Memory info as (total, used, free)
    pub fn info(&self) -> (Size, Size, Size) {
        let stats = self.stats();
        (stats.total_words, stats.used_words, stats.free_words)
    }
}
