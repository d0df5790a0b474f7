/*!
 * Coalescing
 * Fixed-point merge of address-adjacent free blocks
 */

use super::MemorySpace;
use crate::memory::list::BlockKey;
use log::{debug, info};

impl MemorySpace {
    /// Merge address-adjacent free blocks until none remain.
    ///
    /// Each round scans the free list for a pair `(a, b)` with
    /// `a.end() == b.address`, grows `a` in place, removes `b`, and restarts
    /// the scan so freshly grown blocks can chain further merges. The loop
    /// reaches a fixed point when a full scan finds no adjacent pair.
    /// Merging does not depend on free-list order; the survivor keeps the
    /// lower block's position. O(n²) per scan.
    pub fn defrag(&mut self) {
        let mut merges = 0usize;
        while let Some((lower, upper)) = self.adjacent_pair() {
            let Some(removed) = self.free.remove(upper) else {
                break;
            };
            if let Some(block) = self.free.block_mut(lower) {
                block.size += removed.size;
                debug!(
                    "defrag: merged {} words at {} into block at {}",
                    removed.size, removed.address, block.address
                );
            }
            merges += 1;
        }
        if merges > 0 {
            info!(
                "defrag: {} merges, {} free blocks remain",
                merges,
                self.free.len()
            );
        }
    }

    /// First pair of free blocks where the second starts exactly at the
    /// first one's end
    fn adjacent_pair(&self) -> Option<(BlockKey, BlockKey)> {
        for (a_key, a) in self.free.iter() {
            let end = a.end();
            for (b_key, b) in self.free.iter() {
                if b_key != a_key && b.address == end {
                    return Some((a_key, b_key));
                }
            }
        }
        None
    }
}
