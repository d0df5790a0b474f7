/*!
 * Allocation
 * Best-fit placement over the free list
 */

use super::MemorySpace;
use crate::core::types::{Address, Size};
use crate::memory::list::BlockKey;
use crate::memory::types::Block;
use log::{error, info, warn};

impl MemorySpace {
    /// Allocate a block of `length` words.
    ///
    /// Scans the free list in list order for the block with the least
    /// leftover space; an equally good block found later never displaces the
    /// current candidate. Returns the base address of the carved block, or
    /// `None` when no free block is large enough. A failed call leaves both
    /// lists untouched.
    pub fn malloc(&mut self, length: Size) -> Option<Address> {
        if length == 0 {
            warn!("malloc: zero-length request refused");
            return None;
        }

        let mut candidate: Option<(usize, BlockKey, Block)> = None;
        let mut best_leftover = Size::MAX;
        for (index, (key, block)) in self.free.iter().enumerate() {
            if block.size < length {
                continue;
            }
            let leftover = block.size - length;
            if candidate.is_none() || leftover < best_leftover {
                candidate = Some((index, key, block));
                best_leftover = leftover;
            }
        }

        let Some((index, key, block)) = candidate else {
            warn!(
                "malloc: no free block can satisfy {} words ({} free blocks)",
                length,
                self.free.len()
            );
            return None;
        };

        let leftover = block.size - length;
        self.allocated.push_back(Block::new(block.address, length));
        self.free.remove(key);

        if leftover > 0 {
            let remainder = Block::new(block.address + length, leftover);
            if self.free.insert(index, remainder).is_err() {
                error!(
                    "malloc: free-list position {} vanished during split; appending remainder",
                    index
                );
                self.free.push_back(remainder);
            }
            info!(
                "allocated {} words at {}, split remainder of {} words at {}",
                length, block.address, leftover, remainder.address
            );
        } else {
            info!("allocated {} words at {} (exact fit)", length, block.address);
        }

        Some(block.address)
    }
}
