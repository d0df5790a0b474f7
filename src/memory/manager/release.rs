/*!
 * Release
 * Returns allocated blocks to the free list
 */

use super::MemorySpace;
use crate::core::types::Address;
use crate::memory::types::{MemoryError, MemoryResult};
use log::{info, warn};

impl MemorySpace {
    /// Release the allocated block whose base address equals `address`.
    ///
    /// The block moves unchanged to the tail of the free list; no coalescing
    /// happens here. Fails with [`MemoryError::NothingAllocated`] when
    /// nothing is allocated at all; an address with no matching block is a
    /// logged no-op.
    pub fn free(&mut self, address: Address) -> MemoryResult<()> {
        if self.allocated.is_empty() {
            return Err(MemoryError::NothingAllocated);
        }

        let found = self
            .allocated
            .iter()
            .find(|(_, block)| block.address == address);

        match found {
            Some((key, block)) => {
                self.allocated.remove(key);
                self.free.push_back(block);
                info!("freed {} words at {}", block.size, address);
            }
            None => {
                warn!("free: no allocated block at address {}", address);
            }
        }
        Ok(())
    }
}
