/*!
 * Block List
 * Arena-backed ordered sequence of memory blocks
 */

use super::types::{Block, MemoryError, MemoryResult};
use std::collections::VecDeque;
use std::fmt;

/// Stable handle to a block stored in a [`BlockList`].
///
/// Keys survive unrelated insertions and removals, so a caller can hold on to
/// a block found during a scan and remove or grow it later without a second
/// lookup by value. A key dies when its block is removed; its slot may be
/// recycled by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockKey(u32);

/// Ordered, mutable sequence of [`Block`] descriptors.
///
/// Storage is an arena of slots plus a free-index list; list order lives in a
/// separate double-ended queue of keys. Front/back insertion is O(1),
/// interior insertion and handle removal are O(n). Duplicate values are
/// representable; nothing here enforces uniqueness.
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    slots: Vec<Option<Block>>,
    free_slots: Vec<u32>,
    order: VecDeque<BlockKey>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks in the sequence
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Block at `index`, front to back
    pub fn get(&self, index: usize) -> MemoryResult<Block> {
        self.order
            .get(index)
            .and_then(|&key| self.block(key))
            .ok_or(MemoryError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Handle of the block at `index`
    pub fn key_at(&self, index: usize) -> MemoryResult<BlockKey> {
        self.order
            .get(index)
            .copied()
            .ok_or(MemoryError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Block behind `key`, if the key is still live
    #[inline]
    pub fn block(&self, key: BlockKey) -> Option<Block> {
        self.slots.get(key.0 as usize).copied().flatten()
    }

    /// Mutable access to the block behind `key`.
    ///
    /// Coalescing uses this to grow a block in place without disturbing its
    /// list position.
    #[inline]
    pub fn block_mut(&mut self, key: BlockKey) -> Option<&mut Block> {
        self.slots.get_mut(key.0 as usize)?.as_mut()
    }

    /// Index of the first block equal to `block` (both fields), or `None`
    pub fn index_of(&self, block: &Block) -> Option<usize> {
        self.iter().position(|(_, b)| b == *block)
    }

    pub fn front(&self) -> Option<Block> {
        self.order.front().and_then(|&key| self.block(key))
    }

    pub fn back(&self) -> Option<Block> {
        self.order.back().and_then(|&key| self.block(key))
    }

    /// Inserts `block` before position `index`.
    ///
    /// `index == 0` and `index == len` complete in O(1); interior positions
    /// shift the order queue. Fails with `OutOfRange` when `index > len`.
    pub fn insert(&mut self, index: usize, block: Block) -> MemoryResult<BlockKey> {
        let len = self.len();
        if index > len {
            return Err(MemoryError::OutOfRange { index, len });
        }
        if index == 0 {
            return Ok(self.push_front(block));
        }
        if index == len {
            return Ok(self.push_back(block));
        }
        let key = self.claim_slot(block);
        self.order.insert(index, key);
        Ok(key)
    }

    /// O(1) insertion at the front
    pub fn push_front(&mut self, block: Block) -> BlockKey {
        let key = self.claim_slot(block);
        self.order.push_front(key);
        key
    }

    /// O(1) insertion at the back
    pub fn push_back(&mut self, block: Block) -> BlockKey {
        let key = self.claim_slot(block);
        self.order.push_back(key);
        key
    }

    /// Removes and returns the block at `index`
    pub fn remove_at(&mut self, index: usize) -> MemoryResult<Block> {
        let len = self.len();
        let key = self
            .order
            .remove(index)
            .ok_or(MemoryError::OutOfRange { index, len })?;
        self.release_slot(key)
            .ok_or(MemoryError::OutOfRange { index, len })
    }

    /// Removes the block behind `key`. Returns `None` for a dead key.
    pub fn remove(&mut self, key: BlockKey) -> Option<Block> {
        let pos = self.order.iter().position(|&k| k == key)?;
        self.order.remove(pos);
        self.release_slot(key)
    }

    /// Removes the first block equal to `block`.
    ///
    /// An absent value is a silent no-op returning `None`.
    pub fn remove_value(&mut self, block: &Block) -> Option<Block> {
        let index = self.index_of(block)?;
        self.remove_at(index).ok()
    }

    /// Restartable forward cursor over `(key, block)` pairs
    pub fn iter(&self) -> Cursor<'_> {
        Cursor { list: self, pos: 0 }
    }

    /// Blocks front to back, without handles
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.iter().map(|(_, block)| block)
    }

    fn claim_slot(&mut self, block: Block) -> BlockKey {
        match self.free_slots.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(block);
                BlockKey(slot)
            }
            None => {
                self.slots.push(Some(block));
                BlockKey((self.slots.len() - 1) as u32)
            }
        }
    }

    fn release_slot(&mut self, key: BlockKey) -> Option<Block> {
        let block = self.slots.get_mut(key.0 as usize)?.take()?;
        self.free_slots.push(key.0);
        Some(block)
    }
}

impl fmt::Display for BlockList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.blocks() {
            write!(f, "{} ", block)?;
        }
        Ok(())
    }
}

/// Forward cursor over a [`BlockList`].
///
/// Every call to [`BlockList::iter`] starts a fresh cursor at the front;
/// scans that mutate the list restart by taking a new cursor.
#[derive(Debug)]
pub struct Cursor<'a> {
    list: &'a BlockList,
    pos: usize,
}

impl Iterator for Cursor<'_> {
    type Item = (BlockKey, Block);

    fn next(&mut self) -> Option<Self::Item> {
        let key = *self.list.order.get(self.pos)?;
        self.pos += 1;
        Some((key, self.list.block(key)?))
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = (BlockKey, Block);
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
