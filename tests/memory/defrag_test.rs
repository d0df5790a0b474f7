/*!
 * Coalescing Tests
 * Merging address-adjacent free blocks
 */

use memspace::{Block, MemorySpace};
use pretty_assertions::assert_eq;

fn free_blocks(space: &MemorySpace) -> Vec<Block> {
    space.free_list().blocks().collect()
}

fn allocated_blocks(space: &MemorySpace) -> Vec<Block> {
    space.allocated_list().blocks().collect()
}

/// Free blocks {0,5},{5,5},{20,3} with {10,10} still allocated
fn adjacent_free_pair() -> MemorySpace {
    let mut space = MemorySpace::new(23).unwrap();
    assert_eq!(space.malloc(5), Some(0));
    assert_eq!(space.malloc(5), Some(5));
    assert_eq!(space.malloc(10), Some(10));
    assert_eq!(space.malloc(3), Some(20));
    space.free(0).unwrap();
    space.free(5).unwrap();
    space.free(20).unwrap();
    assert_eq!(
        free_blocks(&space),
        vec![Block::new(0, 5), Block::new(5, 5), Block::new(20, 3)]
    );
    space
}

#[test]
fn test_defrag_merges_adjacent_blocks() {
    let mut space = adjacent_free_pair();
    space.defrag();

    // merged block keeps the lower base address and its list position
    assert_eq!(
        free_blocks(&space),
        vec![Block::new(0, 10), Block::new(20, 3)]
    );
}

#[test]
fn test_defrag_is_idempotent() {
    let mut space = adjacent_free_pair();
    space.defrag();
    let once = free_blocks(&space);

    space.defrag();
    assert_eq!(free_blocks(&space), once);
}

#[test]
fn test_defrag_merges_blocks_listed_out_of_address_order() {
    let mut space = MemorySpace::new(10).unwrap();
    assert_eq!(space.malloc(5), Some(0));
    assert_eq!(space.malloc(5), Some(5));
    space.free(5).unwrap();
    space.free(0).unwrap();
    assert_eq!(
        free_blocks(&space),
        vec![Block::new(5, 5), Block::new(0, 5)]
    );

    space.defrag();
    assert_eq!(free_blocks(&space), vec![Block::new(0, 10)]);
}

#[test]
fn test_defrag_chains_merges_through_grown_blocks() {
    let mut space = MemorySpace::new(30).unwrap();
    assert_eq!(space.malloc(10), Some(0));
    assert_eq!(space.malloc(10), Some(10));
    assert_eq!(space.malloc(10), Some(20));
    space.free(20).unwrap();
    space.free(0).unwrap();
    space.free(10).unwrap();
    assert_eq!(
        free_blocks(&space),
        vec![Block::new(20, 10), Block::new(0, 10), Block::new(10, 10)]
    );

    space.defrag();
    assert_eq!(free_blocks(&space), vec![Block::new(0, 30)]);
}

#[test]
fn test_defrag_on_fresh_space_is_a_noop() {
    let mut space = MemorySpace::new(50).unwrap();
    space.defrag();
    assert_eq!(free_blocks(&space), vec![Block::new(0, 50)]);
}

#[test]
fn test_defrag_leaves_allocated_blocks_alone() {
    let mut space = adjacent_free_pair();
    let allocated_before = allocated_blocks(&space);

    space.defrag();
    assert_eq!(allocated_blocks(&space), allocated_before);
}

#[test]
fn test_malloc_does_not_coalesce_on_its_own() {
    let mut space = MemorySpace::new(10).unwrap();
    assert_eq!(space.malloc(5), Some(0));
    assert_eq!(space.malloc(5), Some(5));
    space.free(0).unwrap();
    space.free(5).unwrap();

    // 10 contiguous words are free, but split across two blocks
    assert_eq!(space.malloc(10), None);

    space.defrag();
    assert_eq!(space.malloc(10), Some(0));
}
