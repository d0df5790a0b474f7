/*!
 * Property Tests
 * Invariants over random operation sequences
 */

use memspace::{MemoryError, MemorySpace};
use proptest::prelude::*;

const SPACE_WORDS: usize = 64;

#[derive(Debug, Clone)]
enum Op {
    Malloc(usize),
    Free(usize),
    Defrag,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..=24).prop_map(Op::Malloc),
        (0usize..SPACE_WORDS).prop_map(Op::Free),
        Just(Op::Defrag),
    ]
}

fn apply(space: &mut MemorySpace, op: &Op) {
    match op {
        Op::Malloc(length) => {
            let _ = space.malloc(*length);
        }
        Op::Free(address) => match space.free(*address) {
            Ok(()) => {}
            Err(MemoryError::NothingAllocated) => {
                assert!(space.allocated_list().is_empty());
            }
            Err(other) => panic!("unexpected error from free: {other}"),
        },
        Op::Defrag => space.defrag(),
    }
}

fn tracked_words(space: &MemorySpace) -> (usize, usize) {
    let free = space.free_list().blocks().map(|b| b.size).sum();
    let used = space.allocated_list().blocks().map(|b| b.size).sum();
    (free, used)
}

fn assert_disjoint(space: &MemorySpace) {
    let mut ranges: Vec<(usize, usize)> = space
        .free_list()
        .blocks()
        .chain(space.allocated_list().blocks())
        .map(|b| (b.address, b.end()))
        .collect();
    ranges.sort();
    for pair in ranges.windows(2) {
        assert!(
            pair[0].1 <= pair[1].0,
            "overlapping ranges {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

proptest! {
    #[test]
    fn words_conserved_and_ranges_disjoint(
        ops in prop::collection::vec(op_strategy(), 1..80)
    ) {
        let mut space = MemorySpace::new(SPACE_WORDS).unwrap();
        for op in &ops {
            apply(&mut space, op);

            let (free, used) = tracked_words(&space);
            prop_assert_eq!(free + used, SPACE_WORDS);
            assert_disjoint(&space);
            prop_assert!(space.free_list().blocks().all(|b| b.size > 0));
            prop_assert!(space.allocated_list().blocks().all(|b| b.size > 0));
        }
    }

    #[test]
    fn defrag_reaches_a_fixed_point(
        ops in prop::collection::vec(op_strategy(), 1..60)
    ) {
        let mut space = MemorySpace::new(SPACE_WORDS).unwrap();
        for op in &ops {
            apply(&mut space, op);
        }

        space.defrag();
        let once: Vec<_> = space.free_list().blocks().collect();
        space.defrag();
        let twice: Vec<_> = space.free_list().blocks().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn freed_addresses_can_be_reallocated(
        length in 1usize..=SPACE_WORDS
    ) {
        let mut space = MemorySpace::new(SPACE_WORDS).unwrap();
        let address = space.malloc(length).unwrap();
        space.free(address).unwrap();
        space.defrag();
        prop_assert_eq!(space.malloc(length), Some(address));
    }
}
