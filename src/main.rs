/*!
 * Memspace - Demo Entry Point
 *
 * Scripted walk through the simulator:
 * - allocate until the free list fragments
 * - release every other block
 * - coalesce and report
 */

use anyhow::Result;
use log::info;
use memspace::core::limits::DEFAULT_SPACE_WORDS;
use memspace::{MemoryInfo, MemorySpace};

fn main() -> Result<()> {
    env_logger::init();

    info!("memspace starting with {} words", DEFAULT_SPACE_WORDS);
    let mut space = MemorySpace::new(DEFAULT_SPACE_WORDS)?;

    let mut held = Vec::new();
    for request in [64, 128, 32, 256, 16] {
        match space.malloc(request) {
            Some(address) => {
                info!("request for {} words placed at {}", request, address);
                held.push(address);
            }
            None => info!("request for {} words could not be placed", request),
        }
    }

    // fragment the free list
    for address in held.iter().step_by(2) {
        space.free(*address)?;
    }

    println!("before defrag:");
    println!("{}", space);
    space.defrag();
    println!("after defrag:");
    println!("{}", space);

    info!("memory pressure: {}", space.pressure());
    println!("{}", serde_json::to_string_pretty(&space.stats())?);

    Ok(())
}
