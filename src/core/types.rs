/*!
 * Core Types
 * Common types used across the simulator
 */

/// Address type for memory operations (word offset into the space)
pub type Address = usize;

/// Size type for memory operations (word count)
pub type Size = usize;
