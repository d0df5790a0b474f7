/*!
 * Memory Types
 * Common types for the simulated memory space
 */

use crate::core::limits::{PRESSURE_CRITICAL_PCT, PRESSURE_HIGH_PCT, PRESSURE_MEDIUM_PCT};
use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryError {
    #[error("index {index} out of range for list of {len} blocks")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid memory space size: {0} words")]
    InvalidSize(Size),

    #[error("nothing to free: no blocks are currently allocated")]
    NothingAllocated,
}

/// A contiguous range of the simulated address space
///
/// Plain value type: two blocks are equal iff base address and size both
/// match. The range covered is `[address, address + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub address: Address,
    pub size: Size,
}

impl Block {
    pub fn new(address: Address, size: Size) -> Self {
        Self { address, size }
    }

    /// First address past the end of this block
    #[inline]
    pub fn end(&self) -> Address {
        self.address + self.size
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.address, self.size)
    }
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_words: Size,
    pub used_words: Size,
    pub free_words: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        if self.usage_percentage >= PRESSURE_CRITICAL_PCT {
            MemoryPressure::Critical
        } else if self.usage_percentage >= PRESSURE_HIGH_PCT {
            MemoryPressure::High
        } else if self.usage_percentage >= PRESSURE_MEDIUM_PCT {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
