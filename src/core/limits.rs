/*!
 * Limits and Constants
 *
 * Centralized location for simulator-wide sizes and thresholds.
 */

/// Default simulated address space (1024 words)
/// Used by `MemorySpace::default` and the demo binary
pub const DEFAULT_SPACE_WORDS: usize = 1024;

/// Medium memory pressure threshold (percentage of the space in use)
pub const PRESSURE_MEDIUM_PCT: f64 = 60.0;

/// High memory pressure threshold
/// Allocation still succeeds; callers may want to release or defrag
pub const PRESSURE_HIGH_PCT: f64 = 80.0;

/// Critical memory pressure threshold
/// The space is close to exhaustion; large requests will likely fail
pub const PRESSURE_CRITICAL_PCT: f64 = 95.0;
