//! Exit code constants for the ogc CLI.
//!
//! - 0: Success, including a generator that was skipped (disabled or absent)
//! - 1: Any failure (configuration, template resolution, or I/O)

/// Successful execution or explicit skip.
pub const SUCCESS: i32 = 0;

/// Any error reported by a generator.
pub const FAILURE: i32 = 1;
