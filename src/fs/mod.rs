//! Filesystem utilities for ogc.
//!
//! Generated files are replaced atomically so that a crash never leaves a
//! half-written agent or command definition behind.

pub mod atomic;

pub use atomic::atomic_write_file;
