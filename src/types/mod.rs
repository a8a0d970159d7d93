//! Core types for pollkit.

pub mod options;
pub mod outcome;

pub use options::*;
pub use outcome::*;
