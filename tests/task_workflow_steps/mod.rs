//! Step definitions for task workflow scenarios.

pub mod given;
pub mod world;
