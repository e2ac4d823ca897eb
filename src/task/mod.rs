//! Task management for the task list.
//!
//! A single user's tasks are held by an explicitly created [`services::TaskStore`]
//! that assigns identifiers, validates input and performs the create, read,
//! update, delete and completion operations. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
