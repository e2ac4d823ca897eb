//! Tasklist: a single-user task-list manager.
//!
//! This crate provides a task store with create, read, update, delete and
//! completion operations, an optional JSON snapshot file for persistence,
//! and a command-line front end.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON file)
//!
//! # Modules
//!
//! - [`task`]: Task model, store service and snapshot persistence
//! - [`cli`]: Command-line parsing, presentation and dispatch
//! - [`config`]: Store configuration

pub mod cli;
pub mod config;
pub mod task;
