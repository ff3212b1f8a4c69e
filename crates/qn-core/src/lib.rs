//! # qn-core
//!
//! Core types, ID generation, and error types for Quest Nexus.
//!
//! This crate provides the foundational types shared across all Quest Nexus crates:
//! - The `User` identity record (also the persisted session record)
//! - `Role` and the `SessionPhase` state machine
//! - Random opaque ID generation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
