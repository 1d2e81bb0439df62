//! Vigil Core
//!
//! Core types for the Vigil idle agent.
//!
//! This crate contains:
//! - Domain types: per-cycle reporting shared between the agent and its callers

pub mod domain;
