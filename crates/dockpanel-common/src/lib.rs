//! # dockpanel-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the dockpanel workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and describes the wire contract of the remote container
//! API that every other crate talks about.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
