//! Waypoint CLI - scripted access to the waypoint graph library.
//!
//! This crate provides the `waypoint` binary and the pieces it is built from:
//! script parsing, a session that executes commands against a graph, YAML
//! configuration and text/JSON output.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod script;
pub mod session;
