//! Service layer for the intent resolver.
//!
//! Wires configuration, the token registry, market data and the resolver
//! together and exposes them through an HTTP API and a command-line tool.
//!
//! # Components
//!
//! - `api`: HTTP endpoints for resolving intents and listing tokens
//! - `cli`: Command-line interface definitions
//! - `service`: Service construction from configuration

pub mod api;
pub mod cli;
pub mod service;
