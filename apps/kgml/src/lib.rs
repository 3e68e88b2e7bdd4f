//! # kgml
//!
//! Command-line front end for `kgml-core`: configuration loading and the
//! CLI commands, exposed as a library so they can be tested directly.

pub mod cli;
pub mod config;
