//! romi-cli
//!
//! Pieces of the `romi` binary that are worth testing on their own: the
//! config file, logging setup and the line-based intake wizard.

pub mod config;
pub mod logging;
pub mod wizard;
