//! Core types and constants for komikyo
//!
//! This crate contains domain types shared across all other crates.

mod comic;
mod constants;
mod env_config;

pub use comic::*;
pub use constants::*;
pub use env_config::*;
