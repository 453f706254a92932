#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod catalog;
pub mod reader;
pub mod search;
pub mod stats;
