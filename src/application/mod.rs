//! Application layer: budget operations, the request router with its advance
//! and inspect handlers, and the poll/dispatch loop that drives them.

pub mod handlers;
pub mod runner;
pub mod service;
