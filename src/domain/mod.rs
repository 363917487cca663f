//! Domain layer: budget records, typed commands, coordinator messages and the
//! ports the application layer is written against.

pub mod budget;
pub mod command;
pub mod ports;
pub mod rollup;
