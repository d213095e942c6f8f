//! Bindings consumed by the mobile shell.

pub mod errors;
pub mod handle;
pub mod logging;
