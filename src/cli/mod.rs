//! Command implementations behind the `calgo` binary.

pub mod commands;
