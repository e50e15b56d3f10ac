// Make the same modules available from the library crate so integration
// tests can reach them via `matrixlab::...`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod shell;
