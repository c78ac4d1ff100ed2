//! Unit tests for the mobile shell.
//!
//! These tests can access crate internals via `use crate::`.

mod commands;
mod link_intake;
mod surface_sync;
