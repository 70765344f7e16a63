//! Integration tests for SSS-RS crates.
//!
//! This crate contains end-to-end tests that verify kernel properties
//! across `sss-math` and `sss-kernel`, and the config-to-kernel pipeline.

#[cfg(test)]
mod golden;
